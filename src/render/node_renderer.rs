//! Node-Layer: kleine Kreismarker pro Straßen-Node.

use crate::core::{MapViewport, Road};
use crate::render::DrawPrimitive;
use crate::shared::EditorOptions;

/// Baut die Node-Marker aller Straßen in Pixelkoordinaten.
///
/// Hervorgehoben wird nur der selektierte Node der selektierten Straße.
pub fn build(
    roads: &[Road],
    selected_road: Option<u64>,
    selected_node: Option<u64>,
    viewport: &MapViewport,
    options: &EditorOptions,
) -> Vec<DrawPrimitive> {
    let mut primitives = Vec::new();

    for road in roads {
        for node in &road.nodes {
            let is_selected =
                selected_road == Some(road.id) && selected_node == Some(node.id);
            let color = if is_selected {
                options.node_color_selected
            } else {
                options.node_color
            };

            let px = viewport.to_pixel(&node.position());
            primitives.push(DrawPrimitive::Disc {
                center: [px.x as f32, px.y as f32],
                radius: options.node_radius_px,
                color,
            });
        }
    }

    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoPoint, RoadNode};

    #[test]
    fn only_selected_node_of_selected_road_is_highlighted() {
        let mut vp = MapViewport::new(GeoPoint::new(10.0, 10.0), 15.0);
        vp.resize([1280.0, 720.0]);
        let options = EditorOptions::default();

        // Gleiche Node-ID auf beiden Straßen: nur die selektierte Straße zählt
        let roads = vec![
            Road {
                id: 1,
                name: "road_1".to_string(),
                is_one_way: false,
                nodes: vec![RoadNode::new(7, GeoPoint::new(10.0, 10.0))],
            },
            Road {
                id: 2,
                name: "road_2".to_string(),
                is_one_way: false,
                nodes: vec![RoadNode::new(7, GeoPoint::new(10.001, 10.0))],
            },
        ];

        let primitives = build(&roads, Some(2), Some(7), &vp, &options);
        let colors: Vec<[u8; 3]> = primitives
            .iter()
            .map(|p| match p {
                DrawPrimitive::Disc { color, .. } => *color,
                other => panic!("Disc erwartet, war: {other:?}"),
            })
            .collect();

        assert_eq!(colors, vec![options.node_color, options.node_color_selected]);
    }
}
