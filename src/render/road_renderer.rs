//! Straßen-Layer: eine Polylinie pro Straße.

use crate::core::{MapViewport, Road};
use crate::render::DrawPrimitive;
use crate::shared::EditorOptions;

/// Baut die Polylinien aller Straßen in Pixelkoordinaten.
///
/// Die selektierte Straße wird in der Hervorhebungsfarbe gezeichnet.
/// Straßen mit nur einem Node erzeugen keine Linie.
pub fn build(
    roads: &[Road],
    selected_road: Option<u64>,
    viewport: &MapViewport,
    options: &EditorOptions,
) -> Vec<DrawPrimitive> {
    let mut primitives = Vec::with_capacity(roads.len());

    for road in roads {
        if road.nodes.len() < 2 {
            continue;
        }

        let points: Vec<[f32; 2]> = road
            .nodes
            .iter()
            .map(|node| {
                let px = viewport.to_pixel(&node.position());
                [px.x as f32, px.y as f32]
            })
            .collect();

        let color = if selected_road == Some(road.id) {
            options.road_color_selected
        } else {
            options.road_color
        };

        primitives.push(DrawPrimitive::Polyline {
            points,
            width: options.road_stroke_width_px,
            color,
        });
    }

    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoPoint, RoadNode};

    fn viewport() -> MapViewport {
        let mut vp = MapViewport::new(GeoPoint::new(10.0, 10.0), 15.0);
        vp.resize([1280.0, 720.0]);
        vp
    }

    fn two_node_road(id: u64) -> Road {
        Road {
            id,
            name: format!("road_{id}"),
            is_one_way: false,
            nodes: vec![
                RoadNode::new(0, GeoPoint::new(10.0, 10.0)),
                RoadNode::new(1, GeoPoint::new(10.001, 10.0)),
            ],
        }
    }

    #[test]
    fn selected_road_gets_highlight_color() {
        let roads = vec![two_node_road(1), two_node_road(2)];
        let options = EditorOptions::default();
        let primitives = build(&roads, Some(2), &viewport(), &options);

        assert_eq!(primitives.len(), 2);
        match (&primitives[0], &primitives[1]) {
            (
                DrawPrimitive::Polyline { color: first, .. },
                DrawPrimitive::Polyline { color: second, .. },
            ) => {
                assert_eq!(*first, options.road_color);
                assert_eq!(*second, options.road_color_selected);
            }
            other => panic!("Polylinien erwartet, war: {other:?}"),
        }
    }

    #[test]
    fn single_node_road_draws_nothing() {
        let road = Road {
            id: 1,
            name: "road_1".to_string(),
            is_one_way: false,
            nodes: vec![RoadNode::new(0, GeoPoint::new(10.0, 10.0))],
        };
        let primitives = build(&[road], None, &viewport(), &EditorOptions::default());
        assert!(primitives.is_empty());
    }
}
