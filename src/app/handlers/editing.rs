//! Handler für Straßen- und Node-Editing.

use crate::app::state::InfoCategory;
use crate::app::AppState;
use crate::core::{GeoPoint, ReorderDirection};

/// Platziert einen Straßen-Punkt.
///
/// Ohne selektierte Straße entsteht eine neue Straße mit einem einzelnen
/// Node, die anschließend selektiert ist; mit selektierter Straße wird
/// der Punkt als Node angehängt und selbst selektiert.
pub fn place_road_point(state: &mut AppState, point: GeoPoint) {
    match state.selection.selected_road {
        None => {
            let road_id = state.network.add_road(point);
            let first_node = state
                .network
                .road(road_id)
                .and_then(|road| road.nodes.first())
                .map(|node| node.id);
            state.selection.selected_road = Some(road_id);
            state.selection.selected_node = first_node;
            state.selection.info_category = Some(InfoCategory::Road);
        }
        Some(road_id) => {
            let Some(node_id) = state.network.append_node(road_id, point) else {
                return;
            };
            state.selection.selected_node = Some(node_id);
            state.selection.info_category = Some(InfoCategory::Road);
        }
    }
    state.mark_roads_changed();
    state.mark_selection_changed();
}

/// Verschiebt den Node an `index` der selektierten Straße.
pub fn reorder_node(state: &mut AppState, index: usize, direction: ReorderDirection) {
    let Some(road_id) = state.selection.selected_road else {
        return;
    };
    state.network.reorder_node(road_id, index, direction);
    state.mark_roads_changed();
}

/// Setzt den Längengrad des selektierten Nodes (Klemmen übernimmt das Modell).
pub fn set_node_lng(state: &mut AppState, value: f64) {
    let (Some(road_id), Some(node_id)) =
        (state.selection.selected_road, state.selection.selected_node)
    else {
        return;
    };
    let Some(current) = state
        .network
        .road(road_id)
        .and_then(|road| road.node(node_id))
        .map(|node| node.position())
    else {
        return;
    };
    state
        .network
        .set_node_position(road_id, node_id, GeoPoint::new(value, current.lat));
    state.mark_roads_changed();
}

/// Setzt den Breitengrad des selektierten Nodes (Klemmen übernimmt das Modell).
pub fn set_node_lat(state: &mut AppState, value: f64) {
    let (Some(road_id), Some(node_id)) =
        (state.selection.selected_road, state.selection.selected_node)
    else {
        return;
    };
    let Some(current) = state
        .network
        .road(road_id)
        .and_then(|road| road.node(node_id))
        .map(|node| node.position())
    else {
        return;
    };
    state
        .network
        .set_node_position(road_id, node_id, GeoPoint::new(current.lng, value));
    state.mark_roads_changed();
}

/// Setzt das Einbahnstraßen-Flag der selektierten Straße.
pub fn set_one_way(state: &mut AppState, is_one_way: bool) {
    let Some(road_id) = state.selection.selected_road else {
        return;
    };
    state.network.set_one_way(road_id, is_one_way);
    state.mark_roads_changed();
}

/// Löscht das aktuelle Inspector-Ziel: Node oder ganze Straße, je nach
/// aktivem Reiter. Danach ist die Straßen-Selektion in beiden Fällen leer.
pub fn delete_inspector_target(state: &mut AppState) {
    let Some(road_id) = state.selection.selected_road else {
        return;
    };

    match state.selection.info_category {
        Some(InfoCategory::RoadNode) => {
            if let Some(node_id) = state.selection.selected_node {
                if state.network.delete_node(road_id, node_id) {
                    log::info!("Node {} von Straße {} gelöscht", node_id, road_id);
                }
            }
        }
        Some(InfoCategory::Road) => {
            if state.network.delete_road(road_id) {
                log::info!("Straße {} gelöscht", road_id);
            }
        }
        _ => return,
    }

    state.selection.clear_road_selection();
    state.selection.info_category = None;
    state.mark_roads_changed();
    state.mark_selection_changed();
}
