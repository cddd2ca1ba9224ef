//! Handler für Selektion und Inspector-Navigation.

use crate::app::state::InfoCategory;
use crate::app::AppState;
use crate::core::{nearest_road, GeoPoint};

/// Selektiert die Straße unter dem Geo-Punkt (Segment-Hit-Test).
///
/// Treffer selektiert die Straße und ihren ersten Node und öffnet den
/// Straßen-Inspector; ein Fehlschlag hebt die Straßen-Selektion auf.
pub fn select_road_at_point(state: &mut AppState, point: GeoPoint) {
    let hit = nearest_road(state.network.roads(), point, state.options.hit_tolerance_deg);

    match hit {
        Some(road_id) => {
            let first_node = state
                .network
                .road(road_id)
                .and_then(|road| road.nodes.first())
                .map(|node| node.id);
            state.selection.selected_road = Some(road_id);
            state.selection.selected_node = first_node;
            state.selection.info_category = Some(InfoCategory::Road);
            log::info!("Straße {} selektiert", road_id);
        }
        None => {
            state.selection.clear_road_selection();
            state.selection.info_category = None;
        }
    }
    state.mark_selection_changed();
}

/// Selektiert eine Ampel und öffnet den Ampel-Inspector.
pub fn select_signal(state: &mut AppState, name: &str) {
    if state.signals.signal(name).is_none() {
        log::warn!("Ampel '{}' nicht gefunden", name);
        return;
    }
    state.selection.selected_signal = Some(name.to_string());
    state.selection.info_category = Some(InfoCategory::TrafficSignal);
    state.mark_selection_changed();
}

/// Selektiert einen Node der selektierten Straße.
pub fn select_road_node(state: &mut AppState, node_id: u64) {
    let Some(road_id) = state.selection.selected_road else {
        return;
    };
    let exists = state
        .network
        .road(road_id)
        .map(|road| road.node(node_id).is_some())
        .unwrap_or(false);
    if exists {
        state.selection.selected_node = Some(node_id);
        state.mark_selection_changed();
    }
}

/// Wechselt den Inspector-Reiter.
///
/// Der Kreuzungs-Reiter ist nur erreichbar, wenn die selektierte Ampel
/// bereits einer Kreuzung zugeordnet ist.
pub fn set_info_category(state: &mut AppState, category: InfoCategory) {
    if category == InfoCategory::Junction && state.selected_signal_unconfigured() {
        return;
    }
    state.selection.info_category = Some(category);
    state.mark_selection_changed();
}

/// Schließt den Straßen-Inspector (hebt Straßen-/Node-Selektion auf).
pub fn close_road_inspector(state: &mut AppState) {
    state.selection.clear_road_selection();
    state.selection.info_category = None;
    state.mark_selection_changed();
}

/// Schließt den Ampel-Inspector.
///
/// Die Kreuzungs-Sperre greift bereits im Intent-Mapping; hier wird nur
/// noch aufgeräumt.
pub fn close_signal_inspector(state: &mut AppState) {
    state.selection.clear_signal_selection();
    state.selection.info_category = None;
    state.mark_selection_changed();
}
