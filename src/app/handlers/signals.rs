//! Handler für Ampeln und Kreuzungs-Sequenzen.

use crate::app::state::InfoCategory;
use crate::app::AppState;
use crate::core::{nearest_node, GeoPoint, ReorderDirection};

/// Platziert eine neue Ampel am nächsten Straßen-Node.
///
/// Ohne Node innerhalb der Toleranz passiert nichts; Ampeln sitzen
/// immer auf einem existierenden Straßen-Punkt.
pub fn place_signal(state: &mut AppState, point: GeoPoint) {
    let Some(hit) = nearest_node(state.network.roads(), point, state.options.hit_tolerance_deg)
    else {
        log::info!("Ampel-Platzierung verworfen: kein Straßen-Node in Reichweite");
        return;
    };
    let Some(position) = state
        .network
        .road(hit.road_id)
        .and_then(|road| road.node(hit.node_id))
        .map(|node| node.position())
    else {
        return;
    };

    let name = state.signals.add_signal(position);
    state.selection.selected_signal = Some(name);
    state.selection.info_category = Some(InfoCategory::TrafficSignal);
    state.mark_signals_changed();
    state.mark_selection_changed();
}

/// Setzt die Grünphasen-Dauer der selektierten Ampel.
pub fn set_duration(state: &mut AppState, secs: u32) {
    let Some(name) = state.selection.selected_signal.clone() else {
        return;
    };
    state.signals.set_duration(&name, secs);
    state.mark_signals_changed();
}

/// Ordnet die selektierte Ampel einer bestehenden Kreuzung zu.
pub fn assign_to_junction(state: &mut AppState, junction_id: u32) {
    let Some(name) = state.selection.selected_signal.clone() else {
        return;
    };
    state.signals.assign_to_junction(&name, junction_id);
    state.mark_signals_changed();
}

/// Legt eine neue Kreuzung mit der selektierten Ampel als erstem Mitglied an.
pub fn create_junction(state: &mut AppState) {
    let Some(name) = state.selection.selected_signal.clone() else {
        return;
    };
    state.signals.create_junction(&name);
    state.mark_signals_changed();
}

/// Selektiert ein Mitglied aus der Kreuzungs-Sequenzliste.
pub fn select_member(state: &mut AppState, name: &str) {
    if state.signals.signal(name).is_none() {
        return;
    }
    state.selection.selected_signal = Some(name.to_string());
    state.selection.info_category = Some(InfoCategory::TrafficSignal);
    state.mark_selection_changed();
}

/// Verschiebt ein Mitglied in der Aktivierungs-Sequenz seiner Kreuzung.
///
/// Die Kreuzung ist die der selektierten Ampel; `index` bezieht sich auf
/// die nach Sequenz sortierte Mitgliederliste.
pub fn reorder_member(state: &mut AppState, index: usize, direction: ReorderDirection) {
    let Some(junction_id) = state
        .selection
        .selected_signal
        .as_deref()
        .and_then(|name| state.signals.signal(name))
        .and_then(|signal| signal.junction_id)
    else {
        return;
    };
    state.signals.reorder_member(junction_id, index, direction);
    state.mark_signals_changed();
}

/// Löscht das aktuelle Inspector-Ziel: die Ampel selbst oder (im
/// Kreuzungs-Reiter) die ganze Kreuzung samt Mitgliedern.
pub fn delete_inspector_target(state: &mut AppState) {
    let Some(name) = state.selection.selected_signal.clone() else {
        return;
    };

    match state.selection.info_category {
        Some(InfoCategory::TrafficSignal) => {
            if state.signals.delete_signal(&name) {
                log::info!("Ampel '{}' gelöscht", name);
            }
        }
        Some(InfoCategory::Junction) => {
            if let Some(junction_id) =
                state.signals.signal(&name).and_then(|signal| signal.junction_id)
            {
                let removed = state.signals.delete_junction(junction_id);
                log::info!("Kreuzung {} mit {} Ampeln gelöscht", junction_id, removed);
            }
        }
        _ => return,
    }

    state.selection.clear_signal_selection();
    state.selection.info_category = None;
    state.mark_signals_changed();
    state.mark_selection_changed();
}
