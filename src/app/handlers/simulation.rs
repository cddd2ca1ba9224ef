//! Handler für Session-Steuerung und eingehende Simulations-Snapshots.

use crate::app::state::{InfoCategory, SyncRequest};
use crate::app::AppState;
use crate::core::{Road, TrafficSignal, Vehicle};
use crate::sim::{clamp_inflow, SessionCommand, SimEvent};

/// Play-Taste: startet aus Idle, setzt aus Paused fort.
pub fn start_session(state: &mut AppState) {
    let Some((command, next)) = state.session.on_start() else {
        return;
    };
    state.session = next;
    state.sync_outbox.push(match command {
        SessionCommand::ConfigureAndStart => SyncRequest::StartSession,
        SessionCommand::Resume => SyncRequest::ResumeSession,
        // on_start liefert nur Start/Resume
        SessionCommand::Pause | SessionCommand::Stop => return,
    });
}

/// Pause-Taste: hält Polling an, letzter Snapshot bleibt stehen.
pub fn pause_session(state: &mut AppState) {
    let Some((_, next)) = state.session.on_pause() else {
        return;
    };
    state.session = next;
    state.sync_outbox.push(SyncRequest::PauseSession);
}

/// Stop-Taste: beendet die Session aus Running oder Paused.
pub fn stop_session(state: &mut AppState) {
    let Some((_, next)) = state.session.on_stop() else {
        return;
    };
    state.session = next;
    state.sync_outbox.push(SyncRequest::StopSession);
}

/// Setzt den Geschwindigkeits-Multiplikator für den nächsten Start.
pub fn set_speed_multiplier(state: &mut AppState, multiplier: u32) {
    state.sim_settings.speed_multiplier = multiplier.max(1);
}

/// Setzt den Fahrzeug-Zufluss, client-seitig geklemmt.
pub fn set_vehicle_inflow(state: &mut AppState, inflow: u32) {
    state.sim_settings.vehicle_inflow = clamp_inflow(inflow);
}

/// Wendet ein Snapshot-Ereignis der Sync-Schleife an.
///
/// Jede Variante ersetzt den zugehörigen Zustand im Ganzen; Selektionen
/// auf verschwundene Objekte werden bereinigt.
pub fn apply_sim_event(state: &mut AppState, event: SimEvent) {
    match event {
        SimEvent::Roads(roads) => apply_roads(state, roads),
        SimEvent::Signals(signals) => apply_signals(state, signals),
        SimEvent::Vehicles(vehicles) => apply_vehicles(state, vehicles),
    }
}

fn apply_roads(state: &mut AppState, roads: Vec<Road>) {
    state.network.replace_all(roads);

    // Selektion bereinigen, falls die Straße nicht mehr existiert
    if let Some(road_id) = state.selection.selected_road {
        if state.network.road(road_id).is_none() {
            state.selection.clear_road_selection();
            if matches!(
                state.selection.info_category,
                Some(InfoCategory::Road | InfoCategory::RoadNode)
            ) {
                state.selection.info_category = None;
            }
            state.mark_selection_changed();
        }
    }
    state.mark_roads_changed();
}

fn apply_signals(state: &mut AppState, signals: Vec<TrafficSignal>) {
    state.signals.replace_all(signals);

    if let Some(name) = state.selection.selected_signal.clone() {
        if state.signals.signal(&name).is_none() {
            state.selection.clear_signal_selection();
            if matches!(
                state.selection.info_category,
                Some(InfoCategory::TrafficSignal | InfoCategory::Junction)
            ) {
                state.selection.info_category = None;
            }
            state.mark_selection_changed();
        }
    }
    state.mark_signals_changed();
}

fn apply_vehicles(state: &mut AppState, vehicles: Vec<Vehicle>) {
    state.vehicles = vehicles;
    state.mark_vehicles_changed();
}
