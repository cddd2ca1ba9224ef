//! Handler für Modus-, Werkzeug- und Hinweis-Steuerung.

use crate::app::state::{BuildTool, Mode, SyncRequest};
use crate::app::AppState;
use crate::sim::SessionState;

/// Schaltet zwischen Build- und Simulations-Modus um.
///
/// Beim Wechsel in die Simulation wird der gesamte Build-Selektionszustand
/// geleert. Beim Rückwechsel in den Build-Modus werden nur die lokalen
/// Session-Flags zurückgesetzt und das Polling beendet; ein Stop-Kommando
/// an das Backend wird bewusst NICHT gesendet.
pub fn toggle_mode(state: &mut AppState) {
    match state.mode {
        Mode::Build => {
            state.selection.clear_all();
            state.editor.active_tool = None;
            state.editor.placement_armed = false;
            state.mode = Mode::Simulation;
            state.mark_selection_changed();
            log::info!("Modus: Simulation");
        }
        Mode::Simulation => {
            if state.session.is_active() {
                state.sync_outbox.push(SyncRequest::AbortPolling);
            }
            state.session = SessionState::Idle;
            state.mode = Mode::Build;
            log::info!("Modus: Build");
        }
    }
}

/// Setzt das aktive Build-Werkzeug (None = abgewählt).
///
/// Jeder Werkzeugwechsel leert Selektion und Platzierungs-Modus.
pub fn set_build_tool(state: &mut AppState, tool: Option<BuildTool>) {
    state.editor.active_tool = tool;
    state.editor.placement_armed = false;
    state.selection.clear_all();
    state.mark_selection_changed();
    log::info!("Build-Werkzeug: {:?}", tool);
}

/// Schaltet den Platzierungs-Modus des aktiven Werkzeugs um.
///
/// Beim Entschärfen wird wie im Werkzeugwechsel die Selektion geleert.
pub fn toggle_placement(state: &mut AppState) {
    if state.editor.active_tool.is_none() {
        return;
    }
    if state.editor.placement_armed {
        state.editor.placement_armed = false;
        state.selection.clear_all();
        state.mark_selection_changed();
    } else {
        state.editor.placement_armed = true;
    }
}

/// Zeigt den blockierenden Hinweis für unkonfigurierte Ampeln.
pub fn show_guard_notice(state: &mut AppState) {
    state.ui.show_signal_guard_notice = true;
}

/// Schließt den blockierenden Hinweis.
pub fn dismiss_guard_notice(state: &mut AppState) {
    state.ui.show_signal_guard_notice = false;
}

/// Fordert den Baseline-Reset bei der Sync-Schleife an und leert die
/// Selektion.
pub fn request_reset(state: &mut AppState) {
    state.sync_outbox.push(SyncRequest::Reset);
    state.selection.clear_all();
    state.mark_selection_changed();
    log::info!("Reset auf Backend-Baseline angefordert");
}
