//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::sim::SimEvent;

/// Orchestriert UI-Events und Snapshot-Ereignisse auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus & Werkzeuge ===
            AppCommand::ToggleMode => handlers::mode::toggle_mode(state),
            AppCommand::SetBuildTool { tool } => handlers::mode::set_build_tool(state, tool),
            AppCommand::TogglePlacement => handlers::mode::toggle_placement(state),
            AppCommand::ShowSignalGuardNotice => handlers::mode::show_guard_notice(state),
            AppCommand::DismissSignalGuardNotice => handlers::mode::dismiss_guard_notice(state),
            AppCommand::RequestReset => handlers::mode::request_reset(state),

            // === Selektion ===
            AppCommand::SelectRoadAtPoint { point } => {
                handlers::selection::select_road_at_point(state, point)
            }
            AppCommand::SelectSignal { name } => handlers::selection::select_signal(state, &name),
            AppCommand::SelectRoadNode { node_id } => {
                handlers::selection::select_road_node(state, node_id)
            }
            AppCommand::SetInfoCategory { category } => {
                handlers::selection::set_info_category(state, category)
            }
            AppCommand::CloseRoadInspector => handlers::selection::close_road_inspector(state),
            AppCommand::CloseSignalInspector => handlers::selection::close_signal_inspector(state),

            // === Straßen-Editing ===
            AppCommand::PlaceRoadPoint { point } => handlers::editing::place_road_point(state, point),
            AppCommand::ReorderRoadNode { index, direction } => {
                handlers::editing::reorder_node(state, index, direction)
            }
            AppCommand::SetNodeLng { value } => handlers::editing::set_node_lng(state, value),
            AppCommand::SetNodeLat { value } => handlers::editing::set_node_lat(state, value),
            AppCommand::SetRoadOneWay { is_one_way } => {
                handlers::editing::set_one_way(state, is_one_way)
            }
            AppCommand::DeleteRoadInspectorTarget => {
                handlers::editing::delete_inspector_target(state)
            }

            // === Ampeln & Kreuzungen ===
            AppCommand::PlaceSignal { point } => handlers::signals::place_signal(state, point),
            AppCommand::SetSignalDuration { secs } => handlers::signals::set_duration(state, secs),
            AppCommand::AssignSignalToJunction { junction_id } => {
                handlers::signals::assign_to_junction(state, junction_id)
            }
            AppCommand::CreateJunctionForSelected => handlers::signals::create_junction(state),
            AppCommand::SelectJunctionMember { name } => {
                handlers::signals::select_member(state, &name)
            }
            AppCommand::ReorderJunctionMember { index, direction } => {
                handlers::signals::reorder_member(state, index, direction)
            }
            AppCommand::DeleteSignalInspectorTarget => {
                handlers::signals::delete_inspector_target(state)
            }

            // === Viewport ===
            AppCommand::PanViewport { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomViewport { delta } => handlers::view::zoom(state, delta),
            AppCommand::ResizeViewport { size } => handlers::view::resize(state, size),

            // === Simulation ===
            AppCommand::StartSession => handlers::simulation::start_session(state),
            AppCommand::PauseSession => handlers::simulation::pause_session(state),
            AppCommand::StopSession => handlers::simulation::stop_session(state),
            AppCommand::SetSpeedMultiplier { multiplier } => {
                handlers::simulation::set_speed_multiplier(state, multiplier)
            }
            AppCommand::SetVehicleInflow { inflow } => {
                handlers::simulation::set_vehicle_inflow(state, inflow)
            }
        }

        Ok(())
    }

    /// Wendet ein Snapshot-Ereignis der Sync-Schleife auf den Zustand an.
    pub fn handle_sim_event(&mut self, state: &mut AppState, event: SimEvent) {
        super::handlers::simulation::apply_sim_event(state, event);
    }
}
