//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt auch die Kreuzungs-Sperre: Intents, die Modus oder
//! Werkzeug wechseln würden, während die selektierte Ampel keiner
//! Kreuzung zugeordnet ist, werden auf den blockierenden Hinweis
//! umgeleitet statt ausgeführt.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // ── Gesperrte Intents bei unkonfigurierter Ampel ────────
        AppIntent::ModeToggleRequested
        | AppIntent::BuildToolToggled { .. }
        | AppIntent::PlacementToggled
        | AppIntent::SignalInspectorCloseRequested
            if state.selected_signal_unconfigured() =>
        {
            vec![AppCommand::ShowSignalGuardNotice]
        }

        AppIntent::ModeToggleRequested => vec![AppCommand::ToggleMode],
        AppIntent::BuildToolToggled { tool } => {
            // Erneutes Anklicken des aktiven Werkzeugs wählt es ab
            let next = if state.editor.active_tool == Some(tool) {
                None
            } else {
                Some(tool)
            };
            vec![AppCommand::SetBuildTool { tool: next }]
        }
        AppIntent::PlacementToggled => vec![AppCommand::TogglePlacement],

        AppIntent::RoadPickRequested { pixel } => {
            vec![AppCommand::SelectRoadAtPoint {
                point: state.viewport.to_geo(pixel),
            }]
        }
        AppIntent::RoadPointPlacementRequested { pixel } => {
            vec![AppCommand::PlaceRoadPoint {
                point: state.viewport.to_geo(pixel),
            }]
        }
        AppIntent::SignalPlacementRequested { pixel } => {
            vec![AppCommand::PlaceSignal {
                point: state.viewport.to_geo(pixel),
            }]
        }
        AppIntent::SignalClicked { name } => vec![AppCommand::SelectSignal { name }],

        AppIntent::ViewportPanned { delta } => vec![AppCommand::PanViewport { delta }],
        AppIntent::ViewportZoomed { delta } => vec![AppCommand::ZoomViewport { delta }],
        AppIntent::ViewportResized { size } => vec![AppCommand::ResizeViewport { size }],

        AppIntent::InfoCategorySelected { category } => {
            vec![AppCommand::SetInfoCategory { category }]
        }
        AppIntent::RoadNodeListClicked { node_id } => {
            vec![AppCommand::SelectRoadNode { node_id }]
        }
        AppIntent::RoadNodeReorderRequested { index, direction } => {
            vec![AppCommand::ReorderRoadNode { index, direction }]
        }
        AppIntent::RoadNodeLngChanged { value } => vec![AppCommand::SetNodeLng { value }],
        AppIntent::RoadNodeLatChanged { value } => vec![AppCommand::SetNodeLat { value }],
        AppIntent::RoadOneWayToggled { is_one_way } => {
            vec![AppCommand::SetRoadOneWay { is_one_way }]
        }
        AppIntent::RoadInspectorDeleteRequested => vec![AppCommand::DeleteRoadInspectorTarget],
        AppIntent::RoadInspectorCloseRequested => vec![AppCommand::CloseRoadInspector],

        AppIntent::SignalDurationChanged { secs } => {
            vec![AppCommand::SetSignalDuration { secs }]
        }
        AppIntent::SignalJunctionSelected { junction_id } => {
            vec![AppCommand::AssignSignalToJunction { junction_id }]
        }
        AppIntent::NewJunctionRequested => vec![AppCommand::CreateJunctionForSelected],
        AppIntent::JunctionMemberClicked { name } => {
            vec![AppCommand::SelectJunctionMember { name }]
        }
        AppIntent::JunctionMemberReorderRequested { index, direction } => {
            vec![AppCommand::ReorderJunctionMember { index, direction }]
        }
        AppIntent::SignalInspectorDeleteRequested => {
            vec![AppCommand::DeleteSignalInspectorTarget]
        }
        AppIntent::SignalInspectorCloseRequested => vec![AppCommand::CloseSignalInspector],
        AppIntent::GuardNoticeDismissed => vec![AppCommand::DismissSignalGuardNotice],

        AppIntent::ResetRequested => vec![AppCommand::RequestReset],
        AppIntent::SessionStartRequested => vec![AppCommand::StartSession],
        AppIntent::SessionPauseRequested => vec![AppCommand::PauseSession],
        AppIntent::SessionStopRequested => vec![AppCommand::StopSession],
        AppIntent::SpeedMultiplierChanged { multiplier } => {
            vec![AppCommand::SetSpeedMultiplier { multiplier }]
        }
        AppIntent::VehicleInflowChanged { inflow } => {
            vec![AppCommand::SetVehicleInflow { inflow }]
        }
    }
}
