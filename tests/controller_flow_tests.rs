//! Integrationstests für den Intent→Command-Fluss des Controllers.

use glam::DVec2;
use roadsim_editor::{
    AppCommand, AppController, AppIntent, AppState, BuildTool, GeoPoint, InfoCategory, Mode,
};

/// Baut einen App-State mit gesetzter Viewport-Größe.
fn app_state() -> AppState {
    let mut state = AppState::new();
    state.viewport.resize([1280.0, 720.0]);
    state
}

/// Erstellt über Intents eine Straße mit Nodes an den Geo-Punkten.
fn build_road(controller: &mut AppController, state: &mut AppState, points: &[(f64, f64)]) {
    controller
        .handle_intent(
            state,
            AppIntent::BuildToolToggled {
                tool: BuildTool::Road,
            },
        )
        .expect("Werkzeugwechsel erwartet");
    controller
        .handle_intent(state, AppIntent::PlacementToggled)
        .expect("Platzierung erwartet");

    for &(lng, lat) in points {
        let pixel = state.viewport.to_pixel(&GeoPoint::new(lng, lat));
        controller
            .handle_intent(
                state,
                AppIntent::RoadPointPlacementRequested {
                    pixel: DVec2::new(pixel.x, pixel.y),
                },
            )
            .expect("Platzierung erwartet");
    }
}

#[test]
fn test_mode_toggle_clears_build_selection() {
    let mut controller = AppController::new();
    let mut state = app_state();
    build_road(&mut controller, &mut state, &[(101.702, 3.064)]);

    assert!(state.selection.selected_road.is_some());

    controller
        .handle_intent(&mut state, AppIntent::ModeToggleRequested)
        .expect("Moduswechsel erwartet");

    assert_eq!(state.mode, Mode::Simulation);
    assert!(state.selection.selected_road.is_none());
    assert!(state.selection.selected_node.is_none());
    assert!(state.selection.info_category.is_none());

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::ToggleMode));
}

#[test]
fn test_road_click_scenario_selects_and_clears() {
    // Straße mit Nodes (10,10) und (10,20); Klick auf (10,15) selektiert,
    // Klick auf (50,50) hebt die Selektion wieder auf.
    let mut controller = AppController::new();
    let mut state = app_state();
    state.viewport.center = GeoPoint::new(10.0, 15.0);
    build_road(&mut controller, &mut state, &[(10.0, 10.0), (10.0, 20.0)]);

    let road_id = state.selection.selected_road.expect("Straße erwartet");

    // Platzierung entschärfen, damit Klicks selektieren statt platzieren
    controller
        .handle_intent(&mut state, AppIntent::PlacementToggled)
        .expect("Entschärfen erwartet");
    assert!(state.selection.selected_road.is_none());

    let hit_pixel = state.viewport.to_pixel(&GeoPoint::new(10.0, 15.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::RoadPickRequested {
                pixel: DVec2::new(hit_pixel.x, hit_pixel.y),
            },
        )
        .expect("Pick erwartet");

    assert_eq!(state.selection.selected_road, Some(road_id));
    assert_eq!(state.selection.info_category, Some(InfoCategory::Road));

    let miss_pixel = state.viewport.to_pixel(&GeoPoint::new(50.0, 50.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::RoadPickRequested {
                pixel: DVec2::new(miss_pixel.x, miss_pixel.y),
            },
        )
        .expect("Pick erwartet");

    assert!(state.selection.selected_road.is_none());
    assert!(state.selection.info_category.is_none());
}

#[test]
fn test_unconfigured_signal_blocks_mode_and_tool_changes() {
    let mut controller = AppController::new();
    let mut state = app_state();
    state.viewport.center = GeoPoint::new(10.0, 10.0);
    build_road(&mut controller, &mut state, &[(10.0, 10.0)]);

    // Ampel-Werkzeug aktivieren und Ampel am Node platzieren
    controller
        .handle_intent(
            &mut state,
            AppIntent::BuildToolToggled {
                tool: BuildTool::TrafficSignal,
            },
        )
        .expect("Werkzeugwechsel erwartet");
    controller
        .handle_intent(&mut state, AppIntent::PlacementToggled)
        .expect("Platzierung erwartet");
    let pixel = state.viewport.to_pixel(&GeoPoint::new(10.0, 10.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::SignalPlacementRequested {
                pixel: DVec2::new(pixel.x, pixel.y),
            },
        )
        .expect("Ampel-Platzierung erwartet");

    assert!(state.selection.selected_signal.is_some());
    assert!(state.selected_signal_unconfigured());

    // Moduswechsel blockiert, Hinweis erscheint
    controller
        .handle_intent(&mut state, AppIntent::ModeToggleRequested)
        .expect("Intent erwartet");
    assert_eq!(state.mode, Mode::Build);
    assert!(state.ui.show_signal_guard_notice);

    // Werkzeugwechsel ebenfalls blockiert
    controller
        .handle_intent(&mut state, AppIntent::GuardNoticeDismissed)
        .expect("Hinweis schließen erwartet");
    controller
        .handle_intent(
            &mut state,
            AppIntent::BuildToolToggled {
                tool: BuildTool::Road,
            },
        )
        .expect("Intent erwartet");
    assert!(state.editor.signal_tool_active());
    assert!(state.ui.show_signal_guard_notice);

    // Nach Kreuzungszuordnung ist der Wechsel frei
    controller
        .handle_intent(&mut state, AppIntent::GuardNoticeDismissed)
        .expect("Hinweis schließen erwartet");
    controller
        .handle_intent(&mut state, AppIntent::NewJunctionRequested)
        .expect("Kreuzung erwartet");
    assert!(!state.selected_signal_unconfigured());

    controller
        .handle_intent(&mut state, AppIntent::ModeToggleRequested)
        .expect("Moduswechsel erwartet");
    assert_eq!(state.mode, Mode::Simulation);
}

#[test]
fn test_signal_placement_without_nearby_node_is_dropped() {
    let mut controller = AppController::new();
    let mut state = app_state();
    state.viewport.center = GeoPoint::new(10.0, 10.0);
    build_road(&mut controller, &mut state, &[(10.0, 10.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::BuildToolToggled {
                tool: BuildTool::TrafficSignal,
            },
        )
        .expect("Werkzeugwechsel erwartet");
    controller
        .handle_intent(&mut state, AppIntent::PlacementToggled)
        .expect("Platzierung erwartet");

    // Weit weg von jedem Node: keine Ampel
    let pixel = state.viewport.to_pixel(&GeoPoint::new(50.0, 50.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::SignalPlacementRequested {
                pixel: DVec2::new(pixel.x, pixel.y),
            },
        )
        .expect("Intent erwartet");

    assert_eq!(state.signals.signal_count(), 0);
    assert!(state.selection.selected_signal.is_none());
}

#[test]
fn test_toggling_active_tool_deselects_it() {
    let mut controller = AppController::new();
    let mut state = app_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::BuildToolToggled {
                tool: BuildTool::Road,
            },
        )
        .expect("Werkzeugwechsel erwartet");
    assert!(state.editor.road_tool_active());

    controller
        .handle_intent(
            &mut state,
            AppIntent::BuildToolToggled {
                tool: BuildTool::Road,
            },
        )
        .expect("Werkzeugwechsel erwartet");
    assert!(state.editor.active_tool.is_none());
}
