//! Integrationstests für Straßen-Editing und Kreuzungs-Sequenzen.

use glam::DVec2;
use roadsim_editor::{
    AppController, AppIntent, AppState, BuildTool, GeoPoint, InfoCategory, ReorderDirection,
};

fn app_state() -> AppState {
    let mut state = AppState::new();
    state.viewport.resize([1280.0, 720.0]);
    state.viewport.center = GeoPoint::new(10.0, 10.0);
    state
}

fn place_point(controller: &mut AppController, state: &mut AppState, lng: f64, lat: f64) {
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

/// Aktiviert das Straßen-Werkzeug mit scharfer Platzierung.
fn arm_road_tool(controller: &mut AppController, state: &mut AppState) {
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
}

/// Legt über Intents eine Ampel auf dem Node bei (lng, lat) an.
fn place_signal(controller: &mut AppController, state: &mut AppState, lng: f64, lat: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::BuildToolToggled {
                tool: BuildTool::TrafficSignal,
            },
        )
        .expect("Werkzeugwechsel erwartet");
    controller
        .handle_intent(state, AppIntent::PlacementToggled)
        .expect("Platzierung erwartet");
    let pixel = state.viewport.to_pixel(&GeoPoint::new(lng, lat));
    controller
        .handle_intent(
            state,
            AppIntent::SignalPlacementRequested {
                pixel: DVec2::new(pixel.x, pixel.y),
            },
        )
        .expect("Ampel-Platzierung erwartet");
}

// ─── Straßen-Editing ─────────────────────────────────────────────────────────

#[test]
fn test_first_point_creates_road_following_points_append() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);

    place_point(&mut controller, &mut state, 10.0, 10.0);
    assert_eq!(state.network.road_count(), 1);
    let road_id = state.selection.selected_road.expect("Straße erwartet");
    assert_eq!(state.network.road(road_id).unwrap().name, "road_1");

    place_point(&mut controller, &mut state, 10.0, 10.001);
    place_point(&mut controller, &mut state, 10.0, 10.002);

    let road = state.network.road(road_id).unwrap();
    assert_eq!(road.nodes.len(), 3);
    // Der zuletzt platzierte Node ist selektiert
    assert_eq!(state.selection.selected_node, Some(road.nodes[2].id));
}

#[test]
fn test_reorder_up_then_down_restores_order() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);
    place_point(&mut controller, &mut state, 10.0, 10.0);
    place_point(&mut controller, &mut state, 10.0, 10.001);
    place_point(&mut controller, &mut state, 10.0, 10.002);

    let road_id = state.selection.selected_road.unwrap();
    let original: Vec<u64> = state.network.road(road_id).unwrap().nodes.iter().map(|n| n.id).collect();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RoadNodeReorderRequested {
                index: 1,
                direction: ReorderDirection::Up,
            },
        )
        .expect("Reorder erwartet");
    controller
        .handle_intent(
            &mut state,
            AppIntent::RoadNodeReorderRequested {
                index: 0,
                direction: ReorderDirection::Down,
            },
        )
        .expect("Reorder erwartet");

    let restored: Vec<u64> = state.network.road(road_id).unwrap().nodes.iter().map(|n| n.id).collect();
    assert_eq!(original, restored, "Nachbar-Tausch muss seine eigene Inverse sein");
}

#[test]
fn test_delete_node_via_inspector_clears_selection() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);
    place_point(&mut controller, &mut state, 10.0, 10.0);
    place_point(&mut controller, &mut state, 10.0, 10.001);

    let road_id = state.selection.selected_road.unwrap();
    let node_id = state.selection.selected_node.unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::InfoCategorySelected {
                category: InfoCategory::RoadNode,
            },
        )
        .expect("Reiterwechsel erwartet");
    controller
        .handle_intent(&mut state, AppIntent::RoadInspectorDeleteRequested)
        .expect("Löschen erwartet");

    let road = state.network.road(road_id).unwrap();
    assert_eq!(road.nodes.len(), 1);
    assert!(road.node(node_id).is_none());
    assert!(state.selection.selected_road.is_none());
    assert!(state.selection.selected_node.is_none());
}

#[test]
fn test_delete_road_via_inspector() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);
    place_point(&mut controller, &mut state, 10.0, 10.0);

    let road_id = state.selection.selected_road.unwrap();

    controller
        .handle_intent(&mut state, AppIntent::RoadInspectorDeleteRequested)
        .expect("Löschen erwartet");

    assert!(state.network.road(road_id).is_none());
    assert_eq!(state.network.road_count(), 0);
    assert!(state.selection.selected_road.is_none());
}

#[test]
fn test_node_coordinates_clamp_on_commit() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);
    place_point(&mut controller, &mut state, 10.0, 10.0);

    let road_id = state.selection.selected_road.unwrap();
    let node_id = state.selection.selected_node.unwrap();

    controller
        .handle_intent(&mut state, AppIntent::RoadNodeLngChanged { value: 200.0 })
        .expect("Koordinate erwartet");
    controller
        .handle_intent(&mut state, AppIntent::RoadNodeLatChanged { value: -200.0 })
        .expect("Koordinate erwartet");

    let node = state.network.road(road_id).unwrap().node(node_id).unwrap();
    assert_eq!(node.lng, 180.0);
    assert_eq!(node.lat, -90.0);
}

#[test]
fn test_one_way_toggle_updates_selected_road() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);
    place_point(&mut controller, &mut state, 10.0, 10.0);

    let road_id = state.selection.selected_road.unwrap();
    assert!(!state.network.road(road_id).unwrap().is_one_way);

    controller
        .handle_intent(&mut state, AppIntent::RoadOneWayToggled { is_one_way: true })
        .expect("Toggle erwartet");
    assert!(state.network.road(road_id).unwrap().is_one_way);
}

// ─── Kreuzungs-Workflow ──────────────────────────────────────────────────────

#[test]
fn test_junction_workflow_assign_and_reorder() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);
    place_point(&mut controller, &mut state, 10.0, 10.0);
    place_point(&mut controller, &mut state, 10.0, 10.001);

    // Ampel A auf dem ersten Node, Kreuzung anlegen
    place_signal(&mut controller, &mut state, 10.0, 10.0);
    let signal_a = state.selection.selected_signal.clone().expect("Ampel A erwartet");
    controller
        .handle_intent(&mut state, AppIntent::NewJunctionRequested)
        .expect("Kreuzung erwartet");

    let junction_id = state
        .signals
        .signal(&signal_a)
        .and_then(|s| s.junction_id)
        .expect("Zuordnung erwartet");
    assert_eq!(junction_id, 0);
    assert_eq!(state.signals.signal(&signal_a).unwrap().sequence, Some(0));

    // Ampel B auf dem zweiten Node, derselben Kreuzung zuordnen
    let pixel = state.viewport.to_pixel(&GeoPoint::new(10.0, 10.001));
    controller
        .handle_intent(
            &mut state,
            AppIntent::SignalPlacementRequested {
                pixel: DVec2::new(pixel.x, pixel.y),
            },
        )
        .expect("Ampel-Platzierung erwartet");
    let signal_b = state.selection.selected_signal.clone().expect("Ampel B erwartet");
    assert_ne!(signal_a, signal_b);

    controller
        .handle_intent(&mut state, AppIntent::SignalJunctionSelected { junction_id })
        .expect("Zuordnung erwartet");
    assert_eq!(state.signals.signal(&signal_b).unwrap().sequence, Some(1));

    // Sequenzen sind lückenlos 0..n-1
    let sequences: Vec<u32> = state
        .signals
        .members_of(junction_id)
        .iter()
        .filter_map(|s| s.sequence)
        .collect();
    assert_eq!(sequences, vec![0, 1]);

    // B eine Position nach oben → Sequenzen getauscht
    controller
        .handle_intent(
            &mut state,
            AppIntent::JunctionMemberReorderRequested {
                index: 1,
                direction: ReorderDirection::Up,
            },
        )
        .expect("Reorder erwartet");

    assert_eq!(state.signals.signal(&signal_b).unwrap().sequence, Some(0));
    assert_eq!(state.signals.signal(&signal_a).unwrap().sequence, Some(1));
}

#[test]
fn test_junction_delete_removes_members() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);
    place_point(&mut controller, &mut state, 10.0, 10.0);

    place_signal(&mut controller, &mut state, 10.0, 10.0);
    controller
        .handle_intent(&mut state, AppIntent::NewJunctionRequested)
        .expect("Kreuzung erwartet");

    // Kreuzungs-Reiter wählen und löschen
    controller
        .handle_intent(
            &mut state,
            AppIntent::InfoCategorySelected {
                category: InfoCategory::Junction,
            },
        )
        .expect("Reiterwechsel erwartet");
    controller
        .handle_intent(&mut state, AppIntent::SignalInspectorDeleteRequested)
        .expect("Löschen erwartet");

    assert_eq!(state.signals.signal_count(), 0);
    assert!(state.signals.junctions().is_empty());
    assert!(state.selection.selected_signal.is_none());
}

#[test]
fn test_duration_change_applies_to_selected_signal() {
    let mut controller = AppController::new();
    let mut state = app_state();
    arm_road_tool(&mut controller, &mut state);
    place_point(&mut controller, &mut state, 10.0, 10.0);
    place_signal(&mut controller, &mut state, 10.0, 10.0);

    let name = state.selection.selected_signal.clone().unwrap();
    assert_eq!(state.signals.signal(&name).unwrap().duration_secs, 30);

    controller
        .handle_intent(&mut state, AppIntent::SignalDurationChanged { secs: 45 })
        .expect("Dauer erwartet");
    assert_eq!(state.signals.signal(&name).unwrap().duration_secs, 45);
}
