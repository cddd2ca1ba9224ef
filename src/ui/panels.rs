//! UI-Panels: Modus-Leiste, Werkzeugleiste, Inspectoren, Simulations-
//! Steuerung und der blockierende Kreuzungs-Hinweis.

use crate::app::state::InfoCategory;
use crate::app::{AppIntent, AppState, BuildTool, Mode};
use crate::core::ReorderDirection;
use crate::sim::SessionState;

/// Obere Leiste: Modus-Umschalter und (im Build-Modus) Reset.
pub fn render_top_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("mode_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let label = match state.mode {
                Mode::Build => "Build Mode",
                Mode::Simulation => "Simulation Mode",
            };
            if ui.button(label).clicked() {
                events.push(AppIntent::ModeToggleRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if state.mode == Mode::Build && ui.button("Reset").clicked() {
                    events.push(AppIntent::ResetRequested);
                }
            });
        });
    });

    events
}

/// Linke Werkzeugleiste im Build-Modus.
pub fn render_build_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if state.mode != Mode::Build {
        return events;
    }

    egui::SidePanel::left("build_toolbar")
        .resizable(false)
        .default_width(120.0)
        .show(ctx, |ui| {
            ui.label("Tools");
            ui.separator();

            let signal_active = state.editor.signal_tool_active();
            if ui.selectable_label(signal_active, "Traffic Signal").clicked() {
                events.push(AppIntent::BuildToolToggled {
                    tool: BuildTool::TrafficSignal,
                });
            }

            let road_active = state.editor.road_tool_active();
            if ui.selectable_label(road_active, "Road").clicked() {
                events.push(AppIntent::BuildToolToggled {
                    tool: BuildTool::Road,
                });
            }

            // Hinzufügen-Schalter nur mit aktivem Werkzeug
            if state.editor.active_tool.is_some() {
                ui.separator();
                if ui
                    .selectable_label(state.editor.placement_armed, "Add")
                    .clicked()
                {
                    events.push(AppIntent::PlacementToggled);
                }
            }
        });

    events
}

/// Inspector unten links: Ampel-Panel hat Vorrang vor dem Straßen-Panel.
pub fn render_inspector(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    if state.mode != Mode::Build {
        return Vec::new();
    }
    if state.selection.selected_signal.is_some() {
        render_signal_inspector(ctx, state)
    } else if state.selection.selected_road.is_some() {
        render_road_inspector(ctx, state)
    } else {
        Vec::new()
    }
}

fn inspector_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title.to_owned())
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .resizable(false)
        .collapsible(false)
}

fn render_road_inspector(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(road) = state
        .selection
        .selected_road
        .and_then(|id| state.network.road(id))
    else {
        return events;
    };

    inspector_window("Road").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let node_tab = state.selection.info_category == Some(InfoCategory::RoadNode);
            if ui.selectable_label(node_tab, "Road Node").clicked() {
                events.push(AppIntent::InfoCategorySelected {
                    category: InfoCategory::RoadNode,
                });
            }
            let road_tab = state.selection.info_category == Some(InfoCategory::Road);
            if ui.selectable_label(road_tab, "Road").clicked() {
                events.push(AppIntent::InfoCategorySelected {
                    category: InfoCategory::Road,
                });
            }
        });
        ui.separator();

        if state.selection.info_category == Some(InfoCategory::RoadNode) {
            if let Some(node) = state
                .selection
                .selected_node
                .and_then(|id| road.node(id))
            {
                ui.label("X Coordinate");
                let mut lng = node.lng;
                if ui
                    .add(egui::DragValue::new(&mut lng).speed(0.000_01))
                    .changed()
                {
                    events.push(AppIntent::RoadNodeLngChanged { value: lng });
                }
                ui.label("Y Coordinate");
                let mut lat = node.lat;
                if ui
                    .add(egui::DragValue::new(&mut lat).speed(0.000_01))
                    .changed()
                {
                    events.push(AppIntent::RoadNodeLatChanged { value: lat });
                }
                ui.label(format!("Road ID: {}", road.id));
            }
        } else {
            ui.label(format!("Road ID: {}", road.id));

            let mut one_way = road.is_one_way;
            if ui.checkbox(&mut one_way, "One-Way Street").changed() {
                events.push(AppIntent::RoadOneWayToggled { is_one_way: one_way });
            }

            ui.label("Road Node List");
            egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                let last = road.nodes.len().saturating_sub(1);
                for (index, node) in road.nodes.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let selected = state.selection.selected_node == Some(node.id);
                        let label = format!("Road Node [{:.6}, {:.6}]", node.lng, node.lat);
                        if ui.selectable_label(selected, label).clicked() {
                            events.push(AppIntent::RoadNodeListClicked { node_id: node.id });
                        }
                        if ui.add_enabled(index > 0, egui::Button::new("↑")).clicked() {
                            events.push(AppIntent::RoadNodeReorderRequested {
                                index,
                                direction: ReorderDirection::Up,
                            });
                        }
                        if ui
                            .add_enabled(index < last, egui::Button::new("↓"))
                            .clicked()
                        {
                            events.push(AppIntent::RoadNodeReorderRequested {
                                index,
                                direction: ReorderDirection::Down,
                            });
                        }
                    });
                }
            });
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Delete").clicked() {
                events.push(AppIntent::RoadInspectorDeleteRequested);
            }
            if ui.button("Close").clicked() {
                events.push(AppIntent::RoadInspectorCloseRequested);
            }
        });
    });

    events
}

fn render_signal_inspector(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(signal) = state
        .selection
        .selected_signal
        .as_deref()
        .and_then(|name| state.signals.signal(name))
    else {
        return events;
    };

    inspector_window("Traffic Signal").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let signal_tab = state.selection.info_category == Some(InfoCategory::TrafficSignal);
            if ui.selectable_label(signal_tab, "Traffic Signal").clicked() {
                events.push(AppIntent::InfoCategorySelected {
                    category: InfoCategory::TrafficSignal,
                });
            }
            let junction_tab = state.selection.info_category == Some(InfoCategory::Junction);
            if ui.selectable_label(junction_tab, "Junction").clicked() {
                events.push(AppIntent::InfoCategorySelected {
                    category: InfoCategory::Junction,
                });
            }
        });
        ui.separator();

        if state.selection.info_category == Some(InfoCategory::Junction) {
            // Kreuzungs-Reiter: nur erreichbar mit zugeordneter Ampel
            if let Some(junction_id) = signal.junction_id {
                ui.label(format!("Junction ID: {}", junction_id));
                ui.label("Sequence");

                let members = state.signals.members_of(junction_id);
                let last = members.len().saturating_sub(1);
                for (index, member) in members.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let selected = member.name == signal.name;
                        if ui.selectable_label(selected, &member.name).clicked() {
                            events.push(AppIntent::JunctionMemberClicked {
                                name: member.name.clone(),
                            });
                        }
                        if ui.add_enabled(index > 0, egui::Button::new("↑")).clicked() {
                            events.push(AppIntent::JunctionMemberReorderRequested {
                                index,
                                direction: ReorderDirection::Up,
                            });
                        }
                        if ui
                            .add_enabled(index < last, egui::Button::new("↓"))
                            .clicked()
                        {
                            events.push(AppIntent::JunctionMemberReorderRequested {
                                index,
                                direction: ReorderDirection::Down,
                            });
                        }
                    });
                }
            }
        } else {
            ui.label(format!("Name: {}", signal.name));

            ui.horizontal(|ui| {
                ui.label("Junction ID");
                let selected_text = signal
                    .junction_id
                    .map(|id| id.to_string())
                    .unwrap_or_default();
                egui::ComboBox::from_id_salt("junction_select")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for junction_id in state.signals.junctions() {
                            let is_current = signal.junction_id == Some(junction_id);
                            if ui
                                .selectable_label(is_current, junction_id.to_string())
                                .clicked()
                                && !is_current
                            {
                                events.push(AppIntent::SignalJunctionSelected { junction_id });
                            }
                        }
                    });
                if ui.button("New").clicked() {
                    events.push(AppIntent::NewJunctionRequested);
                }
            });

            ui.label("Green Light Duration (seconds)");
            let mut duration = signal.duration_secs;
            if ui
                .add(egui::DragValue::new(&mut duration).range(1..=3600))
                .changed()
            {
                events.push(AppIntent::SignalDurationChanged { secs: duration });
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Delete").clicked() {
                events.push(AppIntent::SignalInspectorDeleteRequested);
            }
            if ui.button("Close").clicked() {
                events.push(AppIntent::SignalInspectorCloseRequested);
            }
        });
    });

    events
}

/// Simulations-Steuerung: Einstellungs-Panel (nur Idle) und die
/// Start/Pause/Stop-Leiste.
pub fn render_simulation_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if state.mode != Mode::Simulation {
        return events;
    }

    if state.session == SessionState::Idle {
        egui::Window::new("Simulation Settings")
            .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Simulation Speed");
                ui.horizontal(|ui| {
                    ui.label("Fast Forward");
                    egui::ComboBox::from_id_salt("speed_select")
                        .selected_text(format!("{}x", state.sim_settings.speed_multiplier))
                        .show_ui(ui, |ui| {
                            for multiplier in [1u32, 2, 5] {
                                let is_current =
                                    state.sim_settings.speed_multiplier == multiplier;
                                if ui
                                    .selectable_label(is_current, format!("{multiplier}x"))
                                    .clicked()
                                {
                                    events.push(AppIntent::SpeedMultiplierChanged { multiplier });
                                }
                            }
                        });
                });
                ui.label(format!(
                    "1 second in real time = {} second(s) in the simulation",
                    state.sim_settings.speed_multiplier
                ));

                ui.separator();
                ui.label("Traffic Flow");
                ui.horizontal(|ui| {
                    ui.label("Vehicle In-Flow (veh/h)");
                    let mut inflow = state.sim_settings.vehicle_inflow;
                    if ui
                        .add(egui::DragValue::new(&mut inflow).range(
                            crate::sim::VEHICLE_INFLOW_MIN..=crate::sim::VEHICLE_INFLOW_MAX,
                        ))
                        .changed()
                    {
                        events.push(AppIntent::VehicleInflowChanged { inflow });
                    }
                });
            });
    }

    egui::Window::new("Session Controls")
        .title_bar(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -12.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Start").clicked() {
                    events.push(AppIntent::SessionStartRequested);
                }
                if ui.button("Pause").clicked() {
                    events.push(AppIntent::SessionPauseRequested);
                }
                if ui.button("Stop").clicked() {
                    events.push(AppIntent::SessionStopRequested);
                }
            });
        });

    events
}

/// Blockierender Hinweis: selektierte Ampel ohne Kreuzungszuordnung.
pub fn render_guard_modal(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.ui.show_signal_guard_notice {
        return events;
    }

    egui::Window::new("Incomplete Traffic Signal Configuration")
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(
                "All traffic signals need to be configured with a junction. \
                 Please assign a junction to the selected traffic signal or \
                 create a new one.",
            );
            ui.separator();
            if ui.button("Close").clicked() {
                events.push(AppIntent::GuardNoticeDismissed);
            }
        });

    events
}
