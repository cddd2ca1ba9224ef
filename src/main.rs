//! RoadSim Editor.
//!
//! Interaktiver Editor und Live-Viewer für Straßennetze und
//! Ampelsteuerung über einer Kartenansicht, mit Anbindung an ein
//! entferntes Simulations-Backend.

use eframe::egui;
use roadsim_editor::{
    render, ui, AppController, AppState, EditorOptions, RenderLayer, RenderSurfaceManager,
    SimClient, SyncLoop, SyncRequest,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("RoadSim Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("RoadSim Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "RoadSim Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    manager: RenderSurfaceManager,
    input: ui::InputState,
    /// None, wenn die tokio-Runtime nicht gebaut werden konnte
    sync: Option<SyncLoop>,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        let client = SimClient::new(state.options.backend_base_url.clone());
        let sync = match SyncLoop::new(client) {
            Ok(sync) => {
                // Bootstrap: Straßen-Layout und initiale Ampel-Konfiguration
                sync.request_initial_data();
                Some(sync)
            }
            Err(e) => {
                log::error!("Sync-Schleife nicht verfügbar: {e:#}");
                None
            }
        };

        Self {
            state,
            controller: AppController::new(),
            manager: RenderSurfaceManager::new(),
            input: ui::InputState::new(),
            sync,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_sim_events();

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, roadsim_editor::AppIntent::ViewportResized { .. }));

        self.process_events(events);
        self.dispatch_sync_requests();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    /// Holt Snapshot-Ereignisse der Sync-Schleife ab und wendet sie an.
    fn apply_sim_events(&mut self) {
        let Some(sync) = self.sync.as_ref() else {
            return;
        };
        for event in sync.drain_events() {
            self.controller.handle_sim_event(&mut self.state, event);
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<roadsim_editor::AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_top_bar(ctx, &self.state));
        events.extend(ui::render_build_toolbar(ctx, &self.state));
        events.extend(ui::render_inspector(ctx, &self.state));
        events.extend(ui::render_simulation_panel(ctx, &self.state));
        events.extend(ui::render_guard_modal(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui_root| {
                let (rect, response) = ui_root
                    .allocate_exact_size(ui_root.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui_root,
                    &response,
                    rect,
                    &self.state,
                ));

                // Flache Kartenfläche; Tile-Rendering liegt außerhalb des Editors
                ui_root
                    .painter()
                    .rect_filled(rect, 0.0, egui::Color32::from_rgb(0xEE, 0xEE, 0xEA));

                let input = render::RenderInput {
                    roads: self.state.network.roads(),
                    signals: &self.state.signals,
                    vehicles: &self.state.vehicles,
                    viewport: &self.state.viewport,
                    selected_road: self.state.selection.selected_road,
                    selected_node: self.state.selection.selected_node,
                    context: self.state.layer_context(),
                    revisions: self.state.revisions,
                };
                self.manager.sync(&input, &self.state.options);
                paint_layers(ui_root.painter(), rect, &self.manager);

                events.extend(ui::render_signal_markers(ui_root, rect, &self.state));
            });

        events
    }

    fn process_events(&mut self, events: Vec<roadsim_editor::AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Arbeitet die von den Handlern eingereihten Sync-Aufträge ab.
    fn dispatch_sync_requests(&mut self) {
        let requests: Vec<SyncRequest> = self.state.sync_outbox.drain(..).collect();
        if requests.is_empty() {
            return;
        }
        let Some(sync) = self.sync.as_mut() else {
            log::warn!("Sync-Aufträge verworfen: keine Sync-Schleife verfügbar");
            return;
        };

        for request in requests {
            match request {
                SyncRequest::StartSession => sync.start_session(
                    self.state.network.roads().to_vec(),
                    self.state.signals.to_vec(),
                    self.state.sim_settings.vehicle_inflow,
                    self.state.sim_settings.speed_multiplier,
                ),
                SyncRequest::ResumeSession => {
                    sync.resume_session(self.state.sim_settings.speed_multiplier)
                }
                SyncRequest::PauseSession => sync.pause_session(),
                SyncRequest::StopSession => sync.stop_session(),
                SyncRequest::AbortPolling => sync.abort_polling(),
                SyncRequest::Reset => sync.request_reset(),
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
        // Während des Pollings regelmäßig neu zeichnen, damit eintreffende
        // Snapshots ohne weitere Eingabe sichtbar werden
        if self.sync.as_ref().map(|s| s.is_polling()).unwrap_or(false) {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

/// Zeichnet die Layer-Surfaces in Stapel-Reihenfolge auf den Painter.
fn paint_layers(painter: &egui::Painter, rect: egui::Rect, manager: &RenderSurfaceManager) {
    use roadsim_editor::DrawPrimitive;

    for layer in RenderLayer::ALL {
        for primitive in manager.surface(layer).primitives() {
            match primitive {
                DrawPrimitive::Polyline {
                    points,
                    width,
                    color,
                } => {
                    let screen_points: Vec<egui::Pos2> = points
                        .iter()
                        .map(|p| egui::pos2(rect.min.x + p[0], rect.min.y + p[1]))
                        .collect();
                    painter.add(egui::Shape::line(
                        screen_points,
                        egui::Stroke::new(*width, rgb(*color)),
                    ));
                }
                DrawPrimitive::Disc {
                    center,
                    radius,
                    color,
                } => {
                    painter.circle_filled(
                        egui::pos2(rect.min.x + center[0], rect.min.y + center[1]),
                        *radius,
                        rgb(*color),
                    );
                }
                DrawPrimitive::Square {
                    center,
                    size,
                    color,
                } => {
                    let center = egui::pos2(rect.min.x + center[0], rect.min.y + center[1]);
                    painter.rect_filled(
                        egui::Rect::from_center_size(center, egui::vec2(*size, *size)),
                        0.0,
                        rgb(*color),
                    );
                }
            }
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}
