//! Viewport-Input-Handling: Klick, Drag-Pan und Scroll-Zoom → AppIntent.
//!
//! Ein Press-gefolgt-von-Move zählt als Pan: egui meldet in dem Fall
//! keinen Klick mehr, die Klick-Aktion beim Loslassen entfällt damit
//! von selbst.

use glam::DVec2;

use crate::app::{AppIntent, AppState};

/// Zoom-Schritt pro Scroll-Einheit (Mercator-Stufen).
const SCROLL_ZOOM_STEP: f64 = 0.25;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState;

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Klick-Aktionen (Selektieren, Platzieren) entstehen nur auf dem
    /// interaktiven Straßen-Layer bzw. bei scharfgeschalteter
    /// Ampel-Platzierung; Pan und Zoom funktionieren immer.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: [rect.width() as f64, rect.height() as f64],
        });

        // Drag = Pan: Karte folgt dem Zeiger, Inhalt wandert gegenläufig
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::ViewportPanned {
                    delta: DVec2::new(-delta.x as f64, -delta.y as f64),
                });
            }
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let pixel = DVec2::new(
                    (pointer_pos.x - rect.min.x) as f64,
                    (pointer_pos.y - rect.min.y) as f64,
                );
                events.extend(route_click(state, pixel));
            }
        }

        // Scroll-Zoom
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            let delta = if scroll > 0.0 {
                SCROLL_ZOOM_STEP
            } else {
                -SCROLL_ZOOM_STEP
            };
            events.push(AppIntent::ViewportZoomed { delta });
        }

        events
    }
}

/// Routet einen Viewport-Klick anhand von Modus und Werkzeug.
fn route_click(state: &AppState, pixel: DVec2) -> Option<AppIntent> {
    use crate::render::RenderLayer;

    let context = state.layer_context();

    if context.layer_interactive(RenderLayer::RoadGeometry) {
        // Straßen-Werkzeug: scharfgeschaltet platzieren, sonst selektieren
        return Some(if state.editor.placement_armed {
            AppIntent::RoadPointPlacementRequested { pixel }
        } else {
            AppIntent::RoadPickRequested { pixel }
        });
    }

    if context.build_mode && context.signal_placement_armed {
        return Some(AppIntent::SignalPlacementRequested { pixel });
    }

    None
}
