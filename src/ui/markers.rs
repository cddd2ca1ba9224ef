//! Klickbare Ampel-Marker im Build-Modus.
//!
//! Im Build-Modus liegen Ampeln nicht auf dem Render-Layer, sondern sind
//! diskrete Vektor-Marker mit eigener Hitbox; Klicks selektieren die
//! Ampel, aber nur solange das Ampel-Werkzeug aktiv ist.

use crate::app::{AppIntent, AppState, Mode};

/// Zeichnet die Ampel-Marker und sammelt Klick-Intents.
pub fn render_signal_markers(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    state: &AppState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if state.mode != Mode::Build {
        return events;
    }

    let size = state.options.signal_marker_size_px;
    let painter = ui.painter_at(rect);

    for signal in state.signals.signals() {
        let px = state.viewport.to_pixel(&signal.position());
        // Anker unten-mittig, wie ein Karten-Pin
        let center = egui::pos2(
            rect.min.x + px.x as f32,
            rect.min.y + px.y as f32 - size / 2.0,
        );
        let marker_rect = egui::Rect::from_center_size(center, egui::vec2(size, size));

        let selected = state.selection.selected_signal.as_deref() == Some(signal.name.as_str());
        let [r, g, b] = if selected {
            state.options.road_color_selected
        } else {
            [0x00, 0x00, 0x00]
        };
        let color = egui::Color32::from_rgb(r, g, b);

        // Stilisiertes Ampel-Symbol: Gehäuse + drei Lichter
        painter.rect_filled(marker_rect.shrink(size * 0.25), 2.0, color);
        let light_radius = size * 0.08;
        for step in 0..3 {
            let y = marker_rect.top() + size * (0.35 + 0.15 * step as f32);
            painter.circle_filled(
                egui::pos2(center.x, y),
                light_radius,
                egui::Color32::WHITE,
            );
        }

        let response = ui.interact(
            marker_rect,
            ui.id().with(("signal-marker", signal.name.as_str())),
            egui::Sense::click(),
        );
        if response.clicked() && state.editor.signal_tool_active() {
            events.push(AppIntent::SignalClicked {
                name: signal.name.clone(),
            });
        }
    }

    events
}
