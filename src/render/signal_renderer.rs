//! Ampel-Layer: farbige Quadrate nach Live-Zustand.
//!
//! Gilt nur für die Simulations-Ansicht; im Build-Modus werden Ampeln
//! stattdessen als klickbare Vektor-Marker in der UI gezeichnet.

use crate::core::{MapViewport, TrafficSignal};
use crate::render::DrawPrimitive;
use crate::shared::EditorOptions;

/// Baut die Ampel-Quadrate des aktuellen Snapshots.
pub fn build(
    signals: &[TrafficSignal],
    viewport: &MapViewport,
    options: &EditorOptions,
) -> Vec<DrawPrimitive> {
    signals
        .iter()
        .map(|signal| {
            let px = viewport.to_pixel(&signal.position());
            let color = if signal.is_active {
                options.signal_color_active
            } else {
                options.signal_color_inactive
            };
            DrawPrimitive::Square {
                center: [px.x as f32, px.y as f32],
                size: options.signal_square_size_px,
                color,
            }
        })
        .collect()
}
