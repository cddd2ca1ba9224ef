//! Fahrzeug-Layer: kleine Kreismarker an den Live-Positionen.

use crate::core::{MapViewport, Vehicle};
use crate::render::DrawPrimitive;
use crate::shared::EditorOptions;

/// Baut die Fahrzeug-Marker des aktuellen Snapshots.
pub fn build(
    vehicles: &[Vehicle],
    viewport: &MapViewport,
    options: &EditorOptions,
) -> Vec<DrawPrimitive> {
    vehicles
        .iter()
        .map(|vehicle| {
            let px = viewport.to_pixel(&vehicle.position());
            DrawPrimitive::Disc {
                center: [px.x as f32, px.y as f32],
                radius: options.vehicle_radius_px,
                color: options.vehicle_color,
            }
        })
        .collect()
}
