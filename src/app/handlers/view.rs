//! Handler für Viewport-Steuerung (Pan, Zoom, Resize).

use glam::DVec2;

use crate::app::AppState;

/// Verschiebt den Viewport um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.viewport.pan_pixels(delta);
}

/// Ändert die Zoom-Stufe um ein Delta.
pub fn zoom(state: &mut AppState, delta: f64) {
    state.viewport.zoom_by(delta);
}

/// Setzt die Viewport-Größe in Pixeln.
pub fn resize(state: &mut AppState, size: [f64; 2]) {
    state.viewport.resize(size);
}
