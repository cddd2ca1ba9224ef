//! Render-Surface: pixeladressierbares Zeichenziel eines Layers.

use crate::render::DrawPrimitive;

/// Primitiv-Puffer eines Layers, auf Viewport-Größe bezogen.
///
/// Kein partielles Invalidieren: jeder Rebuild leert den Puffer
/// vollständig und zeichnet von Grund auf neu.
#[derive(Debug, Clone, Default)]
pub struct RenderSurface {
    /// Surface-Größe in Pixeln [Breite, Höhe]
    pub size_px: [f32; 2],
    primitives: Vec<DrawPrimitive>,
}

impl RenderSurface {
    /// Erstellt eine leere Surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only Sicht auf die Primitive des letzten Rebuilds.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    /// Leert die Surface und setzt ihre Größe auf den Viewport.
    pub fn clear(&mut self, size_px: [f32; 2]) {
        self.size_px = size_px;
        self.primitives.clear();
    }

    /// Fügt ein Primitiv hinzu.
    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    /// Ersetzt den gesamten Inhalt durch einen neuen Primitiv-Satz.
    pub fn replace(&mut self, size_px: [f32; 2], primitives: Vec<DrawPrimitive>) {
        self.size_px = size_px;
        self.primitives = primitives;
    }
}
