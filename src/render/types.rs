//! Rendering-Typen: Layer, Zeichenprimitive und Sichtbarkeits-Gating.

/// Die vier logischen Render-Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderLayer {
    /// Straßen-Polylinien (immer sichtbar)
    RoadGeometry,
    /// Node-Marker (Build-Modus mit aktivem Werkzeug)
    RoadNodes,
    /// Fahrzeug-Marker (Simulations-Modus, Session aktiv)
    Vehicles,
    /// Ampel-Quadrate (Simulations-Modus, Session aktiv)
    TrafficSignals,
}

impl RenderLayer {
    /// Alle Layer in Stapel-Reihenfolge (unten zuerst).
    pub const ALL: [RenderLayer; 4] = [
        RenderLayer::RoadGeometry,
        RenderLayer::TrafficSignals,
        RenderLayer::RoadNodes,
        RenderLayer::Vehicles,
    ];

    /// Index des Layers in Dirty-Flag-Arrays.
    pub fn index(self) -> usize {
        match self {
            RenderLayer::RoadGeometry => 0,
            RenderLayer::RoadNodes => 1,
            RenderLayer::Vehicles => 2,
            RenderLayer::TrafficSignals => 3,
        }
    }
}

/// Zeichenprimitiv in Viewport-Pixelkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Offener Linienzug (keine implizite Schließung)
    Polyline {
        /// Stützpunkte in Pixeln
        points: Vec<[f32; 2]>,
        /// Linienstärke in Pixeln
        width: f32,
        /// Linienfarbe (RGB)
        color: [u8; 3],
    },
    /// Gefüllte Kreisscheibe
    Disc {
        /// Mittelpunkt in Pixeln
        center: [f32; 2],
        /// Radius in Pixeln
        radius: f32,
        /// Füllfarbe (RGB)
        color: [u8; 3],
    },
    /// Gefülltes, achsparalleles Quadrat (zentriert)
    Square {
        /// Mittelpunkt in Pixeln
        center: [f32; 2],
        /// Kantenlänge in Pixeln
        size: f32,
        /// Füllfarbe (RGB)
        color: [u8; 3],
    },
}

/// Sichtbarkeits-Kontext für das Layer-Gating.
///
/// Bewusst auf primitive Flags reduziert, damit `render` keine
/// App-Zustandstypen importieren muss.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerContext {
    /// Build-Modus aktiv (sonst Simulations-Modus)
    pub build_mode: bool,
    /// Session läuft oder ist pausiert
    pub session_active: bool,
    /// Straßen-Werkzeug aktiv
    pub road_tool_active: bool,
    /// Ampel-Platzierung scharfgeschaltet
    pub signal_placement_armed: bool,
}

impl LayerContext {
    /// Gibt zurück, ob ein Layer in diesem Kontext sichtbar ist.
    pub fn layer_visible(&self, layer: RenderLayer) -> bool {
        match layer {
            RenderLayer::RoadGeometry => true,
            // Nodes nur im Build-Modus mit aktivem Straßen-Werkzeug oder
            // scharfgeschalteter Ampel-Platzierung
            RenderLayer::RoadNodes => {
                self.build_mode && (self.road_tool_active || self.signal_placement_armed)
            }
            RenderLayer::Vehicles | RenderLayer::TrafficSignals => {
                !self.build_mode && self.session_active
            }
        }
    }

    /// Gibt zurück, ob ein Layer Pointer-Eingaben entgegennimmt.
    ///
    /// Nur der Straßen-Layer, nur im Build-Modus, nur mit aktivem
    /// Straßen-Werkzeug.
    pub fn layer_interactive(&self, layer: RenderLayer) -> bool {
        layer == RenderLayer::RoadGeometry && self.build_mode && self.road_tool_active
    }
}
