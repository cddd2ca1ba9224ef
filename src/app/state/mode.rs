//! Editor-Modus und Build-Werkzeuge als geschlossene Enums.

/// Hauptmodus der Anwendung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Straßennetz und Ampeln bearbeiten
    #[default]
    Build,
    /// Simulation steuern und beobachten
    Simulation,
}

/// Build-Werkzeug-Familie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTool {
    /// Straßen selektieren und zeichnen
    Road,
    /// Ampeln selektieren und platzieren
    TrafficSignal,
}

/// Zustand der Build-Werkzeugleiste.
///
/// `placement_armed` entspricht dem zusätzlichen Hinzufügen-Schalter:
/// erst scharfgeschaltet platzieren Klicks neue Elemente, sonst
/// selektieren sie bestehende.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildToolState {
    /// Aktives Werkzeug (None = keines)
    pub active_tool: Option<BuildTool>,
    /// Platzierungs-Modus scharfgeschaltet
    pub placement_armed: bool,
}

impl BuildToolState {
    /// Gibt zurück, ob das Straßen-Werkzeug aktiv ist.
    pub fn road_tool_active(&self) -> bool {
        self.active_tool == Some(BuildTool::Road)
    }

    /// Gibt zurück, ob das Ampel-Werkzeug aktiv ist.
    pub fn signal_tool_active(&self) -> bool {
        self.active_tool == Some(BuildTool::TrafficSignal)
    }
}
