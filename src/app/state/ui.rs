//! UI-Zustand: Dialoge und blockierende Hinweise.

/// Sichtbarkeit von Dialogen und Hinweisen.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// Blockierender Hinweis: selektierte Ampel ohne Kreuzungszuordnung
    pub show_signal_guard_notice: bool,
}
