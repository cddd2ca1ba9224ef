//! Auswahlbezogener Anwendungszustand.

/// Kategorie des Inspector-Panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoCategory {
    /// Straßen-Eigenschaften
    Road,
    /// Node-Eigenschaften
    RoadNode,
    /// Ampel-Eigenschaften
    TrafficSignal,
    /// Kreuzungs-Mitgliederliste
    Junction,
}

/// Aktuelle Selektion über alle Editierbereiche.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selektierte Straße (ID)
    pub selected_road: Option<u64>,
    /// Selektierter Node (stabile ID, gehört zur selektierten Straße)
    pub selected_node: Option<u64>,
    /// Selektierte Ampel (eindeutiger Name)
    pub selected_signal: Option<String>,
    /// Angezeigtes Inspector-Panel
    pub info_category: Option<InfoCategory>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt die Straßen-/Node-Selektion auf.
    pub fn clear_road_selection(&mut self) {
        self.selected_road = None;
        self.selected_node = None;
    }

    /// Hebt die Ampel-Selektion auf.
    pub fn clear_signal_selection(&mut self) {
        self.selected_signal = None;
    }

    /// Hebt jede Selektion auf und schließt den Inspector.
    pub fn clear_all(&mut self) {
        self.clear_road_selection();
        self.clear_signal_selection();
        self.info_category = None;
    }
}
