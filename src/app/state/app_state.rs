//! Hauptzustand der Anwendung.

use crate::app::state::{BuildToolState, Mode, SelectionState, UiState};
use crate::app::CommandLog;
use crate::core::{GeoPoint, MapViewport, RoadNetwork, SignalBoard, Vehicle};
use crate::render::{LayerContext, SceneRevisions};
use crate::shared::EditorOptions;
use crate::sim::SessionState;

/// Initiales Karten-Zentrum (Längengrad/Breitengrad).
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint {
    lng: 101.702397,
    lat: 3.063647,
};
/// Initiale Zoom-Stufe.
pub const DEFAULT_MAP_ZOOM: f64 = 15.0;
/// Standard-Fahrzeugzufluss in Fahrzeugen/Stunde.
pub const DEFAULT_VEHICLE_INFLOW: u32 = 1000;

/// Simulations-Einstellungen, die vor dem Start konfiguriert werden.
#[derive(Debug, Clone, Copy)]
pub struct SimSettings {
    /// Geschwindigkeits-Multiplikator (1, 2 oder 5 in der UI)
    pub speed_multiplier: u32,
    /// Fahrzeug-Zufluss in Fahrzeugen/Stunde
    pub vehicle_inflow: u32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            speed_multiplier: 1,
            vehicle_inflow: DEFAULT_VEHICLE_INFLOW,
        }
    }
}

/// Auftrag an die Sync-Schleife, vom Haupt-Loop nach der Event-Runde
/// abgearbeitet.
///
/// Die Handler bleiben dadurch rein (kein I/O); die Netzwerk-Seite zieht
/// sich die Payloads beim Abarbeiten aus dem Zustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncRequest {
    /// Konfiguration übertragen und Session starten
    StartSession,
    /// Pausierte Session fortsetzen
    ResumeSession,
    /// Session pausieren
    PauseSession,
    /// Session stoppen
    StopSession,
    /// Nur Polling abbrechen (Rückwechsel in den Build-Modus)
    AbortPolling,
    /// Straßen und Ampeln auf die Backend-Baseline zurücksetzen
    Reset,
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Straßennetzwerk
    pub network: RoadNetwork,
    /// Ampel-Sammlung mit abgeleiteten Kreuzungen
    pub signals: SignalBoard,
    /// Letzter Fahrzeug-Snapshot aus der Simulation
    pub vehicles: Vec<Vehicle>,
    /// Karten-Viewport (Projektion + Änderungszähler)
    pub viewport: MapViewport,
    /// Build- oder Simulations-Modus
    pub mode: Mode,
    /// Zustand der Simulations-Session
    pub session: SessionState,
    /// Build-Werkzeugleiste
    pub editor: BuildToolState,
    /// Selektionszustand
    pub selection: SelectionState,
    /// Simulations-Einstellungen
    pub sim_settings: SimSettings,
    /// UI-Zustand (Dialoge, Hinweise)
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Toleranzen, Backend-URL)
    pub options: EditorOptions,
    /// Änderungszähler für die Render-Invalidierung
    pub revisions: SceneRevisions,
    /// Ausstehende Aufträge an die Sync-Schleife
    pub sync_outbox: Vec<SyncRequest>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            network: RoadNetwork::new(),
            signals: SignalBoard::new(),
            vehicles: Vec::new(),
            viewport: MapViewport::new(DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM),
            mode: Mode::Build,
            session: SessionState::Idle,
            editor: BuildToolState::default(),
            selection: SelectionState::new(),
            sim_settings: SimSettings::default(),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            revisions: SceneRevisions::default(),
            sync_outbox: Vec::new(),
        }
    }

    // ── Revision-Helfer für die Render-Invalidierung ────────────

    /// Markiert die Straßen-Kollektion als geändert.
    pub fn mark_roads_changed(&mut self) {
        self.revisions.roads += 1;
    }

    /// Markiert die Ampel-Kollektion als geändert.
    pub fn mark_signals_changed(&mut self) {
        self.revisions.signals += 1;
    }

    /// Markiert den Fahrzeug-Snapshot als geändert.
    pub fn mark_vehicles_changed(&mut self) {
        self.revisions.vehicles += 1;
    }

    /// Markiert die Selektion als geändert.
    pub fn mark_selection_changed(&mut self) {
        self.revisions.selection += 1;
    }

    /// Baut den Sichtbarkeits-Kontext für das Layer-Gating.
    pub fn layer_context(&self) -> LayerContext {
        LayerContext {
            build_mode: self.mode == Mode::Build,
            session_active: self.session.is_active(),
            road_tool_active: self.editor.road_tool_active(),
            signal_placement_armed: self.editor.signal_tool_active() && self.editor.placement_armed,
        }
    }

    /// Gibt zurück, ob die aktuell selektierte Ampel unkonfiguriert ist.
    ///
    /// Solange das der Fall ist, sind Modus- und Werkzeugwechsel blockiert.
    pub fn selected_signal_unconfigured(&self) -> bool {
        self.selection
            .selected_signal
            .as_deref()
            .and_then(|name| self.signals.signal(name))
            .map(|signal| signal.is_unconfigured())
            .unwrap_or(false)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
