//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::DVec2;

use crate::app::state::{BuildTool, InfoCategory};
use crate::core::{GeoPoint, ReorderDirection};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zwischen Build- und Simulations-Modus umschalten
    ModeToggleRequested,
    /// Build-Werkzeug an-/abwählen (Toggle-Verhalten)
    BuildToolToggled { tool: BuildTool },
    /// Platzierungs-Modus des aktiven Werkzeugs umschalten
    PlacementToggled,

    /// Klick auf den Straßen-Layer: Straße unter dem Punkt selektieren
    RoadPickRequested { pixel: DVec2 },
    /// Klick mit scharfem Straßen-Werkzeug: Punkt platzieren
    RoadPointPlacementRequested { pixel: DVec2 },
    /// Klick mit scharfem Ampel-Werkzeug: Ampel platzieren
    SignalPlacementRequested { pixel: DVec2 },
    /// Ampel-Marker im Build-Modus angeklickt
    SignalClicked { name: String },

    /// Viewport um ein Pixel-Delta verschoben (Pan/Drag)
    ViewportPanned { delta: DVec2 },
    /// Zoom-Stufe um ein Delta geändert (Scroll)
    ViewportZoomed { delta: f64 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f64; 2] },

    /// Inspector-Reiter gewechselt
    InfoCategorySelected { category: InfoCategory },
    /// Node in der Node-Liste der Straße angeklickt
    RoadNodeListClicked { node_id: u64 },
    /// Node in der Liste nach oben/unten verschieben
    RoadNodeReorderRequested {
        index: usize,
        direction: ReorderDirection,
    },
    /// Längengrad des selektierten Nodes geändert
    RoadNodeLngChanged { value: f64 },
    /// Breitengrad des selektierten Nodes geändert
    RoadNodeLatChanged { value: f64 },
    /// Einbahnstraßen-Checkbox umgeschaltet
    RoadOneWayToggled { is_one_way: bool },
    /// Delete-Taste im Straßen-Inspector (Node oder Straße, je nach Reiter)
    RoadInspectorDeleteRequested,
    /// Close-Taste im Straßen-Inspector
    RoadInspectorCloseRequested,

    /// Grünphasen-Dauer der selektierten Ampel geändert
    SignalDurationChanged { secs: u32 },
    /// Kreuzung im Dropdown gewählt
    SignalJunctionSelected { junction_id: u32 },
    /// Neue Kreuzung für die selektierte Ampel anlegen
    NewJunctionRequested,
    /// Mitglied in der Kreuzungs-Sequenzliste angeklickt
    JunctionMemberClicked { name: String },
    /// Mitglied in der Sequenz nach oben/unten verschieben
    JunctionMemberReorderRequested {
        index: usize,
        direction: ReorderDirection,
    },
    /// Delete-Taste im Ampel-Inspector (Ampel oder Kreuzung, je nach Reiter)
    SignalInspectorDeleteRequested,
    /// Close-Taste im Ampel-Inspector (blockiert bei unkonfigurierter Ampel)
    SignalInspectorCloseRequested,
    /// Blockierenden Hinweis schließen
    GuardNoticeDismissed,

    /// Straßen und Ampeln auf die Backend-Baseline zurücksetzen
    ResetRequested,
    /// Play-Taste der Simulation
    SessionStartRequested,
    /// Pause-Taste der Simulation
    SessionPauseRequested,
    /// Stop-Taste der Simulation
    SessionStopRequested,
    /// Geschwindigkeits-Multiplikator gewählt
    SpeedMultiplierChanged { multiplier: u32 },
    /// Fahrzeug-Zufluss eingegeben
    VehicleInflowChanged { inflow: u32 },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Modus umschalten
    ToggleMode,
    /// Build-Werkzeug setzen (None = keines)
    SetBuildTool { tool: Option<BuildTool> },
    /// Platzierungs-Modus umschalten
    TogglePlacement,
    /// Blockierenden Kreuzungs-Hinweis anzeigen
    ShowSignalGuardNotice,
    /// Blockierenden Kreuzungs-Hinweis schließen
    DismissSignalGuardNotice,

    /// Straße am Geo-Punkt selektieren (Segment-Hit-Test)
    SelectRoadAtPoint { point: GeoPoint },
    /// Straßen-Punkt platzieren (neue Straße oder Node anhängen)
    PlaceRoadPoint { point: GeoPoint },
    /// Ampel am nächsten Straßen-Node platzieren
    PlaceSignal { point: GeoPoint },
    /// Ampel selektieren
    SelectSignal { name: String },
    /// Inspector-Reiter setzen
    SetInfoCategory { category: InfoCategory },
    /// Node der selektierten Straße selektieren
    SelectRoadNode { node_id: u64 },

    /// Node in der Folge verschieben
    ReorderRoadNode {
        index: usize,
        direction: ReorderDirection,
    },
    /// Längengrad des selektierten Nodes setzen (geklemmt)
    SetNodeLng { value: f64 },
    /// Breitengrad des selektierten Nodes setzen (geklemmt)
    SetNodeLat { value: f64 },
    /// Einbahnstraßen-Flag der selektierten Straße setzen
    SetRoadOneWay { is_one_way: bool },
    /// Inspector-Ziel löschen (Node oder Straße)
    DeleteRoadInspectorTarget,
    /// Straßen-Inspector schließen
    CloseRoadInspector,

    /// Grünphasen-Dauer der selektierten Ampel setzen
    SetSignalDuration { secs: u32 },
    /// Selektierte Ampel einer Kreuzung zuordnen
    AssignSignalToJunction { junction_id: u32 },
    /// Neue Kreuzung mit der selektierten Ampel anlegen
    CreateJunctionForSelected,
    /// Kreuzungs-Mitglied selektieren
    SelectJunctionMember { name: String },
    /// Kreuzungs-Mitglied in der Sequenz verschieben
    ReorderJunctionMember {
        index: usize,
        direction: ReorderDirection,
    },
    /// Inspector-Ziel löschen (Ampel oder Kreuzung)
    DeleteSignalInspectorTarget,
    /// Ampel-Inspector schließen
    CloseSignalInspector,

    /// Reset bei der Sync-Schleife anfordern
    RequestReset,
    /// Viewport verschieben
    PanViewport { delta: DVec2 },
    /// Zoom-Stufe ändern
    ZoomViewport { delta: f64 },
    /// Viewport-Größe setzen
    ResizeViewport { size: [f64; 2] },

    /// Session starten bzw. fortsetzen
    StartSession,
    /// Session pausieren
    PauseSession,
    /// Session stoppen
    StopSession,
    /// Geschwindigkeits-Multiplikator setzen
    SetSpeedMultiplier { multiplier: u32 },
    /// Fahrzeug-Zufluss setzen (geklemmt)
    SetVehicleInflow { inflow: u32 },
}
