//! Zentrale Konfiguration für den Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Backend ─────────────────────────────────────────────────────────

/// Basis-URL des Simulations-Backends.
pub const BACKEND_BASE_URL: &str = "http://localhost:8080";

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Toleranz für Klick-Treffer in Koordinaten-Grad.
pub const HIT_TOLERANCE_DEG: f64 = 1e-4;

// ── Straßen-Layer ───────────────────────────────────────────────────

/// Linienstärke der Straßen-Polylinien in Pixeln.
pub const ROAD_STROKE_WIDTH_PX: f32 = 3.0;
/// Farbe normaler Straßen (RGB: Dunkelgrau).
pub const ROAD_COLOR: [u8; 3] = [0xA9, 0xA9, 0xA9];
/// Farbe der selektierten Straße (RGB: Violett).
pub const ROAD_COLOR_SELECTED: [u8; 3] = [0xAF, 0x69, 0xEE];

// ── Node-Layer ──────────────────────────────────────────────────────

/// Radius der Node-Marker in Pixeln.
pub const NODE_RADIUS_PX: f32 = 2.0;
/// Farbe normaler Nodes (RGB: Schwarz).
pub const NODE_COLOR: [u8; 3] = [0x00, 0x00, 0x00];
/// Farbe des selektierten Nodes (RGB: Gelb).
pub const NODE_COLOR_SELECTED: [u8; 3] = [0xFF, 0xEA, 0x00];

// ── Fahrzeug-Layer ──────────────────────────────────────────────────

/// Radius der Fahrzeug-Marker in Pixeln.
pub const VEHICLE_RADIUS_PX: f32 = 2.0;
/// Farbe der Fahrzeug-Marker (RGB: Hellblau).
pub const VEHICLE_COLOR: [u8; 3] = [0x1C, 0xA7, 0xEC];

// ── Ampel-Layer ─────────────────────────────────────────────────────

/// Kantenlänge der Ampel-Quadrate in Pixeln (Simulations-Ansicht).
pub const SIGNAL_SQUARE_SIZE_PX: f32 = 8.0;
/// Farbe aktiver Ampeln (RGB: Grün).
pub const SIGNAL_COLOR_ACTIVE: [u8; 3] = [0x6F, 0xC2, 0x76];
/// Farbe inaktiver Ampeln (RGB: Rot).
pub const SIGNAL_COLOR_INACTIVE: [u8; 3] = [0xC4, 0x1E, 0x3A];
/// Größe der klickbaren Ampel-Marker im Build-Modus in Pixeln.
pub const SIGNAL_MARKER_SIZE_PX: f32 = 20.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `roadsim_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Backend ─────────────────────────────────────────────────
    /// Basis-URL des Simulations-Backends
    pub backend_base_url: String,

    // ── Hit-Tests ───────────────────────────────────────────────
    /// Toleranz für Klick-Treffer in Koordinaten-Grad
    pub hit_tolerance_deg: f64,

    // ── Straßen ─────────────────────────────────────────────────
    /// Linienstärke der Straßen-Polylinien in Pixeln
    pub road_stroke_width_px: f32,
    /// Farbe normaler Straßen (RGB)
    pub road_color: [u8; 3],
    /// Farbe der selektierten Straße
    pub road_color_selected: [u8; 3],

    // ── Nodes ───────────────────────────────────────────────────
    /// Radius der Node-Marker in Pixeln
    pub node_radius_px: f32,
    /// Farbe normaler Nodes
    pub node_color: [u8; 3],
    /// Farbe des selektierten Nodes
    pub node_color_selected: [u8; 3],

    // ── Fahrzeuge ───────────────────────────────────────────────
    /// Radius der Fahrzeug-Marker in Pixeln
    pub vehicle_radius_px: f32,
    /// Farbe der Fahrzeug-Marker
    pub vehicle_color: [u8; 3],

    // ── Ampeln ──────────────────────────────────────────────────
    /// Kantenlänge der Ampel-Quadrate in Pixeln
    pub signal_square_size_px: f32,
    /// Farbe aktiver Ampeln
    pub signal_color_active: [u8; 3],
    /// Farbe inaktiver Ampeln
    pub signal_color_inactive: [u8; 3],
    /// Größe der klickbaren Ampel-Marker im Build-Modus
    #[serde(default = "default_signal_marker_size_px")]
    pub signal_marker_size_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            backend_base_url: BACKEND_BASE_URL.to_string(),
            hit_tolerance_deg: HIT_TOLERANCE_DEG,

            road_stroke_width_px: ROAD_STROKE_WIDTH_PX,
            road_color: ROAD_COLOR,
            road_color_selected: ROAD_COLOR_SELECTED,

            node_radius_px: NODE_RADIUS_PX,
            node_color: NODE_COLOR,
            node_color_selected: NODE_COLOR_SELECTED,

            vehicle_radius_px: VEHICLE_RADIUS_PX,
            vehicle_color: VEHICLE_COLOR,

            signal_square_size_px: SIGNAL_SQUARE_SIZE_PX,
            signal_color_active: SIGNAL_COLOR_ACTIVE,
            signal_color_inactive: SIGNAL_COLOR_INACTIVE,
            signal_marker_size_px: SIGNAL_MARKER_SIZE_PX,
        }
    }
}

/// Serde-Default für `signal_marker_size_px` (Abwärtskompatibilität).
fn default_signal_marker_size_px() -> f32 {
    SIGNAL_MARKER_SIZE_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("roadsim_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("roadsim_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_roundtrip_through_toml() {
        let options = EditorOptions::default();
        let toml_str = toml::to_string_pretty(&options).expect("TOML-Serialisierung erwartet");
        let parsed: EditorOptions = toml::from_str(&toml_str).expect("TOML-Parse erwartet");
        assert_eq!(parsed, options);
    }
}
