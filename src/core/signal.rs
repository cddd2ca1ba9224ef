//! Ampeln (Traffic Signals) im Wire-Format des Backends.

use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;

/// Minimale Grünphasen-Dauer in Sekunden.
pub const MIN_SIGNAL_DURATION_SECS: u32 = 1;
/// Standard-Grünphasen-Dauer neuer Ampeln in Sekunden.
pub const DEFAULT_SIGNAL_DURATION_SECS: u32 = 30;

/// Punktförmige Ampel mit optionaler Kreuzungszuordnung.
///
/// `junction_id == None` markiert eine unkonfigurierte Ampel; sie blockiert
/// Modus- und Werkzeugwechsel, solange sie selektiert ist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSignal {
    /// Eindeutiger Anzeigename
    pub name: String,
    /// Zugeordnete Kreuzung (None = unkonfiguriert)
    pub junction_id: Option<u32>,
    /// Grünphasen-Dauer in Sekunden (≥ 1)
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    /// Aktivierungsposition innerhalb der Kreuzung (None = unkonfiguriert)
    pub sequence: Option<u32>,
    /// Live-Zustand aus der Simulation (grün = aktiv)
    pub is_active: bool,
    /// Längengrad in Grad
    #[serde(rename = "xCoordinate")]
    pub lng: f64,
    /// Breitengrad in Grad
    #[serde(rename = "yCoordinate")]
    pub lat: f64,
}

impl TrafficSignal {
    /// Erstellt eine neue, unkonfigurierte Ampel an einer Position.
    pub fn new(name: String, position: GeoPoint) -> Self {
        Self {
            name,
            junction_id: None,
            duration_secs: DEFAULT_SIGNAL_DURATION_SECS,
            sequence: None,
            is_active: false,
            lng: position.lng,
            lat: position.lat,
        }
    }

    /// Gibt die Position als `GeoPoint` zurück.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lng, self.lat)
    }

    /// Gibt zurück, ob die Ampel noch keiner Kreuzung zugeordnet ist.
    pub fn is_unconfigured(&self) -> bool {
        self.junction_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_signal_starts_unconfigured_with_default_duration() {
        let signal = TrafficSignal::new("Traffic Signal 0".to_string(), GeoPoint::new(10.0, 20.0));

        assert!(signal.is_unconfigured());
        assert_eq!(signal.sequence, None);
        assert_eq!(signal.duration_secs, DEFAULT_SIGNAL_DURATION_SECS);
        assert!(!signal.is_active);
    }

    #[test]
    fn wire_format_matches_backend_contract() {
        let signal = TrafficSignal::new("Traffic Signal 2".to_string(), GeoPoint::new(10.0, 20.0));
        let json = serde_json::to_value(&signal).expect("Serialisierung erwartet");

        assert_eq!(json["name"], "Traffic Signal 2");
        assert_eq!(json["junctionId"], serde_json::Value::Null);
        assert_eq!(json["duration"], 30);
        assert_eq!(json["isActive"], false);
        assert_eq!(json["xCoordinate"], 10.0);
        assert_eq!(json["yCoordinate"], 20.0);
    }
}
