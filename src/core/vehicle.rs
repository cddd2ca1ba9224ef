//! Fahrzeuge aus dem Simulations-Feed (ephemer, read-only).

use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;

/// Fahrzeug-Momentaufnahme; wird pro Poll-Tick im Ganzen ersetzt und
/// weder lokal editiert noch persistiert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Backend-seitige Fahrzeug-ID
    pub id: u64,
    /// Längengrad in Grad
    #[serde(rename = "xCoordinate")]
    pub lng: f64,
    /// Breitengrad in Grad
    #[serde(rename = "yCoordinate")]
    pub lat: f64,
}

impl Vehicle {
    /// Gibt die Position als `GeoPoint` zurück.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lng, self.lat)
    }
}
