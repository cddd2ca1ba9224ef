//! Geografische Koordinaten und Distanzfunktionen.

use serde::{Deserialize, Serialize};

/// Zulässiger Längengrad-Bereich.
pub const LNG_RANGE: (f64, f64) = (-180.0, 180.0);
/// Zulässiger Breitengrad-Bereich.
pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Geografischer Punkt (Längengrad/Breitengrad in Grad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Längengrad in Grad, gültig in [-180, 180]
    pub lng: f64,
    /// Breitengrad in Grad, gültig in [-90, 90]
    pub lat: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt ohne Bereichsprüfung.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Erstellt einen Punkt und klemmt beide Komponenten in den gültigen Bereich.
    ///
    /// Koordinaten werden beim Commit geklemmt, nie abgelehnt.
    pub fn clamped(lng: f64, lat: f64) -> Self {
        Self {
            lng: lng.clamp(LNG_RANGE.0, LNG_RANGE.1),
            lat: lat.clamp(LAT_RANGE.0, LAT_RANGE.1),
        }
    }

    /// Euklidische Distanz in Koordinaten-Grad.
    ///
    /// Bewusst planar statt Haversine: Hit-Tests arbeiten mit kleinen
    /// Toleranzen, bei denen die Erdkrümmung keine Rolle spielt.
    pub fn distance(&self, other: &GeoPoint) -> f64 {
        let dx = self.lng - other.lng;
        let dy = self.lat - other.lat;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamped_limits_both_axes() {
        let p = GeoPoint::clamped(200.0, -100.0);
        assert_relative_eq!(p.lng, 180.0);
        assert_relative_eq!(p.lat, -90.0);

        let q = GeoPoint::clamped(-200.0, 100.0);
        assert_relative_eq!(q.lng, -180.0);
        assert_relative_eq!(q.lat, 90.0);
    }

    #[test]
    fn clamped_keeps_values_in_range() {
        let p = GeoPoint::clamped(101.7, 3.06);
        assert_relative_eq!(p.lng, 101.7);
        assert_relative_eq!(p.lat, 3.06);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }
}
