//! Karten-Viewport mit Web-Mercator-Projektion.
//!
//! Kapselt die von außen gelieferte Kartenansicht: Umrechnung
//! Geo-Koordinaten ⇔ Pixel-Koordinaten für den aktuellen Pan/Zoom-Zustand.
//! Jede Zustandsänderung erhöht einen Generationszähler, über den Konsumenten
//! ihre abgeleiteten Pixel-Positionen invalidieren.

use glam::DVec2;

use crate::core::GeoPoint;

/// Kachelgröße der Mercator-Weltkarte in Pixeln bei Zoom 0.
const TILE_SIZE: f64 = 256.0;

/// 2D-Viewport über der Weltkarte (Pan, Zoom, Pixelgröße).
#[derive(Debug, Clone)]
pub struct MapViewport {
    /// Geografisches Zentrum der Ansicht
    pub center: GeoPoint,
    /// Zoom-Stufe (Mercator-Konvention: Weltbreite = 256 · 2^zoom Pixel)
    pub zoom: f64,
    /// Aktuelle Viewport-Größe in Pixeln [Breite, Höhe]
    pub size_px: [f64; 2],
    /// Änderungszähler; wird bei jedem Pan/Zoom/Resize erhöht
    generation: u64,
}

impl MapViewport {
    /// Minimale Zoom-Stufe.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximale Zoom-Stufe.
    pub const ZOOM_MAX: f64 = 19.0;

    /// Erstellt einen Viewport mit Zentrum und Zoom-Stufe.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
            size_px: [0.0, 0.0],
            generation: 0,
        }
    }

    /// Gibt den aktuellen Generationszähler zurück.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Skalierungsfaktor der Weltkarte in Pixeln für die aktuelle Zoom-Stufe.
    fn world_scale(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Projiziert einen Geo-Punkt auf absolute Welt-Pixel (Mercator).
    fn project(&self, point: &GeoPoint) -> DVec2 {
        let scale = self.world_scale();
        let x = (point.lng + 180.0) / 360.0 * scale;
        let lat_rad = point.lat.to_radians();
        let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0
            * scale;
        DVec2::new(x, y)
    }

    /// Rechnet absolute Welt-Pixel zurück in Geo-Koordinaten.
    fn unproject(&self, world: DVec2) -> GeoPoint {
        let scale = self.world_scale();
        let lng = world.x / scale * 360.0 - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * world.y / scale);
        let lat = n.sinh().atan().to_degrees();
        GeoPoint::new(lng, lat)
    }

    /// Konvertiert Geo-Koordinaten in Viewport-Pixel.
    ///
    /// Nur für den aktuellen Pan/Zoom-Zustand gültig; es wird nichts
    /// gecacht, die Projektion rechnet immer gegen den Live-Zustand.
    pub fn to_pixel(&self, point: &GeoPoint) -> DVec2 {
        let world = self.project(point);
        let center_world = self.project(&self.center);
        let top_left = center_world - DVec2::new(self.size_px[0] / 2.0, self.size_px[1] / 2.0);
        world - top_left
    }

    /// Konvertiert Viewport-Pixel in Geo-Koordinaten.
    pub fn to_geo(&self, pixel: DVec2) -> GeoPoint {
        let center_world = self.project(&self.center);
        let top_left = center_world - DVec2::new(self.size_px[0] / 2.0, self.size_px[1] / 2.0);
        self.unproject(top_left + pixel)
    }

    /// Verschiebt das Zentrum um ein Pixel-Delta (Pan).
    pub fn pan_pixels(&mut self, delta: DVec2) {
        let center_world = self.project(&self.center);
        self.center = self.unproject(center_world + delta);
        self.generation += 1;
    }

    /// Setzt die Viewport-Größe in Pixeln.
    pub fn resize(&mut self, size_px: [f64; 2]) {
        if self.size_px == size_px {
            return;
        }
        self.size_px = size_px;
        self.generation += 1;
    }

    /// Ändert die Zoom-Stufe um ein Delta, geklemmt auf den gültigen Bereich.
    pub fn zoom_by(&mut self, delta: f64) {
        let new_zoom = (self.zoom + delta).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        self.zoom = new_zoom;
        self.generation += 1;
    }
}
