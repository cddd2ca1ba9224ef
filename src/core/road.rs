//! Straßen und Straßen-Nodes (Wire-Format-kompatibel zum Backend).

use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;

/// Einzelner Wegpunkt einer Straße.
///
/// Die ID ist ein stabiler, monotoner Zähler des Netzwerks und bleibt
/// über Löschungen hinweg eindeutig (keine Index-Wiederverwendung).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadNode {
    /// Stabile, eindeutige Node-ID
    #[serde(rename = "roadNodeId")]
    pub id: u64,
    /// Längengrad in Grad
    #[serde(rename = "xCoordinate")]
    pub lng: f64,
    /// Breitengrad in Grad
    #[serde(rename = "yCoordinate")]
    pub lat: f64,
}

impl RoadNode {
    /// Erstellt einen Node an einer (geklemmten) Geo-Position.
    pub fn new(id: u64, position: GeoPoint) -> Self {
        let clamped = GeoPoint::clamped(position.lng, position.lat);
        Self {
            id,
            lng: clamped.lng,
            lat: clamped.lat,
        }
    }

    /// Gibt die Position als `GeoPoint` zurück.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lng, self.lat)
    }
}

/// Benannte, geordnete Node-Folge; aufeinanderfolgende Nodes bilden Segmente.
///
/// Kein implizierter Ringschluss: der letzte Node verbindet nicht zurück
/// zum ersten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// Eindeutige, monoton vergebene Straßen-ID
    pub id: u64,
    /// Anzeigename nach dem Schema `road_<n>`
    pub name: String,
    /// Einbahnstraße ja/nein
    #[serde(rename = "isOneWay")]
    pub is_one_way: bool,
    /// Geordnete Node-Folge (Wire-Name: `node`)
    #[serde(rename = "node")]
    pub nodes: Vec<RoadNode>,
}

impl Road {
    /// Erstellt eine Straße mit genau einem Start-Node.
    pub fn new(id: u64, name: String, first_node: RoadNode) -> Self {
        Self {
            id,
            name,
            is_one_way: false,
            nodes: vec![first_node],
        }
    }

    /// Findet den Index eines Nodes anhand seiner stabilen ID.
    pub fn node_index(&self, node_id: u64) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == node_id)
    }

    /// Gibt einen Node anhand seiner stabilen ID zurück.
    pub fn node(&self, node_id: u64) -> Option<&RoadNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_clamps_position_on_creation() {
        let node = RoadNode::new(1, GeoPoint::new(200.0, -100.0));
        assert_eq!(node.lng, 180.0);
        assert_eq!(node.lat, -90.0);
    }

    #[test]
    fn wire_format_matches_backend_contract() {
        let road = Road::new(3, "road_3".to_string(), RoadNode::new(7, GeoPoint::new(10.0, 20.0)));
        let json = serde_json::to_value(&road).expect("Serialisierung erwartet");

        assert_eq!(json["id"], 3);
        assert_eq!(json["isOneWay"], false);
        assert_eq!(json["node"][0]["roadNodeId"], 7);
        assert_eq!(json["node"][0]["xCoordinate"], 10.0);
        assert_eq!(json["node"][0]["yCoordinate"], 20.0);
    }

    #[test]
    fn node_lookup_by_stable_id() {
        let mut road = Road::new(1, "road_1".to_string(), RoadNode::new(0, GeoPoint::new(0.0, 0.0)));
        road.nodes.push(RoadNode::new(5, GeoPoint::new(1.0, 1.0)));

        assert_eq!(road.node_index(5), Some(1));
        assert_eq!(road.node_index(9), None);
        assert_eq!(road.node(5).map(|n| n.lng), Some(1.0));
    }
}
