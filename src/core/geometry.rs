//! Geometrie-Engine: Nearest-Node-Suche und Straßen-Hit-Test.
//!
//! Reine Funktionen über der Straßenliste. Toleranzen sind Distanzen in
//! Koordinaten-Grad; Treffer außerhalb der Toleranz zählen nicht.

use crate::core::{GeoPoint, Road};

/// Treffer einer Nearest-Node-Suche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHit {
    /// ID der Straße, zu der der Node gehört
    pub road_id: u64,
    /// Stabile ID des getroffenen Nodes
    pub node_id: u64,
}

/// Findet den Node mit minimaler euklidischer Distanz zum Punkt.
///
/// Lineare Suche über alle Nodes aller Straßen. Treffer nur, wenn die
/// Distanz ≤ `tolerance` ist. Bei Gleichstand gewinnt der zuerst
/// angetroffene Node (Straßen-, dann Node-Reihenfolge); deterministisch,
/// nicht geometrisch begründet.
pub fn nearest_node(roads: &[Road], point: GeoPoint, tolerance: f64) -> Option<NodeHit> {
    let mut best: Option<(f64, NodeHit)> = None;

    for road in roads {
        for node in &road.nodes {
            let distance = node.position().distance(&point);
            if distance > tolerance {
                continue;
            }
            let closer = match &best {
                Some((best_distance, _)) => distance < *best_distance,
                None => true,
            };
            if closer {
                best = Some((
                    distance,
                    NodeHit {
                        road_id: road.id,
                        node_id: node.id,
                    },
                ));
            }
        }
    }

    best.map(|(_, hit)| hit)
}

/// Findet die Straße, deren Segment dem Punkt am nächsten liegt.
///
/// Pro Segment wird die Kollinearitäts-Abweichung
/// `d = |dist(a,b) − (dist(a,p) + dist(p,b))|` geprüft; ein Segment ist
/// Kandidat, wenn `d < tolerance`, und das kleinste `d` gewinnt.
///
/// Das ist eine Näherung, KEINE echte Punkt-zu-Segment-Distanz: sie ist
/// billig und bevorzugt Punkte, die annähernd ZWISCHEN den Endpunkten
/// liegen, wird aber für Punkte nahe der Segment-Verlängerung ungenau.
pub fn nearest_road(roads: &[Road], point: GeoPoint, tolerance: f64) -> Option<u64> {
    let mut best: Option<(f64, u64)> = None;

    for road in roads {
        for pair in road.nodes.windows(2) {
            let start = pair[0].position();
            let end = pair[1].position();

            let span = start.distance(&end);
            let via_point = start.distance(&point) + point.distance(&end);
            let deviation = (span - via_point).abs();

            if deviation >= tolerance {
                continue;
            }
            let closer = match &best {
                Some((best_deviation, _)) => deviation < *best_deviation,
                None => true,
            };
            if closer {
                best = Some((deviation, road.id));
            }
        }
    }

    best.map(|(_, road_id)| road_id)
}
