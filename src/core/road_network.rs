//! Das Straßennetzwerk: geordnete Straßenliste mit Edit-Operationen.

use crate::core::{GeoPoint, Road, RoadNode};

/// Richtung für Verschiebe-Operationen in geordneten Listen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirection {
    /// Einen Platz Richtung Listenanfang
    Up,
    /// Einen Platz Richtung Listenende
    Down,
}

/// Container für alle Straßen, in stabiler Anzeige-Reihenfolge.
///
/// Node-IDs stammen aus einem netzwerkweiten monotonen Zähler und werden
/// nach Löschungen nie wiederverwendet.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    roads: Vec<Road>,
    /// Nächste zu vergebende Node-ID (monoton, netzwerkweit)
    next_node_id: u64,
}

impl RoadNetwork {
    /// Erstellt ein leeres Netzwerk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only Sicht auf alle Straßen.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Findet eine Straße anhand ihrer ID.
    pub fn road(&self, road_id: u64) -> Option<&Road> {
        self.roads.iter().find(|r| r.id == road_id)
    }

    fn road_mut(&mut self, road_id: u64) -> Option<&mut Road> {
        self.roads.iter_mut().find(|r| r.id == road_id)
    }

    /// Gibt die Anzahl der Straßen zurück.
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Berechnet die nächste freie Straßen-ID (max + 1).
    fn next_road_id(&self) -> u64 {
        self.roads.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Leitet den Namen der nächsten Straße aus dem numerischen Suffix
    /// der zuletzt angelegten Straße ab (`road_<n+1>`).
    fn next_road_name(&self, fallback_id: u64) -> String {
        let next = self
            .roads
            .last()
            .and_then(|road| road.name.strip_prefix("road_"))
            .and_then(|suffix| suffix.parse::<u64>().ok())
            .map(|n| n + 1)
            .unwrap_or(fallback_id);
        format!("road_{next}")
    }

    fn allocate_node(&mut self, position: GeoPoint) -> RoadNode {
        let node = RoadNode::new(self.next_node_id, position);
        self.next_node_id += 1;
        node
    }

    /// Legt eine neue Straße mit einem einzelnen Node an der Position an.
    ///
    /// Gibt die ID der neuen Straße zurück; die Selektion setzt der Aufrufer.
    pub fn add_road(&mut self, position: GeoPoint) -> u64 {
        let road_id = self.next_road_id();
        let name = self.next_road_name(road_id);
        let node = self.allocate_node(position);
        self.roads.push(Road::new(road_id, name, node));
        log::info!(
            "Straße {} angelegt bei ({:.6}, {:.6})",
            road_id,
            position.lng,
            position.lat
        );
        road_id
    }

    /// Hängt einen Node an die Node-Folge einer Straße an.
    pub fn append_node(&mut self, road_id: u64, position: GeoPoint) -> Option<u64> {
        if self.road(road_id).is_none() {
            log::warn!("append_node: Straße {} nicht gefunden", road_id);
            return None;
        }
        let node = self.allocate_node(position);
        let node_id = node.id;
        if let Some(road) = self.road_mut(road_id) {
            road.nodes.push(node);
        }
        Some(node_id)
    }

    /// Verschiebt den Node an `index` um einen Platz in die Richtung.
    ///
    /// No-op an den Listengrenzen; alle übrigen Nodes behalten ihre
    /// relative Reihenfolge.
    pub fn reorder_node(&mut self, road_id: u64, index: usize, direction: ReorderDirection) {
        let Some(road) = self.road_mut(road_id) else {
            return;
        };
        let last = road.nodes.len().saturating_sub(1);
        let target = match direction {
            ReorderDirection::Up if index > 0 && index <= last => index - 1,
            ReorderDirection::Down if index < last => index + 1,
            _ => return,
        };
        road.nodes.swap(index, target);
    }

    /// Entfernt einen Node anhand seiner stabilen ID.
    pub fn delete_node(&mut self, road_id: u64, node_id: u64) -> bool {
        let Some(road) = self.road_mut(road_id) else {
            return false;
        };
        let before = road.nodes.len();
        road.nodes.retain(|n| n.id != node_id);
        road.nodes.len() < before
    }

    /// Entfernt eine Straße vollständig.
    pub fn delete_road(&mut self, road_id: u64) -> bool {
        let before = self.roads.len();
        self.roads.retain(|r| r.id != road_id);
        self.roads.len() < before
    }

    /// Setzt das Einbahnstraßen-Flag.
    pub fn set_one_way(&mut self, road_id: u64, is_one_way: bool) {
        if let Some(road) = self.road_mut(road_id) {
            road.is_one_way = is_one_way;
        }
    }

    /// Setzt die Position eines Nodes; Koordinaten werden geklemmt.
    pub fn set_node_position(&mut self, road_id: u64, node_id: u64, position: GeoPoint) {
        let Some(road) = self.road_mut(road_id) else {
            return;
        };
        if let Some(node) = road.nodes.iter_mut().find(|n| n.id == node_id) {
            let clamped = GeoPoint::clamped(position.lng, position.lat);
            node.lng = clamped.lng;
            node.lat = clamped.lat;
        }
    }

    /// Ersetzt alle Straßen im Ganzen (Backend-Payload).
    ///
    /// Der Node-ID-Zähler wird über das Maximum der neuen Daten gezogen,
    /// damit nachfolgende Edits keine IDs doppelt vergeben.
    pub fn replace_all(&mut self, roads: Vec<Road>) {
        let max_node_id = roads
            .iter()
            .flat_map(|r| r.nodes.iter().map(|n| n.id))
            .max();
        if let Some(max) = max_node_id {
            self.next_node_id = self.next_node_id.max(max + 1);
        }
        self.roads = roads;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_with_road() -> (RoadNetwork, u64) {
        let mut network = RoadNetwork::new();
        let road_id = network.add_road(GeoPoint::new(10.0, 10.0));
        (network, road_id)
    }

    #[test]
    fn add_road_assigns_max_plus_one_and_suffix_name() {
        let (mut network, first) = network_with_road();
        assert_eq!(first, 1);
        assert_eq!(network.road(first).unwrap().name, "road_1");
        assert!(!network.road(first).unwrap().is_one_way);

        let second = network.add_road(GeoPoint::new(11.0, 11.0));
        assert_eq!(second, 2);
        assert_eq!(network.road(second).unwrap().name, "road_2");
    }

    #[test]
    fn node_ids_are_stable_and_never_reused() {
        let (mut network, road_id) = network_with_road();
        let a = network.append_node(road_id, GeoPoint::new(10.0, 11.0)).unwrap();
        let b = network.append_node(road_id, GeoPoint::new(10.0, 12.0)).unwrap();
        assert!(b > a);

        // Nach Löschung darf die ID nicht erneut vergeben werden
        assert!(network.delete_node(road_id, b));
        let c = network.append_node(road_id, GeoPoint::new(10.0, 13.0)).unwrap();
        assert!(c > b);
    }

    #[test]
    fn reorder_is_its_own_inverse_for_interior_nodes() {
        let (mut network, road_id) = network_with_road();
        network.append_node(road_id, GeoPoint::new(10.0, 11.0));
        network.append_node(road_id, GeoPoint::new(10.0, 12.0));

        let original: Vec<u64> = network.road(road_id).unwrap().nodes.iter().map(|n| n.id).collect();

        network.reorder_node(road_id, 1, ReorderDirection::Up);
        network.reorder_node(road_id, 0, ReorderDirection::Down);

        let restored: Vec<u64> = network.road(road_id).unwrap().nodes.iter().map(|n| n.id).collect();
        assert_eq!(original, restored);
    }

    #[test]
    fn reorder_is_noop_at_boundaries() {
        let (mut network, road_id) = network_with_road();
        network.append_node(road_id, GeoPoint::new(10.0, 11.0));

        let before: Vec<u64> = network.road(road_id).unwrap().nodes.iter().map(|n| n.id).collect();
        network.reorder_node(road_id, 0, ReorderDirection::Up);
        network.reorder_node(road_id, 1, ReorderDirection::Down);
        let after: Vec<u64> = network.road(road_id).unwrap().nodes.iter().map(|n| n.id).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn set_node_position_clamps_on_commit() {
        let (mut network, road_id) = network_with_road();
        let node_id = network.road(road_id).unwrap().nodes[0].id;

        network.set_node_position(road_id, node_id, GeoPoint::new(200.0, 95.0));
        let node = network.road(road_id).unwrap().node(node_id).unwrap();
        assert_eq!(node.lng, 180.0);
        assert_eq!(node.lat, 90.0);

        network.set_node_position(road_id, node_id, GeoPoint::new(-200.0, -95.0));
        let node = network.road(road_id).unwrap().node(node_id).unwrap();
        assert_eq!(node.lng, -180.0);
        assert_eq!(node.lat, -90.0);
    }

    #[test]
    fn replace_all_advances_node_counter() {
        let mut network = RoadNetwork::new();
        let road = Road {
            id: 4,
            name: "road_4".to_string(),
            is_one_way: true,
            nodes: vec![RoadNode::new(17, GeoPoint::new(1.0, 2.0))],
        };
        network.replace_all(vec![road]);

        let appended = network.append_node(4, GeoPoint::new(1.0, 3.0)).unwrap();
        assert!(appended > 17, "neuer Node darf keine Backend-ID wiederverwenden");
    }
}
