//! Ampel-Sammlung mit abgeleiteten Kreuzungen (Junctions).
//!
//! Kreuzungen werden nicht gespeichert: eine Kreuzung ist die Menge aller
//! Ampeln mit derselben `junction_id`, neu abgeleitet bei jeder Änderung.
//! Innerhalb einer Kreuzung bilden die `sequence`-Werte eine lückenlose
//! Permutation von `0..n-1`.

use indexmap::IndexMap;

use crate::core::{GeoPoint, ReorderDirection, TrafficSignal};

/// Sammlung aller Ampeln, indexiert nach eindeutigem Namen.
///
/// `IndexMap` hält die Einfügereihenfolge stabil, damit Namensvergabe und
/// Darstellung deterministisch bleiben.
#[derive(Debug, Clone, Default)]
pub struct SignalBoard {
    signals: IndexMap<String, TrafficSignal>,
}

impl SignalBoard {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only Iterator über alle Ampeln in Einfügereihenfolge.
    pub fn signals(&self) -> impl Iterator<Item = &TrafficSignal> {
        self.signals.values()
    }

    /// Gibt die Anzahl der Ampeln zurück.
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    /// Findet eine Ampel anhand ihres Namens.
    pub fn signal(&self, name: &str) -> Option<&TrafficSignal> {
        self.signals.get(name)
    }

    /// Sammelt alle Ampeln als Vektor (für Config-Push und Rendering).
    pub fn to_vec(&self) -> Vec<TrafficSignal> {
        self.signals.values().cloned().collect()
    }

    /// Legt eine neue, unkonfigurierte Ampel an der Position an.
    ///
    /// Namensschema `Traffic Signal <laufende Nummer>`; nach Löschungen
    /// wird weitergezählt, bis der Name frei ist (Namen sind Identität
    /// und dürfen nicht kollidieren). Der Name wird zurückgegeben, damit
    /// der Aufrufer die Selektion setzen kann.
    pub fn add_signal(&mut self, position: GeoPoint) -> String {
        let mut counter = self.signals.len();
        let mut name = format!("Traffic Signal {counter}");
        while self.signals.contains_key(&name) {
            counter += 1;
            name = format!("Traffic Signal {counter}");
        }
        let signal = TrafficSignal::new(name.clone(), position);
        self.signals.insert(name.clone(), signal);
        log::info!("Ampel '{}' angelegt bei ({:.6}, {:.6})", name, position.lng, position.lat);
        name
    }

    /// Abgeleitete Kreuzungs-IDs, aufsteigend sortiert für die Anzeige.
    pub fn junctions(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .signals
            .values()
            .filter_map(|s| s.junction_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Alle Mitglieder einer Kreuzung, aufsteigend nach `sequence`.
    pub fn members_of(&self, junction_id: u32) -> Vec<&TrafficSignal> {
        let mut members: Vec<&TrafficSignal> = self
            .signals
            .values()
            .filter(|s| s.junction_id == Some(junction_id))
            .collect();
        members.sort_by_key(|s| s.sequence);
        members
    }

    /// Ordnet eine Ampel einer bestehenden Kreuzung zu.
    ///
    /// Die `sequence` ist die Mitgliederzahl zum Zeitpunkt der Zuordnung
    /// (Append-only-Nummerierung, keine Neunummerierung Bestehender).
    pub fn assign_to_junction(&mut self, name: &str, junction_id: u32) {
        let member_count = self
            .signals
            .values()
            .filter(|s| s.junction_id == Some(junction_id) && s.name != name)
            .count() as u32;

        if let Some(signal) = self.signals.get_mut(name) {
            signal.junction_id = Some(junction_id);
            signal.sequence = Some(member_count);
            log::info!(
                "Ampel '{}' → Kreuzung {} (Sequenz {})",
                name,
                junction_id,
                member_count
            );
        }
    }

    /// Legt eine neue Kreuzung mit dieser Ampel als erstem Mitglied an.
    ///
    /// Die neue Kreuzungs-ID ist der nächste freie Zähler-Slot
    /// (`junctions().len()`); die Ampel erhält Sequenz 0.
    pub fn create_junction(&mut self, name: &str) -> Option<u32> {
        if !self.signals.contains_key(name) {
            return None;
        }
        let junction_id = self.junctions().len() as u32;
        if let Some(signal) = self.signals.get_mut(name) {
            signal.junction_id = Some(junction_id);
            signal.sequence = Some(0);
        }
        log::info!("Neue Kreuzung {} mit Ampel '{}'", junction_id, name);
        Some(junction_id)
    }

    /// Tauscht die `sequence` des Mitglieds an `index` mit seinem Nachbarn.
    ///
    /// `index` bezieht sich auf die nach `sequence` sortierte
    /// Mitgliederliste; an den Grenzen ist die Operation ein No-op.
    pub fn reorder_member(&mut self, junction_id: u32, index: usize, direction: ReorderDirection) {
        let members: Vec<String> = self
            .members_of(junction_id)
            .iter()
            .map(|s| s.name.clone())
            .collect();

        let last = members.len().saturating_sub(1);
        let neighbor = match direction {
            ReorderDirection::Up if index > 0 && index <= last => index - 1,
            ReorderDirection::Down if index < last => index + 1,
            _ => return,
        };

        let current_seq = self.signals.get(&members[index]).and_then(|s| s.sequence);
        let neighbor_seq = self.signals.get(&members[neighbor]).and_then(|s| s.sequence);
        let (Some(current_seq), Some(neighbor_seq)) = (current_seq, neighbor_seq) else {
            return;
        };

        if let Some(signal) = self.signals.get_mut(&members[index]) {
            signal.sequence = Some(neighbor_seq);
        }
        if let Some(signal) = self.signals.get_mut(&members[neighbor]) {
            signal.sequence = Some(current_seq);
        }
    }

    /// Setzt die Grünphasen-Dauer einer Ampel (geklemmt auf ≥ 1 s).
    pub fn set_duration(&mut self, name: &str, duration_secs: u32) {
        if let Some(signal) = self.signals.get_mut(name) {
            signal.duration_secs = duration_secs.max(crate::core::MIN_SIGNAL_DURATION_SECS);
        }
    }

    /// Entfernt eine Ampel aus der Sammlung.
    pub fn delete_signal(&mut self, name: &str) -> bool {
        // shift_remove hält die Einfügereihenfolge der übrigen stabil
        self.signals.shift_remove(name).is_some()
    }

    /// Löscht eine Kreuzung: entfernt alle Mitglieds-Ampeln.
    ///
    /// Die Kreuzungs-ID verschwindet implizit, sobald keine Ampel sie
    /// mehr referenziert.
    pub fn delete_junction(&mut self, junction_id: u32) -> usize {
        let before = self.signals.len();
        self.signals
            .retain(|_, s| s.junction_id != Some(junction_id));
        before - self.signals.len()
    }

    /// Ersetzt alle Ampeln im Ganzen (Backend-Payload).
    pub fn replace_all(&mut self, signals: Vec<TrafficSignal>) {
        self.signals = signals.into_iter().map(|s| (s.name.clone(), s)).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_signals(count: usize) -> SignalBoard {
        let mut board = SignalBoard::new();
        for i in 0..count {
            board.add_signal(GeoPoint::new(10.0 + i as f64, 20.0));
        }
        board
    }

    #[test]
    fn signal_names_follow_running_number() {
        let board = board_with_signals(3);
        let names: Vec<&str> = board.signals().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Traffic Signal 0", "Traffic Signal 1", "Traffic Signal 2"]);
    }

    #[test]
    fn sequential_assignments_produce_contiguous_sequences() {
        let mut board = board_with_signals(3);
        board.assign_to_junction("Traffic Signal 0", 3);
        board.assign_to_junction("Traffic Signal 1", 3);
        board.assign_to_junction("Traffic Signal 2", 3);

        let sequences: Vec<u32> = board
            .members_of(3)
            .iter()
            .filter_map(|s| s.sequence)
            .collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn assign_then_reorder_swaps_sequences() {
        // Szenario aus dem Kreuzungs-Workflow: A zuerst, B danach, B nach oben
        let mut board = board_with_signals(2);
        board.assign_to_junction("Traffic Signal 0", 3);
        assert_eq!(board.signal("Traffic Signal 0").unwrap().junction_id, Some(3));
        assert_eq!(board.signal("Traffic Signal 0").unwrap().sequence, Some(0));

        board.assign_to_junction("Traffic Signal 1", 3);
        assert_eq!(board.signal("Traffic Signal 1").unwrap().sequence, Some(1));

        board.reorder_member(3, 1, ReorderDirection::Up);
        assert_eq!(board.signal("Traffic Signal 1").unwrap().sequence, Some(0));
        assert_eq!(board.signal("Traffic Signal 0").unwrap().sequence, Some(1));
    }

    #[test]
    fn reorder_is_noop_at_boundaries() {
        let mut board = board_with_signals(2);
        board.assign_to_junction("Traffic Signal 0", 0);
        board.assign_to_junction("Traffic Signal 1", 0);

        board.reorder_member(0, 0, ReorderDirection::Up);
        board.reorder_member(0, 1, ReorderDirection::Down);

        assert_eq!(board.signal("Traffic Signal 0").unwrap().sequence, Some(0));
        assert_eq!(board.signal("Traffic Signal 1").unwrap().sequence, Some(1));
    }

    #[test]
    fn create_junction_allocates_next_slot() {
        let mut board = board_with_signals(3);
        let first = board.create_junction("Traffic Signal 0");
        assert_eq!(first, Some(0));

        let second = board.create_junction("Traffic Signal 1");
        assert_eq!(second, Some(1));

        let signal = board.signal("Traffic Signal 1").unwrap();
        assert_eq!(signal.sequence, Some(0));
    }

    #[test]
    fn delete_junction_removes_all_members() {
        let mut board = board_with_signals(3);
        board.assign_to_junction("Traffic Signal 0", 5);
        board.assign_to_junction("Traffic Signal 1", 5);

        let removed = board.delete_junction(5);
        assert_eq!(removed, 2);
        assert_eq!(board.signal_count(), 1);
        assert!(board.junctions().is_empty());
    }

    #[test]
    fn set_duration_clamps_to_minimum() {
        let mut board = board_with_signals(1);
        board.set_duration("Traffic Signal 0", 0);
        assert_eq!(board.signal("Traffic Signal 0").unwrap().duration_secs, 1);

        board.set_duration("Traffic Signal 0", 45);
        assert_eq!(board.signal("Traffic Signal 0").unwrap().duration_secs, 45);
    }

    #[test]
    fn junctions_are_sorted_for_presentation() {
        let mut board = board_with_signals(3);
        board.assign_to_junction("Traffic Signal 0", 7);
        board.assign_to_junction("Traffic Signal 1", 2);
        board.assign_to_junction("Traffic Signal 2", 7);

        assert_eq!(board.junctions(), vec![2, 7]);
    }
}
