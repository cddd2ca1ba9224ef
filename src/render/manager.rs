//! Render-Surface-Manager: Besitz der Layer-Surfaces und Invalidierung.
//!
//! Jeder Trigger (Viewport-Bewegung, Datenänderung, Selektionswechsel)
//! führt zu einem vollständigen Clear + Rebuild der betroffenen Layer;
//! es gibt kein partielles Invalidieren. Welche Layer sichtbar und
//! pointer-interaktiv sind, entscheidet der `LayerContext`.

use crate::core::{MapViewport, Road, SignalBoard, Vehicle};
use crate::render::{
    node_renderer, road_renderer, signal_renderer, vehicle_renderer, LayerContext, RenderLayer,
    RenderSurface,
};
use crate::shared::EditorOptions;

/// Änderungszähler der Datenquellen, von der App pro Mutation erhöht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneRevisions {
    /// Straßen-Kollektion
    pub roads: u64,
    /// Ampel-Kollektion
    pub signals: u64,
    /// Fahrzeug-Snapshot
    pub vehicles: u64,
    /// Selektionszustand
    pub selection: u64,
}

/// Eingabedaten für einen Render-Sync.
pub struct RenderInput<'a> {
    /// Alle Straßen
    pub roads: &'a [Road],
    /// Ampel-Sammlung
    pub signals: &'a SignalBoard,
    /// Fahrzeug-Snapshot
    pub vehicles: &'a [Vehicle],
    /// Karten-Viewport
    pub viewport: &'a MapViewport,
    /// Selektierte Straße
    pub selected_road: Option<u64>,
    /// Selektierter Node
    pub selected_node: Option<u64>,
    /// Sichtbarkeits-Kontext
    pub context: LayerContext,
    /// Änderungszähler der Datenquellen
    pub revisions: SceneRevisions,
}

/// Zuletzt verarbeiteter Zustand, für die Dirty-Erkennung.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SeenState {
    viewport_generation: u64,
    revisions: SceneRevisions,
    visible: [bool; 4],
}

/// Besitzt die vier Layer-Surfaces und baut sie bei Bedarf neu.
#[derive(Default)]
pub struct RenderSurfaceManager {
    surfaces: [RenderSurface; 4],
    seen: Option<SeenState>,
}

impl RenderSurfaceManager {
    /// Erstellt einen Manager mit leeren Surfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only Zugriff auf die Surface eines Layers.
    pub fn surface(&self, layer: RenderLayer) -> &RenderSurface {
        &self.surfaces[layer.index()]
    }

    /// Gleicht die Surfaces mit dem aktuellen App-Zustand ab.
    ///
    /// Neu gebaut wird ein Layer, wenn er sichtbar ist und sich seit dem
    /// letzten Sync Viewport, zugehörige Daten, Selektion oder seine
    /// Sichtbarkeit geändert haben. Unsichtbare Layer werden geleert.
    pub fn sync(&mut self, input: &RenderInput<'_>, options: &EditorOptions) {
        let visible = [
            input.context.layer_visible(RenderLayer::RoadGeometry),
            input.context.layer_visible(RenderLayer::RoadNodes),
            input.context.layer_visible(RenderLayer::Vehicles),
            input.context.layer_visible(RenderLayer::TrafficSignals),
        ];
        let current = SeenState {
            viewport_generation: input.viewport.generation(),
            revisions: input.revisions,
            visible,
        };

        let size_px = [
            input.viewport.size_px[0] as f32,
            input.viewport.size_px[1] as f32,
        ];

        for layer in RenderLayer::ALL {
            let idx = layer.index();
            if !visible[idx] {
                self.surfaces[idx].clear(size_px);
                continue;
            }
            if !self.layer_dirty(layer, &current) {
                continue;
            }

            let primitives = match layer {
                RenderLayer::RoadGeometry => road_renderer::build(
                    input.roads,
                    input.selected_road,
                    input.viewport,
                    options,
                ),
                RenderLayer::RoadNodes => node_renderer::build(
                    input.roads,
                    input.selected_road,
                    input.selected_node,
                    input.viewport,
                    options,
                ),
                RenderLayer::Vehicles => {
                    vehicle_renderer::build(input.vehicles, input.viewport, options)
                }
                RenderLayer::TrafficSignals => {
                    signal_renderer::build(&input.signals.to_vec(), input.viewport, options)
                }
            };
            self.surfaces[idx].replace(size_px, primitives);
        }

        self.seen = Some(current);
    }

    /// Prüft, ob ein Layer gegenüber dem letzten Sync veraltet ist.
    fn layer_dirty(&self, layer: RenderLayer, current: &SeenState) -> bool {
        let Some(seen) = &self.seen else {
            return true;
        };
        if seen.viewport_generation != current.viewport_generation {
            return true;
        }
        // Sichtbarkeitswechsel erzwingt einen frischen Aufbau
        if seen.visible[layer.index()] != current.visible[layer.index()] {
            return true;
        }
        match layer {
            RenderLayer::RoadGeometry | RenderLayer::RoadNodes => {
                seen.revisions.roads != current.revisions.roads
                    || seen.revisions.selection != current.revisions.selection
            }
            RenderLayer::Vehicles => seen.revisions.vehicles != current.revisions.vehicles,
            RenderLayer::TrafficSignals => seen.revisions.signals != current.revisions.signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoPoint, RoadNetwork};

    fn viewport() -> MapViewport {
        let mut vp = MapViewport::new(GeoPoint::new(10.0, 10.0), 15.0);
        vp.resize([1280.0, 720.0]);
        vp
    }

    fn build_context() -> LayerContext {
        LayerContext {
            build_mode: true,
            road_tool_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn sync_builds_visible_layers_and_clears_hidden_ones() {
        let mut network = RoadNetwork::new();
        let road_id = network.add_road(GeoPoint::new(10.0, 10.0));
        network.append_node(road_id, GeoPoint::new(10.001, 10.0));
        let signals = SignalBoard::new();
        let vp = viewport();
        let options = EditorOptions::default();

        let mut manager = RenderSurfaceManager::new();
        manager.sync(
            &RenderInput {
                roads: network.roads(),
                signals: &signals,
                vehicles: &[],
                viewport: &vp,
                selected_road: None,
                selected_node: None,
                context: build_context(),
                revisions: SceneRevisions::default(),
            },
            &options,
        );

        assert_eq!(manager.surface(RenderLayer::RoadGeometry).primitives().len(), 1);
        assert_eq!(manager.surface(RenderLayer::RoadNodes).primitives().len(), 2);
        // Fahrzeug-Layer ist im Build-Modus unsichtbar und bleibt leer
        assert!(manager.surface(RenderLayer::Vehicles).primitives().is_empty());
    }

    #[test]
    fn unchanged_state_skips_rebuild_but_viewport_move_invalidates() {
        let mut network = RoadNetwork::new();
        let road_id = network.add_road(GeoPoint::new(10.0, 10.0));
        network.append_node(road_id, GeoPoint::new(10.001, 10.0));
        let signals = SignalBoard::new();
        let mut vp = viewport();
        let options = EditorOptions::default();

        let mut manager = RenderSurfaceManager::new();
        let revisions = SceneRevisions::default();

        manager.sync(
            &RenderInput {
                roads: network.roads(),
                signals: &signals,
                vehicles: &[],
                viewport: &vp,
                selected_road: None,
                selected_node: None,
                context: build_context(),
                revisions,
            },
            &options,
        );
        let before = manager.surface(RenderLayer::RoadGeometry).primitives().to_vec();

        // Viewport verschieben → Pixelpositionen müssen sich ändern
        vp.pan_pixels(glam::DVec2::new(100.0, 0.0));
        manager.sync(
            &RenderInput {
                roads: network.roads(),
                signals: &signals,
                vehicles: &[],
                viewport: &vp,
                selected_road: None,
                selected_node: None,
                context: build_context(),
                revisions,
            },
            &options,
        );
        let after = manager.surface(RenderLayer::RoadGeometry).primitives().to_vec();

        assert_ne!(before, after);
    }

    #[test]
    fn selection_change_rebuilds_road_layer() {
        let mut network = RoadNetwork::new();
        let road_id = network.add_road(GeoPoint::new(10.0, 10.0));
        network.append_node(road_id, GeoPoint::new(10.001, 10.0));
        let signals = SignalBoard::new();
        let vp = viewport();
        let options = EditorOptions::default();

        let mut manager = RenderSurfaceManager::new();
        let mut revisions = SceneRevisions::default();

        manager.sync(
            &RenderInput {
                roads: network.roads(),
                signals: &signals,
                vehicles: &[],
                viewport: &vp,
                selected_road: None,
                selected_node: None,
                context: build_context(),
                revisions,
            },
            &options,
        );

        revisions.selection += 1;
        manager.sync(
            &RenderInput {
                roads: network.roads(),
                signals: &signals,
                vehicles: &[],
                viewport: &vp,
                selected_road: Some(road_id),
                selected_node: None,
                context: build_context(),
                revisions,
            },
            &options,
        );

        match manager.surface(RenderLayer::RoadGeometry).primitives() {
            [crate::render::DrawPrimitive::Polyline { color, .. }] => {
                assert_eq!(*color, options.road_color_selected);
            }
            other => panic!("Eine hervorgehobene Polylinie erwartet, war: {other:?}"),
        }
    }
}
