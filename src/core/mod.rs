//! Core-Domänentypen: Geo-Koordinaten, Straßen, Ampeln, Kreuzungen,
//! Viewport-Projektion und Geometrie-Engine.

pub mod geo;
pub mod geometry;
pub mod junction;
pub mod road;
pub mod road_network;
pub mod signal;
pub mod vehicle;
pub mod viewport;

pub use geo::GeoPoint;
pub use geometry::{nearest_node, nearest_road, NodeHit};
pub use junction::SignalBoard;
pub use road::{Road, RoadNode};
pub use road_network::{ReorderDirection, RoadNetwork};
pub use signal::{TrafficSignal, DEFAULT_SIGNAL_DURATION_SECS, MIN_SIGNAL_DURATION_SECS};
pub use vehicle::Vehicle;
pub use viewport::MapViewport;
