//! RoadSim Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod sim;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, BuildTool, InfoCategory, Mode, SyncRequest,
};
pub use core::{
    GeoPoint, MapViewport, ReorderDirection, Road, RoadNetwork, RoadNode, SignalBoard,
    TrafficSignal, Vehicle,
};
pub use render::{DrawPrimitive, LayerContext, RenderLayer, RenderSurfaceManager};
pub use shared::EditorOptions;
pub use sim::{SessionCommand, SessionState, SimClient, SimEvent, SyncLoop};
