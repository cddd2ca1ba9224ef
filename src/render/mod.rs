//! Render-Pipeline: Layer-Surfaces, Primitive und Invalidierung.

pub mod manager;
pub mod node_renderer;
pub mod road_renderer;
pub mod signal_renderer;
pub mod surface;
pub mod types;
pub mod vehicle_renderer;

pub use manager::{RenderInput, RenderSurfaceManager, SceneRevisions};
pub use surface::RenderSurface;
pub use types::{DrawPrimitive, LayerContext, RenderLayer};
