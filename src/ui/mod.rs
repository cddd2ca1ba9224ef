//! UI-Schicht: Panels, Viewport-Input und Build-Modus-Marker.

pub mod input;
pub mod markers;
pub mod panels;

pub use input::InputState;
pub use markers::render_signal_markers;
pub use panels::{
    render_build_toolbar, render_guard_modal, render_inspector, render_simulation_panel,
    render_top_bar,
};
