//! Application State: Modus, Selektion, Werkzeuge und Gesamtzustand.

mod app_state;
mod mode;
mod selection;
mod ui;

pub use app_state::{
    AppState, SimSettings, SyncRequest, DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM,
    DEFAULT_VEHICLE_INFLOW,
};
pub use mode::{BuildTool, BuildToolState, Mode};
pub use selection::{InfoCategory, SelectionState};
pub use ui::UiState;
