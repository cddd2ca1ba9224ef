//! Simulations-Anbindung: HTTP-Client, Session-Zustandsmaschine und
//! asynchrone Sync-Schleife.

pub mod client;
pub mod session;
pub mod sync;

pub use client::{clamp_inflow, wire_speed, SimClient, VEHICLE_INFLOW_MAX, VEHICLE_INFLOW_MIN};
pub use session::{poll_interval_ms, SessionCommand, SessionState};
pub use sync::{SimEvent, SyncLoop};
