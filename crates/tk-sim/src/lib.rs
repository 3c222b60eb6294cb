//! Tick-driven liquid transfer for tankflow networks.
//!
//! Provides:
//! - `Tank`: clamped volume store with derived fill fraction and alarm flag
//! - `Pipe`: polyline plus a per-tick "flowing" flag
//! - `SimController`: start/stop state machine and the per-tick flow update
//! - `TickClock`: fixed-period tick source fed by wall-clock time
//! - `Command`: id-keyed user commands dispatched through `SimController::apply`
//! - `SimSnapshot`: read-only view consumed by renderers

pub mod clock;
pub mod command;
pub mod controller;
pub mod error;
pub mod pipe;
pub mod snapshot;
pub mod tank;

// Re-exports for public API
pub use clock::TickClock;
pub use command::Command;
pub use controller::{FlowEdge, RunState, SimController, SimOptions};
pub use error::{SimError, SimResult};
pub use pipe::Pipe;
pub use snapshot::{PipeView, SimSnapshot, TankView};
pub use tank::Tank;
