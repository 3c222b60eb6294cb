//! Shared application service layer for tankflow.
//!
//! Turns network definitions into running controllers and keeps the
//! front-end free of compile, lookup and bookkeeping logic.

pub mod error;
pub mod history;
pub mod runtime_compile;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use history::{HistorySample, VolumeHistory};
pub use runtime_compile::{NetworkRuntime, compile_network};
pub use session::{Session, SessionSource};
