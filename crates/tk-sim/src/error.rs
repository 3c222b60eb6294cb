//! Error types for simulation operations.

use thiserror::Error;
use tk_core::{EdgeId, TankId, TkError};

/// Errors raised at the simulation boundary. The flow update itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown tank {tank}")]
    UnknownTank { tank: TankId },

    #[error("Unknown flow edge {edge}")]
    UnknownEdge { edge: EdgeId },

    #[error(transparent)]
    Core(#[from] TkError),
}

pub type SimResult<T> = Result<T, SimError>;
