//! Network-specific error types.

use thiserror::Error;
use tk_core::{EdgeId, TankId, TkError};

pub type GraphResult<T> = Result<T, GraphError>;

/// Network construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Edge {edge} refers to non-existent tank {tank}")]
    InvalidTankRef { edge: EdgeId, tank: TankId },

    #[error("Edge {edge} loops back into tank {tank}")]
    SelfLoop { edge: EdgeId, tank: TankId },

    /// Two edges connect the same ordered pair of tanks.
    #[error("Edges {first} and {second} connect the same pair of tanks")]
    DuplicateEdge { first: EdgeId, second: EdgeId },

    #[error("Edge {edge} has a route with {points} point(s) (expected at least 2)")]
    DegenerateRoute { edge: EdgeId, points: usize },

    #[error("Flow edges form a cycle through tank {tank}")]
    Cycle { tank: TankId },
}

impl From<GraphError> for TkError {
    fn from(err: GraphError) -> Self {
        TkError::Invariant {
            what: err.to_string(),
        }
    }
}
