//! Error types for the tk-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load network definition {path}: {message}")]
    Load { path: PathBuf, message: String },

    #[error("Failed to save network definition {path}: {message}")]
    Save { path: PathBuf, message: String },

    #[error("Network validation failed: {0}")]
    Validation(String),

    #[error("Runtime compilation failed: {0}")]
    Compile(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Tank not found: {0}")]
    TankNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),
}

/// Result type for tk-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<tk_project::ValidationError> for AppError {
    fn from(err: tk_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<tk_graph::GraphError> for AppError {
    fn from(err: tk_graph::GraphError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<tk_sim::SimError> for AppError {
    fn from(err: tk_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}
