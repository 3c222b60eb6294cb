//! tk-project: network definition file format, validation and presets.

pub mod presets;
pub mod schema;
pub mod validate;

pub use presets::{PRESET_NAMES, branching, cascade, preset};
pub use schema::*;
pub use validate::{ValidationError, validate_network};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let network: NetworkDef = serde_yaml::from_str(&content)?;
    validate_network(&network)?;
    Ok(network)
}

pub fn save_yaml(path: &std::path::Path, network: &NetworkDef) -> ProjectResult<()> {
    validate_network(network)?;
    let content = serde_yaml::to_string(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let network: NetworkDef = serde_json::from_str(&content)?;
    validate_network(&network)?;
    Ok(network)
}

pub fn save_json(path: &std::path::Path, network: &NetworkDef) -> ProjectResult<()> {
    validate_network(network)?;
    let content = serde_json::to_string_pretty(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a definition, picking the format from the file extension.
pub fn load(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    match extension(path).as_deref() {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        other => Err(ProjectError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

/// Save a definition, picking the format from the file extension.
pub fn save(path: &std::path::Path, network: &NetworkDef) -> ProjectResult<()> {
    match extension(path).as_deref() {
        Some("yaml" | "yml") => save_yaml(path, network),
        Some("json") => save_json(path, network),
        other => Err(ProjectError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

fn extension(path: &std::path::Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
