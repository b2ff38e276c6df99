// Rust guideline compliant 2026-10-12

//! Error types for the Folio core library.

use thiserror::Error;

/// Result type alias for Folio core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Folio core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid project data.
    #[error("Invalid project: {0}")]
    InvalidProject(String),

    /// Project not found.
    #[error("Project not found: {0}")]
    NotFound(String),

    /// Invalid mode or category value.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Storage lock could not be acquired.
    #[error("Storage locked: {0}")]
    Locked(String),
}
