//! CLI error types.

use std::path::PathBuf;

use eventdates_core::{ReducerError, SerializationError};
use thiserror::Error;

/// Result type alias for the CLI crate.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Reducer error: {0}")]
    Reducer(#[from] ReducerError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Failed to access {path}: {source}")]
    StateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
