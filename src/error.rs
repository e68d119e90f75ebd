//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type
//!
//! The error surface is deliberately small: the catalog is in-memory, no real
//! file I/O happens, and the two documented silent policies (malformed size
//! literals, unknown selection ids) are not errors at all. What remains is
//! configuration, terminal plumbing, and the bounded confirmation call.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The confirmation generator did not answer within the configured bound.
    /// Aborts the remaining transfer queue.
    #[error("Confirmation timed out for '{file}'")]
    ConfirmTimeout { file: String },

    /// Transfer run cancelled between entries.
    #[error("Operation was cancelled")]
    Cancelled,

    /// Async task failure or join error.
    #[error("Async task failed: {0}")]
    Task(String),

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Other(e.to_string())
    }
}
