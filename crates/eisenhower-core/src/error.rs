//! Core error types for eisenhower-core.
//!
//! The task store itself never fails: invalid intents are ignored. These
//! errors cover the edges around it, i.e. configuration files and values
//! parsed from user text before they become intents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from replaying a recorded intent stream.
///
/// Configuration and validation failures have their own types below and
/// are returned directly by the functions that produce them.
#[derive(Error, Debug)]
pub enum CoreError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed intent in a replayed intent stream
    #[error("Invalid intent on line {line}: {source}")]
    Replay {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration schema
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home/config directory could not be prepared
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Urgency or importance outside 1..=10
    #[error("Score {value} out of range ({min}..={max})")]
    ScoreOutOfRange { value: i64, min: u8, max: u8 },

    /// Quadrant number outside 1..=4
    #[error("Unknown quadrant: {0} (expected 1-4)")]
    UnknownQuadrant(String),

    /// Task id that is not a number
    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
