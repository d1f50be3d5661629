//! Core error types for eventboard-core.
//!
//! Resolution failures never escape the public resolvers as errors: they are
//! collapsed to `None`/`false` and the affected task is dropped from
//! time-sensitive results. The `try_*` resolvers keep the reason around so
//! callers (and the debug log) can tell the failure kinds apart.

use thiserror::Error;

/// Core error type for collaborators of the core (config loading, CLI I/O).
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a task's time descriptor could not be turned into an instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Week label is empty, non-numeric, or outside 1-53
    #[error("Malformed week label: '{0}'")]
    MalformedWeekLabel(String),

    /// Time string is not a 24-hour H:MM / HH:MM value
    #[error("Malformed time string: '{0}'")]
    MalformedTimeString(String),

    /// Neither a week label nor a legacy date covers the task
    #[error("Missing date context for {0}")]
    MissingDateContext(String),

    /// Day is not one of the seven English weekday names
    #[error("Unknown day name: '{0}'")]
    UnknownDayName(String),

    /// Time-level task asked for an end boundary it does not carry
    #[error("Missing end time")]
    MissingEndTime,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SerializeFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
