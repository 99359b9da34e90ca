//! Core error types for leaveplan-core.
//!
//! Argument problems surface as [`ValidationError`] before any allocation
//! work starts. Configuration and persistence problems surface as
//! [`ConfigError`]. [`CoreError`] wraps both for callers that mix them.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for leaveplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid arguments passed to the engine
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the configuration directory
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Invalid arguments. Reported synchronously, never partially applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Month index outside 0..=11
    #[error("Invalid month {month}: must be between 0 and 11")]
    MonthOutOfRange { month: u32 },

    /// Year outside the supported range
    #[error("Invalid year {year}: must be between {min} and {max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Weekly remote cap outside 0..=7
    #[error("Invalid max remote days per week {value}: must be between 0 and {max}")]
    RemoteCapOutOfRange { value: u32, max: u32 },

    /// Calendar triple that does not name a real day
    #[error("Invalid date {year}-{month}-{day} (month is 0-based)")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
