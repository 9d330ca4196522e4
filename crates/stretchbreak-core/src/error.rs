//! Core error types for stretchbreak-core.
//!
//! Timer, policy and orchestration code never fails: bad input is clamped at
//! the boundary. Only the parts that touch the filesystem or parse user data
//! return these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stretchbreak-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Two entries share an identifier
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId { collection: String, id: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors parsing a runtime command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing argument for '{0}'")]
    MissingArgument(&'static str),

    #[error("invalid argument '{value}' for '{command}'")]
    InvalidArgument { command: &'static str, value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
