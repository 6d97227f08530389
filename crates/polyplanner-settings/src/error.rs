//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading,
//! saving and value parsing. Out-of-range numeric values are never errors;
//! they are clamped when the configuration is normalized.

use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file extension is not `.json` or `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A color string could not be parsed.
    #[error("Invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// The configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl From<SettingsError> for polyplanner_core::Error {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::IoError(e) => polyplanner_core::Error::Io(e),
            other => polyplanner_core::Error::config(other.to_string()),
        }
    }
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
