//! Error types for tome-core
//!
//! Only the persistence and configuration paths can fail. Lookup misses,
//! malformed category paths and stale fold entries are not errors.

use thiserror::Error;

/// Errors that can occur while loading or saving overlay state
#[derive(Debug, Error)]
pub enum TomeError {
    /// I/O error while reading or writing the settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings document could not be (de)serialized
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TomeError {
    /// Create a new InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result alias used across tome-core
pub type Result<T> = std::result::Result<T, TomeError>;
