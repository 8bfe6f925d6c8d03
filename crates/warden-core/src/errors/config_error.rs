//! Configuration-layer errors.

use super::error_code::{self, WardenErrorCode};

/// Errors that can occur while loading or interpreting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {message}")]
    ParseError { message: String },

    #[error("Cannot read config file {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl WardenErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::IoError { .. } => error_code::CONFIG_IO_ERROR,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
