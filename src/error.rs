// src/error.rs

//! Unified error handling for the watcher.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for watcher operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Exit code for configuration failures (missing secrets, invalid config).
pub const EXIT_CONFIG: u8 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Required environment variable is absent or blank
    #[error("Missing required environment variable {0}")]
    MissingEnv(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Listing page answered with a non-success status
    #[error("Fetch of {url} failed with status {status}")]
    Fetch { url: String, status: StatusCode },

    /// Messaging API rejected a message
    #[error("Notification rejected with status {status}: {message}")]
    Notify { status: StatusCode, message: String },
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a notification error.
    pub fn notify(status: StatusCode, message: impl fmt::Display) -> Self {
        Self::Notify {
            status,
            message: message.to_string(),
        }
    }

    /// Whether this error belongs to the configuration class.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingEnv(_) | Self::Config(_) | Self::Validation(_)
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_config() {
            EXIT_CONFIG
        } else {
            EXIT_FAILURE
        }
    }
}
