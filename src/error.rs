//! Centralized error types for Widgetry.
//!
//! This module provides a unified error hierarchy for the application with
//! user-friendly error messages. All error types use `thiserror`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::table::TableError;

/// The main application error type.
///
/// Aggregates the errors that can occur while starting or running the
/// catalog, keeping the underlying error for the log.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A table could not be built.
    #[error("{0}")]
    Table(#[from] TableError),

    /// IO errors (terminal, file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
                ConfigError::UnknownStory(slug) => {
                    format!("Story '{}' not found. Run with --list to see stories.", slug)
                }
            },
            AppError::Table(e) => format!("Could not build table: {}", e),
            AppError::Io(_) => "A terminal or file operation failed.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
