//! Top-level run errors.

use super::error_code::ErrorCode;
use super::{ConfigError, PromptError, TableError};

/// Errors that can occur during a full scan run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

impl ErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
            Self::Prompt(e) => e.error_code(),
        }
    }
}
