//! Configuration and parameter validation errors.

use super::error_code::{self, ErrorCode};

/// Errors from configuration loading and parameter validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid column reference: {given:?}")]
    InvalidColumn { given: String },

    #[error("Column out of range (A..XFD): {given}")]
    ColumnOutOfRange { given: String },

    #[error("Column range is reversed: {start} comes after {end}")]
    ReversedRange { start: String, end: String },

    #[error("Start row must be a positive 1-based index (got {given})")]
    InvalidStartRow { given: i64 },

    #[error("Multiplier must be a non-negative finite number (got {given})")]
    InvalidMultiplier { given: f64 },

    #[error("Sheet index must be a positive 1-based index")]
    InvalidSheetIndex,

    #[error("Sheet index out of range: {given} (workbook has {count} sheets)")]
    SheetOutOfRange { given: usize, count: usize },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SheetOutOfRange { .. } => error_code::SHEET_NOT_FOUND,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
