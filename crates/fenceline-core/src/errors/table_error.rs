//! Table io errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading or saving a table file.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unbalanced quote in {path} at line {line}")]
    UnbalancedQuote { path: PathBuf, line: u32 },

    #[error("Table file is empty: {path}")]
    EmptyTable { path: PathBuf },
}

impl ErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            _ => error_code::TABLE_ERROR,
        }
    }
}
