//! Interactive prompt errors.
//!
//! Malformed input is never an error at this level; prompt loops
//! re-ask. Only a dead input stream aborts the run.

use super::error_code::{self, ErrorCode};

/// Errors from interactive parameter collection.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Input stream closed before a valid value was read")]
    InputClosed,

    #[error("IO error reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl ErrorCode for PromptError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InputClosed => error_code::INPUT_CLOSED,
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
