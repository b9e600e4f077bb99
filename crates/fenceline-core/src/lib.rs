//! fenceline-core: shared types, errors, config, events, tracing, and
//! constants for the Fenceline row-wise outlier scanner.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use errors::{ConfigError, ErrorCode, PromptError, RunError, TableError};
pub use types::{Cell, CellValue, Row, ScanSummary, Sheet, Workbook};
