//! Row scanning: sample extraction and the scan drivers.

pub mod engine;
pub mod extract;

pub use engine::{scan_row, scan_sheet, scan_sheet_parallel, RowOutcome};
pub use extract::{extract, extract_window, NumericSamples};
