//! Run summary counters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate counters for a scan run.
///
/// Counters are monotonic: the engine only ever increments them, and a
/// row contributes to `rows_processed` iff it has at least one numeric
/// sample in the scan window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Rows with at least one numeric sample.
    pub rows_processed: u64,
    /// Cells flagged as outliers.
    pub cells_flagged: u64,
}

impl ScanSummary {
    /// Combine two summaries. Commutative and associative, so parallel
    /// scans can reduce partial summaries in any order.
    pub fn merge(self, other: Self) -> Self {
        Self {
            rows_processed: self.rows_processed + other.rows_processed,
            cells_flagged: self.cells_flagged + other.cells_flagged,
        }
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows processed: {}, outlier cells: {}",
            self.rows_processed, self.cells_flagged
        )
    }
}
