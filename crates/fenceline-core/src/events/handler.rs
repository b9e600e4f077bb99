//! ScanEventHandler trait with no-op defaults.

use crate::types::ScanSummary;

/// Trait for observing scan progress.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `Send + Sync` so the same
/// handler type can back a parallel driver.
pub trait ScanEventHandler: Send + Sync {
    /// A row inside the scan window was processed.
    fn on_row_processed(&self, _row_index: u32, _samples: usize, _flagged: usize) {}

    /// The scan finished.
    fn on_scan_complete(&self, _summary: &ScanSummary) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEvents;

impl ScanEventHandler for NoopEvents {}
