//! Row scan drivers.

use fenceline_core::config::ScanConfig;
use fenceline_core::errors::ConfigError;
use fenceline_core::events::ScanEventHandler;
use fenceline_core::types::{Row, ScanSummary, Sheet};
use rayon::prelude::*;
use tracing::debug;

use super::extract::extract_window;
use crate::outliers::tukey_fence;

/// Outcome of scanning a single row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowOutcome {
    /// The row had at least one numeric sample in the window.
    pub processed: bool,
    /// Numeric samples found in the window.
    pub samples: usize,
    /// Cells flagged as outliers.
    pub flagged: usize,
}

impl RowOutcome {
    fn summary(self) -> ScanSummary {
        ScanSummary {
            rows_processed: self.processed as u64,
            cells_flagged: self.flagged as u64,
        }
    }
}

/// Scan one row: extract samples, derive the fence, flag outliers.
///
/// Rows with at least one sample count as processed even when they have
/// too few samples for a fence; such rows are never flagged. Flags are
/// only ever raised, never cleared.
pub fn scan_row(row: &mut Row, start_col: u32, end_col: u32, multiplier: f64) -> RowOutcome {
    let samples = extract_window(row, start_col, end_col);
    if samples.is_empty() {
        return RowOutcome::default();
    }

    let mut outcome = RowOutcome {
        processed: true,
        samples: samples.len(),
        flagged: 0,
    };

    let fence = match tukey_fence(&samples.values, multiplier) {
        Some(fence) => fence,
        None => return outcome,
    };

    for (&value, &idx) in samples.values.iter().zip(&samples.cells) {
        if fence.is_outlier(value) {
            row.cells[idx].flagged = true;
            outcome.flagged += 1;
        }
    }

    outcome
}

/// Scan a sheet sequentially, in increasing row order.
///
/// `events` receives a per-row progress callback and the final summary;
/// pass `&NoopEvents` when no reporting is needed.
pub fn scan_sheet(
    sheet: &mut Sheet,
    config: &ScanConfig,
    events: &dyn ScanEventHandler,
) -> Result<ScanSummary, ConfigError> {
    let (start_col, end_col) = config.effective_columns(sheet.max_column())?;
    let start_row = config.effective_start_row();
    let multiplier = config.effective_multiplier();

    let mut summary = ScanSummary::default();
    for row in sheet.rows.iter_mut().filter(|row| row.index >= start_row) {
        let outcome = scan_row(row, start_col, end_col, multiplier);
        debug!(
            row = row.index,
            samples = outcome.samples,
            flagged = outcome.flagged,
            "row scanned"
        );
        events.on_row_processed(row.index, outcome.samples, outcome.flagged);
        summary = summary.merge(outcome.summary());
    }

    events.on_scan_complete(&summary);
    Ok(summary)
}

/// Scan a sheet with row-level parallelism.
///
/// Produces the same flags and summary as `scan_sheet`: rows are
/// statistically independent and partial summaries reduce by sum, so
/// ordering does not matter. Per-row progress events are not emitted
/// here; their order would be nondeterministic.
pub fn scan_sheet_parallel(sheet: &mut Sheet, config: &ScanConfig) -> Result<ScanSummary, ConfigError> {
    let (start_col, end_col) = config.effective_columns(sheet.max_column())?;
    let start_row = config.effective_start_row();
    let multiplier = config.effective_multiplier();

    let summary = sheet
        .rows
        .par_iter_mut()
        .filter(|row| row.index >= start_row)
        .map(|row| scan_row(row, start_col, end_col, multiplier).summary())
        .reduce(ScanSummary::default, ScanSummary::merge);

    Ok(summary)
}
