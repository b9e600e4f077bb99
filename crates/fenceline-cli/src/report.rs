//! Outlier reporting: per-row progress trace and the Markdown report.

use std::path::{Path, PathBuf};

use fenceline_core::errors::TableError;
use fenceline_core::events::ScanEventHandler;
use fenceline_core::types::{column, ScanSummary, Sheet};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Per-row progress trace on the scan event seam.
pub struct ConsoleEvents;

impl ScanEventHandler for ConsoleEvents {
    fn on_row_processed(&self, row_index: u32, samples: usize, flagged: usize) {
        debug!(row = row_index, samples, flagged, "processed row");
    }
}

/// Derive the report path next to the result file:
/// `quotes_result.csv` → `quotes_result_outliers.md`.
pub fn report_path(result: &Path) -> PathBuf {
    let stem = result
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("result");
    result.with_file_name(format!("{stem}_outliers.md"))
}

/// Write a Markdown report of flagged cells: one table row per flag,
/// plus per-column totals.
pub fn write_report(sheet: &Sheet, summary: &ScanSummary, path: &Path) -> Result<(), TableError> {
    let mut out = String::new();
    out.push_str("# Outlier report\n\n");
    out.push_str(&format!("- sheet: {}\n", sheet.name));
    out.push_str(&format!("- {summary}\n\n"));

    out.push_str("| row | column | value |\n");
    out.push_str("|---|---|---|\n");

    let mut by_column: FxHashMap<u32, usize> = FxHashMap::default();
    for cell in sheet.flagged_cells() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            cell.row,
            column_label(cell.column),
            cell.value
        ));
        *by_column.entry(cell.column).or_default() += 1;
    }

    if !by_column.is_empty() {
        out.push_str("\n## Flags per column\n\n");
        let mut columns: Vec<_> = by_column.into_iter().collect();
        columns.sort_by_key(|&(col, _)| col);
        for (col, count) in columns {
            out.push_str(&format!("- {}: {}\n", column_label(col), count));
        }
    }

    std::fs::write(path, out).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn column_label(index: u32) -> String {
    column::column_name(index).unwrap_or_else(|_| index.to_string())
}
