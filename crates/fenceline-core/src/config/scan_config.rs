//! Scan window configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MULTIPLIER, DEFAULT_SHEET, DEFAULT_START_ROW, MAX_COLUMN_INDEX,
};
use crate::errors::ConfigError;
use crate::types::column;

/// Configuration for the scan window and fence width.
///
/// All fields are optional; `effective_*` accessors supply defaults, so
/// an empty config scans the whole sheet with the standard 1.5 fence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// First column of the scan window (letter, e.g. "B"). Default: "A".
    pub start_column: Option<String>,
    /// Last column of the scan window (letter). Default: the sheet's
    /// widest used column.
    pub end_column: Option<String>,
    /// 1-based row at which scanning starts. Default: 1.
    pub start_row: Option<u32>,
    /// IQR fence multiplier. Default: 1.5.
    pub multiplier: Option<f64>,
    /// 1-based sheet index to scan. Default: 1.
    pub sheet: Option<usize>,
}

impl ScanConfig {
    /// Returns the effective fence multiplier, defaulting to 1.5.
    pub fn effective_multiplier(&self) -> f64 {
        self.multiplier.unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// Returns the effective 1-based start row, defaulting to 1.
    pub fn effective_start_row(&self) -> u32 {
        self.start_row.unwrap_or(DEFAULT_START_ROW)
    }

    /// Returns the effective 1-based sheet index, defaulting to 1.
    pub fn effective_sheet(&self) -> usize {
        self.sheet.unwrap_or(DEFAULT_SHEET)
    }

    /// Resolve the inclusive 1-based column window, defaulting the end
    /// to the sheet's widest used column.
    pub fn effective_columns(&self, sheet_max_column: u32) -> Result<(u32, u32), ConfigError> {
        let start = match &self.start_column {
            Some(letters) => column::column_index(letters)?,
            None => 1,
        };
        let end = match &self.end_column {
            Some(letters) => column::column_index(letters)?,
            None => sheet_max_column.clamp(1, MAX_COLUMN_INDEX),
        };
        if start > end {
            return Err(ConfigError::ReversedRange {
                start: column::column_name(start)?,
                end: column::column_name(end)?,
            });
        }
        Ok((start, end))
    }

    /// Validate the configured values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(letters) = &self.start_column {
            column::column_index(letters)?;
        }
        if let Some(letters) = &self.end_column {
            column::column_index(letters)?;
        }
        if self.start_row == Some(0) {
            return Err(ConfigError::InvalidStartRow { given: 0 });
        }
        if let Some(multiplier) = self.multiplier {
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(ConfigError::InvalidMultiplier { given: multiplier });
            }
        }
        if self.sheet == Some(0) {
            return Err(ConfigError::InvalidSheetIndex);
        }
        Ok(())
    }
}
