//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;
use fenceline_core::config::CliOverrides;
use fenceline_core::errors::ConfigError;

/// Row-wise IQR outlier scanner for tabular quote data.
///
/// Flags cells whose value falls outside their own row's Tukey fence
/// and writes a marked copy of the table.
#[derive(Parser, Debug)]
#[command(name = "fenceline", version, about)]
pub struct Args {
    /// Input table file (CSV).
    #[arg(long, short = 'f')]
    pub file: PathBuf,

    /// Output path. Default: input with `_result` before the extension.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// 1-based sheet index to scan.
    #[arg(long)]
    pub sheet: Option<usize>,

    /// Column window as `START:END` letters, e.g. `B:H`.
    #[arg(long)]
    pub columns: Option<String>,

    /// 1-based row at which scanning starts.
    #[arg(long)]
    pub start_row: Option<u32>,

    /// IQR fence multiplier (larger admits more spread before flagging).
    #[arg(long, allow_negative_numbers = true)]
    pub multiplier: Option<f64>,

    /// Marker wrapped around flagged cells in the result.
    #[arg(long)]
    pub marker: Option<String>,

    /// Write a Markdown outlier report next to the result.
    #[arg(long)]
    pub report: bool,

    /// Fail on missing parameters instead of prompting for them.
    #[arg(long)]
    pub no_interactive: bool,

    /// Scan rows in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Print the final summary as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Convert flag values into config overrides.
    pub fn overrides(&self) -> Result<CliOverrides, ConfigError> {
        let (start_column, end_column) = match &self.columns {
            Some(spec) => {
                let (start, end) = split_columns(spec)?;
                (Some(start), Some(end))
            }
            None => (None, None),
        };

        Ok(CliOverrides {
            start_column,
            end_column,
            start_row: self.start_row,
            multiplier: self.multiplier,
            sheet: self.sheet,
            output: self.output.clone(),
            marker: self.marker.clone(),
            report: self.report.then_some(true),
        })
    }
}

/// Split a `START:END` column spec into its two letter references.
fn split_columns(spec: &str) -> Result<(String, String), ConfigError> {
    match spec.split_once(':') {
        Some((start, end)) if !start.trim().is_empty() && !end.trim().is_empty() => Ok((
            start.trim().to_ascii_uppercase(),
            end.trim().to_ascii_uppercase(),
        )),
        _ => Err(ConfigError::InvalidColumn {
            given: spec.to_string(),
        }),
    }
}
