//! Top-level Fenceline configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{OutputConfig, ScanConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`FENCELINE_*`)
/// 3. Project config (`fenceline.toml` next to the input file)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FencelineConfig {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub start_column: Option<String>,
    pub end_column: Option<String>,
    pub start_row: Option<u32>,
    pub multiplier: Option<f64>,
    pub sheet: Option<usize>,
    pub output: Option<PathBuf>,
    pub marker: Option<String>,
    pub report: Option<bool>,
}

impl FencelineConfig {
    /// Load configuration with layered resolution and validate it.
    pub fn load(root: &Path, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project = root.join("fenceline.toml");
        if project.exists() {
            let text =
                std::fs::read_to_string(&project).map_err(|e| ConfigError::ParseError {
                    path: project.display().to_string(),
                    message: e.to_string(),
                })?;
            config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
                path: project.display().to_string(),
                message: e.to_string(),
            })?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.scan.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `FENCELINE_*` environment overrides. Unparseable values are
    /// logged and ignored; validation of the final config happens in
    /// `load`.
    fn apply_env_overrides(config: &mut Self) {
        if let Ok(value) = std::env::var("FENCELINE_MULTIPLIER") {
            match value.parse() {
                Ok(multiplier) => config.scan.multiplier = Some(multiplier),
                Err(_) => tracing::warn!(%value, "ignoring unparseable FENCELINE_MULTIPLIER"),
            }
        }
        if let Ok(value) = std::env::var("FENCELINE_START_ROW") {
            match value.parse() {
                Ok(row) => config.scan.start_row = Some(row),
                Err(_) => tracing::warn!(%value, "ignoring unparseable FENCELINE_START_ROW"),
            }
        }
        if let Ok(value) = std::env::var("FENCELINE_COLUMNS") {
            match value.split_once(':') {
                Some((start, end)) if !start.is_empty() && !end.is_empty() => {
                    config.scan.start_column = Some(start.trim().to_string());
                    config.scan.end_column = Some(end.trim().to_string());
                }
                _ => tracing::warn!(%value, "ignoring malformed FENCELINE_COLUMNS"),
            }
        }
        if let Ok(value) = std::env::var("FENCELINE_MARKER") {
            config.output.marker = Some(value);
        }
    }

    /// Apply CLI flag overrides (highest priority layer).
    fn apply_cli_overrides(config: &mut Self, cli: &CliOverrides) {
        if cli.start_column.is_some() {
            config.scan.start_column = cli.start_column.clone();
        }
        if cli.end_column.is_some() {
            config.scan.end_column = cli.end_column.clone();
        }
        if cli.start_row.is_some() {
            config.scan.start_row = cli.start_row;
        }
        if cli.multiplier.is_some() {
            config.scan.multiplier = cli.multiplier;
        }
        if cli.sheet.is_some() {
            config.scan.sheet = cli.sheet;
        }
        if cli.output.is_some() {
            config.output.output = cli.output.clone();
        }
        if cli.marker.is_some() {
            config.output.marker = cli.marker.clone();
        }
        if cli.report.is_some() {
            config.output.report = cli.report;
        }
    }
}
