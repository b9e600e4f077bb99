//! Output and reporting configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MARKER;

/// Configuration for result persistence and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Explicit output path. Default: input stem + `_result` + extension.
    pub output: Option<PathBuf>,
    /// Marker wrapped around flagged cells in the saved result.
    /// Default: `**`.
    pub marker: Option<String>,
    /// Write a Markdown outlier report next to the result. Default: false.
    pub report: Option<bool>,
}

impl OutputConfig {
    /// Returns the effective flag marker, defaulting to `**`.
    pub fn effective_marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }

    /// Returns whether a report should be written, defaulting to false.
    pub fn effective_report(&self) -> bool {
        self.report.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = OutputConfig::default();
        assert_eq!(config.effective_marker(), "**");
        assert!(!config.effective_report());
    }
}
