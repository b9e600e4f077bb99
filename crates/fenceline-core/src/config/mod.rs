//! Configuration system for Fenceline.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod fenceline_config;
pub mod output_config;
pub mod scan_config;

pub use fenceline_config::{CliOverrides, FencelineConfig};
pub use output_config::OutputConfig;
pub use scan_config::ScanConfig;
