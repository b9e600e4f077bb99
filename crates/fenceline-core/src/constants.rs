//! Shared constants for the Fenceline scanner.

/// Fenceline version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default IQR fence multiplier.
pub const DEFAULT_MULTIPLIER: f64 = 1.5;

/// Minimum numeric samples in a row before a fence is computed.
/// Rows below this are counted but never flagged.
pub const MIN_FENCE_SAMPLES: usize = 4;

/// Highest addressable spreadsheet column (XFD).
pub const MAX_COLUMN_INDEX: u32 = 16_384;

/// Default 1-based row at which scanning starts.
pub const DEFAULT_START_ROW: u32 = 1;

/// Default 1-based sheet index to scan.
pub const DEFAULT_SHEET: usize = 1;

/// Suffix appended to the input file stem for the result file.
pub const RESULT_SUFFIX: &str = "_result";

/// Default marker wrapped around flagged cells in the saved result.
pub const DEFAULT_MARKER: &str = "**";
