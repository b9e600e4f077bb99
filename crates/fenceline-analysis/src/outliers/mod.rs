//! Fence-based outlier classification.
//!
//! Per-row IQR with Tukey fences: quartiles by linear interpolation,
//! `[Q1 - k·IQR, Q3 + k·IQR]` bounds, strict-outside classification.

pub mod iqr;
pub mod quantile;
pub mod types;

pub use iqr::tukey_fence;
pub use types::Fence;
