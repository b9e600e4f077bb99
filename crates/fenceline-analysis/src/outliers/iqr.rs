//! IQR fence derivation (Tukey).

use fenceline_core::constants::MIN_FENCE_SAMPLES;

use super::quantile::percentile;
use super::types::Fence;

/// Derive the Tukey fence for one row's numeric samples.
///
/// Returns `None` when fewer than `MIN_FENCE_SAMPLES` values are given;
/// too little data is a skip condition, not an error.
///
/// `multiplier` widens the fence: `lower = Q1 − multiplier·IQR`,
/// `upper = Q3 + multiplier·IQR`. A multiplier of 0 degenerates to
/// `[Q1, Q3]`. Only the multiset of values matters; input order is
/// irrelevant.
pub fn tukey_fence(values: &[f64], multiplier: f64) -> Option<Fence> {
    if values.len() < MIN_FENCE_SAMPLES {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;

    Some(Fence {
        lower: q1 - multiplier * iqr,
        upper: q3 + multiplier * iqr,
    })
}
