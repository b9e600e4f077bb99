//! Interpolated percentiles.

/// Compute the `p`-th percentile (0..=100) of `sorted` using linear
/// interpolation between closest ranks: `rank = p/100 · (n−1)`, with the
/// result interpolated between the values at `floor(rank)` and
/// `ceil(rank)`. This is numpy's default `linear` method; the fence
/// bounds are calibrated against it, so a different convention would
/// shift boundary classifications.
///
/// `sorted` must be non-empty and ascending; callers own the sort.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=100.0).contains(&p));

    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
