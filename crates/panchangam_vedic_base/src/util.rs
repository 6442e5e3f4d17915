//! Shared utility functions for calendrical calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Index of the `width`-degree segment containing `deg`, always `< count`.
pub(crate) fn segment_index(deg: f64, width: f64, count: u32) -> u32 {
    let idx = (normalize_360(deg) / width).floor();
    if idx.is_nan() || idx < 0.0 {
        0
    } else {
        (idx as u32).min(count - 1)
    }
}
