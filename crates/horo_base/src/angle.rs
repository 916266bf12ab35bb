//! Circular arithmetic on ecliptic longitudes.
//!
//! Every angular comparison in the crate goes through [`angular_distance`],
//! so the 0/360 seam never produces a false negative.

/// Normalize an angle to [0, 360) degrees.
///
/// Non-finite input is returned unchanged (NaN stays NaN).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // Tiny negative inputs can round up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest angular separation between two longitudes, in [0, 180].
///
/// Both inputs are normalized first, so callers may pass raw values.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    diff.min(360.0 - diff)
}
