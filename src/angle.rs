//! Angle utilities shared by the edge selector and the spectral fit.

/// Shifts a negative angle in degrees by one turn so gradient orientations
/// from `atan2` land in `[0, 360)`. Non-negative input is returned unchanged.
///
/// Negatives small enough that the shift rounds to exactly `360.0` fold to
/// `0.0`.
#[inline]
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    if angle_deg < 0.0 {
        let shifted = angle_deg + 360.0;
        if shifted >= 360.0 {
            0.0
        } else {
            shifted
        }
    } else {
        angle_deg
    }
}

/// Arithmetic mean of two phases in radians, each in (−π, π].
///
/// This is a plain average, not a circular mean: phases on either side of
/// the ±π cut average towards zero.
#[inline]
pub fn mean_phase(a: f64, b: f64) -> f64 {
    (a + b) * 0.5
}
