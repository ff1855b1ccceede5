//! Range checks and clamping over closed intervals
//!
//! Unlike [`f64::clamp`], these never panic on inverted bounds. Infinities
//! compare normally and clamp to the finite bound; NaN is not special-cased.

/// Check that `min <= val <= max`
#[inline]
pub fn range_valid(min: f64, val: f64, max: f64) -> bool {
    min <= val && val <= max
}

/// Smaller of two values
#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    if a < b { a } else { b }
}

/// Larger of two values
#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    if a > b { a } else { b }
}

/// Force `value` into `[min, max]`
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    self::min(max, self::max(min, value))
}
