//! CIE Standard Illuminant White Points
//!
//! Reference whites for the XYZ ↔ L*a*b* conversions, given as XYZ on the
//! 0-100 scale (Y = 100) for the 2° observer.
//!
//! These are physical reference values and are unrelated to the declared
//! valid range of [`Xyz`].

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalised to 100)
    pub xyz: Xyz,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }
}

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// The reference white for every conversion that does not name one.
pub const D65: WhitePoint = WhitePoint::new("D65", 95.047, 100.0, 108.883);
