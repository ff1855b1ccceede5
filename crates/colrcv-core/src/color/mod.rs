//! Colour model types and conversions
//!
//! This module provides:
//! - RGB, HSV, HSL, CIE-XYZ and CIE-L\*a\*b\* value types
//! - Per-channel and whole-value validity checks and clamps
//! - Reference white points
//! - `From` impls for every ordered pair of models

pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use rgb::Rgb;
pub use white_point::{D65, WhitePoint};
pub use xyz::Xyz;

use crate::model::{Color, ColorModel};
use std::fmt::Debug;

/// Behaviour shared by every colour model
///
/// Lets code be written once over all five models, e.g. to check that
/// clamping always yields a valid value.
pub trait ColorSpace: Copy + Debug + PartialEq + Into<Color> {
    /// The model this type represents
    const MODEL: ColorModel;

    /// Build from channel values in declaration order
    fn from_array(arr: [f64; 3]) -> Self;

    /// Channel values in declaration order
    fn to_array(&self) -> [f64; 3];

    /// Every channel lies within its closed range
    fn is_valid(&self) -> bool;

    /// Force every channel into its closed range
    fn clamp(&self) -> Self;

    /// Compare channel-wise within `epsilon`
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

macro_rules! impl_color_space {
    ($ty:ident, $model:ident) => {
        impl ColorSpace for $ty {
            const MODEL: ColorModel = ColorModel::$model;

            #[inline]
            fn from_array(arr: [f64; 3]) -> Self {
                $ty::from_array(arr)
            }

            #[inline]
            fn to_array(&self) -> [f64; 3] {
                $ty::to_array(self)
            }

            #[inline]
            fn is_valid(&self) -> bool {
                $ty::is_valid(self)
            }

            #[inline]
            fn clamp(&self) -> Self {
                $ty::clamp(self)
            }
        }

        impl From<[f64; 3]> for $ty {
            fn from(arr: [f64; 3]) -> Self {
                $ty::from_array(arr)
            }
        }

        impl From<$ty> for [f64; 3] {
            fn from(value: $ty) -> Self {
                value.to_array()
            }
        }
    };
}

impl_color_space!(Rgb, Rgb);
impl_color_space!(Hsv, Hsv);
impl_color_space!(Hsl, Hsl);
impl_color_space!(Lab, Lab);
impl_color_space!(Xyz, Xyz);

macro_rules! impl_from_conversion {
    ($($src:ident => $dst:ident via $method:ident;)*) => {
        $(
            impl From<$src> for $dst {
                #[inline]
                fn from(value: $src) -> Self {
                    value.$method()
                }
            }
        )*
    };
}

impl_from_conversion! {
    Rgb => Hsv via to_hsv;
    Rgb => Hsl via to_hsl;
    Rgb => Lab via to_lab;
    Rgb => Xyz via to_xyz;
    Hsv => Rgb via to_rgb;
    Hsv => Hsl via to_hsl;
    Hsv => Lab via to_lab;
    Hsv => Xyz via to_xyz;
    Hsl => Rgb via to_rgb;
    Hsl => Hsv via to_hsv;
    Hsl => Lab via to_lab;
    Hsl => Xyz via to_xyz;
    Lab => Rgb via to_rgb;
    Lab => Hsv via to_hsv;
    Lab => Hsl via to_hsl;
    Lab => Xyz via to_xyz;
    Xyz => Rgb via to_rgb;
    Xyz => Hsv via to_hsv;
    Xyz => Hsl via to_hsl;
    Xyz => Lab via to_lab;
}

/// Normalise a hue in degrees into [0, 360) with a single correction step
///
/// A tiny negative hue rounds up to exactly 360 when corrected, so that
/// case folds to 0.
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = if h >= 360.0 {
        h - 360.0
    } else if h < 0.0 {
        h + 360.0
    } else {
        h
    };
    if h >= 360.0 { 0.0 } else { h }
}

/// Hue, in degrees, of RGB channels scaled to [0, 1]
///
/// Shared by the HSV and HSL conversions. `delta` must be non-zero.
#[inline]
pub(crate) fn rgb_hue(r: f64, g: f64, b: f64, max_c: f64, delta: f64) -> f64 {
    let h = if r == max_c {
        60.0 * (((g - b) / delta) % 6.0)
    } else if g == max_c {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    normalize_hue(h)
}
