//! CIE-L*a*b* Colour Model
//!
//! L*a*b* is derived from XYZ through a cube-root-like transfer function.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! The only direct conversion is to and from XYZ.

use crate::color::{D65, Hsl, Hsv, Rgb, WhitePoint, Xyz};
use crate::math::{clamp, range_valid};
use bytemuck::{Pod, Zeroable};

/// Threshold between the cube-root and linear segments of the transfer
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment
const KAPPA: f64 = 7.787;
/// Offset of the linear segment
const OFFSET: f64 = 16.0 / 116.0;

/// CIELAB colour
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (-100 to 100)
    pub a: f64,
    /// Blue-yellow axis (-100 to 100)
    pub b: f64,
}

impl Lab {
    pub const L_MIN: f64 = 0.0;
    pub const A_MIN: f64 = -100.0;
    pub const B_MIN: f64 = -100.0;
    pub const MAX: f64 = 100.0;

    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    #[inline]
    pub fn l_is_valid(&self) -> bool {
        range_valid(Self::L_MIN, self.l, Self::MAX)
    }

    #[inline]
    pub fn a_is_valid(&self) -> bool {
        range_valid(Self::A_MIN, self.a, Self::MAX)
    }

    #[inline]
    pub fn b_is_valid(&self) -> bool {
        range_valid(Self::B_MIN, self.b, Self::MAX)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.l_is_valid() && self.a_is_valid() && self.b_is_valid()
    }

    #[inline]
    pub fn clamp_l(&self) -> Self {
        Self {
            l: clamp(self.l, Self::L_MIN, Self::MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp_a(&self) -> Self {
        Self {
            a: clamp(self.a, Self::A_MIN, Self::MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp_b(&self) -> Self {
        Self {
            b: clamp(self.b, Self::B_MIN, Self::MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp(&self) -> Self {
        self.clamp_l().clamp_a().clamp_b()
    }

    /// Convert from XYZ with the D65 reference white
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_xyz_with_white(xyz, &D65)
    }

    /// Convert from XYZ with a specific reference white
    pub fn from_xyz_with_white(xyz: Xyz, white: &WhitePoint) -> Self {
        let fx = lab_f(xyz.x / white.xyz.x);
        let fy = lab_f(xyz.y / white.xyz.y);
        let fz = lab_f(xyz.z / white.xyz.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to XYZ with the D65 reference white
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_with_white(&D65)
    }

    /// Convert to XYZ with a specific reference white
    pub fn to_xyz_with_white(&self, white: &WhitePoint) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inv(fx) * white.xyz.x,
            lab_f_inv(fy) * white.xyz.y,
            lab_f_inv(fz) * white.xyz.z,
        )
    }

    /// Convert to RGB (via XYZ, clamped)
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    /// Convert to HSV (via XYZ and RGB)
    #[inline]
    pub fn to_hsv(&self) -> Hsv {
        self.to_xyz().to_hsv()
    }

    /// Convert to HSL (via XYZ and RGB)
    #[inline]
    pub fn to_hsl(&self) -> Hsl {
        self.to_xyz().to_hsl()
    }
}

/// Forward transfer: XYZ ratio → f(t)
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA * t + OFFSET
    }
}

/// Inverse transfer: f(t) → XYZ ratio
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (t - OFFSET) / KAPPA
    }
}
