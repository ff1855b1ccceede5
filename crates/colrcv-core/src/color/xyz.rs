//! CIE XYZ Colour Model
//!
//! XYZ is the device-independent intermediate between RGB and L*a*b*.
//! Values are on the 0-100 scale, referenced to the 2° observer and D65.

use crate::color::{D65, Hsl, Hsv, Lab, Rgb, WhitePoint};
use crate::math::{XYZ_TO_SRGB, clamp, range_valid, srgb_gamma_encode};
use bytemuck::{Pod, Zeroable};

/// CIE 1931 XYZ colour
///
/// The declared valid range is wider than the D65 white point so that
/// out-of-gamut values produced by the LAB conversions still validate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value (0 to 112)
    pub x: f64,
    /// Y tristimulus value, luminance (0 to 100)
    pub y: f64,
    /// Z tristimulus value (0 to 123)
    pub z: f64,
}

impl Xyz {
    pub const MIN: f64 = 0.0;
    pub const X_MAX: f64 = 112.0;
    pub const Y_MAX: f64 = 100.0;
    pub const Z_MAX: f64 = 123.0;

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn x_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.x, Self::X_MAX)
    }

    #[inline]
    pub fn y_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.y, Self::Y_MAX)
    }

    #[inline]
    pub fn z_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.z, Self::Z_MAX)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x_is_valid() && self.y_is_valid() && self.z_is_valid()
    }

    #[inline]
    pub fn clamp_x(&self) -> Self {
        Self {
            x: clamp(self.x, Self::MIN, Self::X_MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp_y(&self) -> Self {
        Self {
            y: clamp(self.y, Self::MIN, Self::Y_MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp_z(&self) -> Self {
        Self {
            z: clamp(self.z, Self::MIN, Self::Z_MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp(&self) -> Self {
        self.clamp_x().clamp_y().clamp_z()
    }

    /// Convert to RGB without the final gamut clamp
    ///
    /// Channels may fall outside [0, 255] for colours the sRGB primaries
    /// cannot reproduce.
    pub fn to_rgb_unclamped(&self) -> Rgb {
        let scaled = self.to_array().map(|c| c / 100.0);
        let [r, g, b] = XYZ_TO_SRGB
            .multiply_vec(scaled)
            .map(|c| srgb_gamma_encode(c) * Rgb::MAX);
        Rgb::new(r, g, b)
    }

    /// Convert to RGB, clamping each channel into [0, 255]
    pub fn to_rgb(&self) -> Rgb {
        let raw = self.to_rgb_unclamped();
        let rgb = raw.clamp();
        if rgb != raw {
            tracing::debug!(xyz = ?self, rgb = ?raw, "clamped out-of-gamut XYZ to sRGB");
        }
        rgb
    }

    /// Whether this colour lies inside the sRGB gamut
    #[inline]
    pub fn in_srgb_gamut(&self) -> bool {
        self.to_rgb_unclamped().is_valid()
    }

    /// Convert to CIE-L*a*b* with the D65 reference white
    #[inline]
    pub fn to_lab(&self) -> Lab {
        Lab::from_xyz_with_white(*self, &D65)
    }

    /// Convert to CIE-L*a*b* with a specific reference white
    #[inline]
    pub fn to_lab_with_white(&self, white: &WhitePoint) -> Lab {
        Lab::from_xyz_with_white(*self, white)
    }

    /// Convert to HSV (via clamped RGB)
    #[inline]
    pub fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    /// Convert to HSL (via clamped RGB)
    #[inline]
    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }
}
