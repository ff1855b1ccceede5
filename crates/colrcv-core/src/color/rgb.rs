//! RGB Colour Model
//!
//! The ubiquitous red/green/blue display model, with channels on the
//! 0-255 scale. RGB is the hub model: HSV and HSL convert only through it,
//! and it is the gateway into the CIE models via XYZ.

use crate::color::{Hsl, Hsv, Lab, Xyz, rgb_hue};
use crate::math::{SRGB_TO_XYZ, clamp, max, min, range_valid, srgb_gamma_decode};
use bytemuck::{Pod, Zeroable};

/// RGB colour with channels in [0, 255]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component (0 to 255)
    pub r: f64,
    /// Green component (0 to 255)
    pub g: f64,
    /// Blue component (0 to 255)
    pub b: f64,
}

impl Rgb {
    /// Minimum value of any channel
    pub const MIN: f64 = 0.0;
    /// Maximum value of any channel
    pub const MAX: f64 = 255.0;

    /// Black colour
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White colour
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    /// Create a new RGB colour
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit channel values
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }

    /// Round to 8-bit channel values, saturating out-of-range channels
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [
            clamp(self.r.round(), Self::MIN, Self::MAX) as u8,
            clamp(self.g.round(), Self::MIN, Self::MAX) as u8,
            clamp(self.b.round(), Self::MIN, Self::MAX) as u8,
        ]
    }

    #[inline]
    pub fn r_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.r, Self::MAX)
    }

    #[inline]
    pub fn g_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.g, Self::MAX)
    }

    #[inline]
    pub fn b_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.b, Self::MAX)
    }

    /// Check every channel is within [0, 255]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.r_is_valid() && self.g_is_valid() && self.b_is_valid()
    }

    /// Clamp the red channel, leaving the others untouched
    #[inline]
    pub fn clamp_r(&self) -> Self {
        Self {
            r: clamp(self.r, Self::MIN, Self::MAX),
            ..*self
        }
    }

    /// Clamp the green channel, leaving the others untouched
    #[inline]
    pub fn clamp_g(&self) -> Self {
        Self {
            g: clamp(self.g, Self::MIN, Self::MAX),
            ..*self
        }
    }

    /// Clamp the blue channel, leaving the others untouched
    #[inline]
    pub fn clamp_b(&self) -> Self {
        Self {
            b: clamp(self.b, Self::MIN, Self::MAX),
            ..*self
        }
    }

    /// Clamp all channels to [0, 255]
    #[inline]
    pub fn clamp(&self) -> Self {
        self.clamp_r().clamp_g().clamp_b()
    }

    /// Channels scaled to [0, 1]
    #[inline]
    fn unit(&self) -> [f64; 3] {
        [self.r / Self::MAX, self.g / Self::MAX, self.b / Self::MAX]
    }

    /// Convert to HSV
    ///
    /// Achromatic colours (all channels equal) get hue 0 and saturation 0.
    pub fn to_hsv(&self) -> Hsv {
        let [r, g, b] = self.unit();
        let min_c = min(r, min(g, b));
        let max_c = max(r, max(g, b));
        let delta = max_c - min_c;

        let v = max_c * 100.0;
        if delta == 0.0 {
            return Hsv::new(0.0, 0.0, v);
        }

        let s = delta / max_c * 100.0;
        let h = rgb_hue(r, g, b, max_c, delta);
        Hsv::new(h, s, v)
    }

    /// Convert to HSL
    ///
    /// Achromatic colours (all channels equal) get hue 0 and saturation 0.
    pub fn to_hsl(&self) -> Hsl {
        let [r, g, b] = self.unit();
        let min_c = min(r, min(g, b));
        let max_c = max(r, max(g, b));
        let delta = max_c - min_c;

        let l = (max_c + min_c) / 2.0 * 100.0;
        if delta == 0.0 {
            return Hsl::new(0.0, 0.0, l);
        }

        let s = if l < 50.0 {
            delta / (max_c + min_c) * 100.0
        } else {
            delta / (2.0 - max_c - min_c) * 100.0
        };
        let h = rgb_hue(r, g, b, max_c, delta);
        Hsl::new(h, s, l)
    }

    /// Convert to CIE-XYZ (D65) via linearised sRGB
    pub fn to_xyz(&self) -> Xyz {
        let linear = self.unit().map(|c| srgb_gamma_decode(c) * 100.0);
        Xyz::from_array(SRGB_TO_XYZ.multiply_vec(linear))
    }

    /// Convert to CIE-L*a*b* (via XYZ)
    #[inline]
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_u8(r, g, b)
    }
}
