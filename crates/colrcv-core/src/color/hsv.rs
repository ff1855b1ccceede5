//! HSV Colour Model
//!
//! Hue/Saturation/Value, a cylindrical reparametrisation of RGB. The only
//! direct conversion is to RGB; everything else goes through it.

use crate::color::{Hsl, Lab, Rgb, Xyz};
use crate::math::{clamp, range_valid};
use bytemuck::{Pod, Zeroable};

/// HSV colour
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees (0 to 360)
    pub h: f64,
    /// Saturation (0 to 100)
    pub s: f64,
    /// Value (0 to 100)
    pub v: f64,
}

impl Hsv {
    pub const MIN: f64 = 0.0;
    pub const H_MAX: f64 = 360.0;
    pub const S_MAX: f64 = 100.0;
    pub const V_MAX: f64 = 100.0;

    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            h: arr[0],
            s: arr[1],
            v: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    #[inline]
    pub fn h_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.h, Self::H_MAX)
    }

    #[inline]
    pub fn s_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.s, Self::S_MAX)
    }

    #[inline]
    pub fn v_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.v, Self::V_MAX)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.h_is_valid() && self.s_is_valid() && self.v_is_valid()
    }

    #[inline]
    pub fn clamp_h(&self) -> Self {
        Self {
            h: clamp(self.h, Self::MIN, Self::H_MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp_s(&self) -> Self {
        Self {
            s: clamp(self.s, Self::MIN, Self::S_MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp_v(&self) -> Self {
        Self {
            v: clamp(self.v, Self::MIN, Self::V_MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp(&self) -> Self {
        self.clamp_h().clamp_s().clamp_v()
    }

    /// Convert to RGB
    ///
    /// Zero saturation yields a grey of `v` scaled to 0-255. A hue of 360
    /// behaves as 0, and negative hues wrap forward.
    pub fn to_rgb(&self) -> Rgb {
        let s = self.s / 100.0;
        let v = self.v / 100.0;

        if s == 0.0 {
            let grey = v * Rgb::MAX;
            return Rgb::new(grey, grey, grey);
        }

        let sector = (self.h / 60.0).rem_euclid(6.0);
        let i = sector.floor();
        let f = sector - i;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(r * Rgb::MAX, g * Rgb::MAX, b * Rgb::MAX)
    }

    /// Convert to HSL (via RGB)
    #[inline]
    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Convert to CIE-L*a*b* (via RGB and XYZ)
    #[inline]
    pub fn to_lab(&self) -> Lab {
        self.to_rgb().to_lab()
    }

    /// Convert to CIE-XYZ (via RGB)
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSpace;

    const ALMOST: f64 = 0.001;

    #[test]
    fn test_validity() {
        assert!(Hsv::new(180.0, 50.0, 50.0).is_valid());
        assert!(Hsv::new(360.0, 100.0, 0.0).is_valid());

        let invalid = Hsv::new(720.0, -1.0, 100.5);
        assert!(!invalid.h_is_valid());
        assert!(!invalid.s_is_valid());
        assert!(!invalid.v_is_valid());
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_clamp() {
        let clamped = Hsv::new(-20.0, 150.0, f64::NEG_INFINITY).clamp();
        assert_eq!(clamped, Hsv::new(0.0, 100.0, 0.0));
        assert!(clamped.is_valid());

        let only_h = Hsv::new(400.0, 150.0, -5.0).clamp_h();
        assert_eq!(only_h, Hsv::new(360.0, 150.0, -5.0));
    }

    #[test]
    fn test_to_rgb() {
        let rgb = Hsv::new(20.0, 75.0, 100.0).to_rgb();
        assert!(rgb.approx_eq(&Rgb::new(255.0, 127.5, 63.75), ALMOST), "{:?}", rgb);
    }

    #[test]
    fn test_to_rgb_achromatic() {
        let rgb = Hsv::new(123.0, 0.0, 50.0).to_rgb();
        assert_eq!(rgb, Rgb::new(127.5, 127.5, 127.5));
    }

    #[test]
    fn test_to_rgb_every_sector() {
        let cases = [
            (0.0, [255.0, 0.0, 0.0]),
            (60.0, [255.0, 255.0, 0.0]),
            (120.0, [0.0, 255.0, 0.0]),
            (180.0, [0.0, 255.0, 255.0]),
            (240.0, [0.0, 0.0, 255.0]),
            (300.0, [255.0, 0.0, 255.0]),
            (360.0, [255.0, 0.0, 0.0]),
        ];
        for (h, expected) in cases {
            let rgb = Hsv::new(h, 100.0, 100.0).to_rgb();
            assert!(
                rgb.approx_eq(&Rgb::from_array(expected), 1e-9),
                "h={} -> {:?}",
                h,
                rgb
            );
        }
    }

    #[test]
    fn test_negative_hue_wraps() {
        let wrapped = Hsv::new(-60.0, 80.0, 90.0).to_rgb();
        let positive = Hsv::new(300.0, 80.0, 90.0).to_rgb();
        assert!(wrapped.approx_eq(&positive, 1e-9));
    }

    #[test]
    fn test_roundtrip_through_rgb() {
        let hsv = Hsv::new(200.0, 40.0, 70.0);
        let rt = hsv.to_rgb().to_hsv();
        assert!(hsv.approx_eq(&rt, ALMOST), "{:?}", rt);
    }

    #[test]
    fn test_to_hsl() {
        // pure red keeps its hue, HSL saturation 100, lightness 50
        let hsl = Hsv::new(0.0, 100.0, 100.0).to_hsl();
        assert!(hsl.approx_eq(&Hsl::new(0.0, 100.0, 50.0), ALMOST), "{:?}", hsl);
    }

    #[test]
    fn test_composed_conversions() {
        let hsv = Hsv::new(20.0, 75.0, 100.0);
        assert!(hsv.to_xyz().approx_eq(&hsv.to_rgb().to_xyz(), 1e-12));
        assert!(hsv.to_lab().approx_eq(&hsv.to_rgb().to_xyz().to_lab(), 1e-12));
    }
}
