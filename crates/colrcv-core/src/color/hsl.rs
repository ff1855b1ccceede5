//! HSL Colour Model
//!
//! Hue/Saturation/Lightness. Like HSV it converts directly only to RGB;
//! the lightness definition differs, so saturation values are not
//! interchangeable between the two.

use crate::color::{Hsv, Lab, Rgb, Xyz};
use crate::math::{clamp, range_valid};
use bytemuck::{Pod, Zeroable};

/// HSL colour
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees (0 to 360)
    pub h: f64,
    /// Saturation (0 to 100)
    pub s: f64,
    /// Lightness (0 to 100)
    pub l: f64,
}

impl Hsl {
    pub const MIN: f64 = 0.0;
    pub const H_MAX: f64 = 360.0;
    pub const S_MAX: f64 = 100.0;
    pub const L_MAX: f64 = 100.0;

    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            h: arr[0],
            s: arr[1],
            l: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.l]
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
    pub fn l_is_valid(&self) -> bool {
        range_valid(Self::MIN, self.l, Self::L_MAX)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.h_is_valid() && self.s_is_valid() && self.l_is_valid()
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
    pub fn clamp_l(&self) -> Self {
        Self {
            l: clamp(self.l, Self::MIN, Self::L_MAX),
            ..*self
        }
    }

    #[inline]
    pub fn clamp(&self) -> Self {
        self.clamp_h().clamp_s().clamp_l()
    }

    /// Convert to RGB
    ///
    /// Zero saturation yields a grey of `l` scaled to 0-255.
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            let grey = self.l / 100.0 * Rgb::MAX;
            return Rgb::new(grey, grey, grey);
        }

        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let temp_b = if l < 0.5 { l * (1.0 + s) } else { l + s - s * l };
        let temp_a = 2.0 * l - temp_b;

        Rgb::new(
            Rgb::MAX * hue_to_rgb(temp_a, temp_b, h + 1.0 / 3.0),
            Rgb::MAX * hue_to_rgb(temp_a, temp_b, h),
            Rgb::MAX * hue_to_rgb(temp_a, temp_b, h - 1.0 / 3.0),
        )
    }

    /// Convert to HSV (via RGB)
    #[inline]
    pub fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
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

/// One RGB channel, in [0, 1], from the two HSL intermediates and a hue
/// offset expressed as a fraction of a turn
fn hue_to_rgb(a: f64, b: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    if 6.0 * h < 1.0 {
        a + (b - a) * 6.0 * h
    } else if 2.0 * h < 1.0 {
        b
    } else if 3.0 * h < 2.0 {
        a + (b - a) * (2.0 / 3.0 - h) * 6.0
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSpace;

    const ALMOST: f64 = 0.001;

    fn mid() -> Hsl {
        Hsl::new(Hsl::H_MAX / 2.0, Hsl::S_MAX / 2.0, Hsl::L_MAX / 2.0)
    }

    #[test]
    fn test_validity() {
        assert!(mid().is_valid());

        let invalid = Hsl::new(Hsl::H_MAX * 2.0, Hsl::S_MAX * 2.0, Hsl::L_MAX * 2.0);
        assert!(!invalid.h_is_valid());
        assert!(!invalid.s_is_valid());
        assert!(!invalid.l_is_valid());
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_clamp_within_range_is_noop() {
        assert_eq!(mid().clamp(), mid());
    }

    #[test]
    fn test_clamp_outside_range() {
        let input = Hsl::new(-100.0, 155.57, -99.9);
        let output = input.clamp();
        assert!(output.is_valid());
        assert_eq!(output, Hsl::new(0.0, 100.0, 0.0));
    }

    #[test]
    fn test_clamp_single_channel() {
        let input = Hsl::new(f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY);

        let h = input.clamp_h();
        assert!(h.h_is_valid());
        assert_eq!((h.s, h.l), (input.s, input.l));

        let s = input.clamp_s();
        assert!(s.s_is_valid());
        assert_eq!((s.h, s.l), (input.h, input.l));

        let l = input.clamp_l();
        assert!(l.l_is_valid());
        assert_eq!((l.h, l.s), (input.h, input.s));
    }

    #[test]
    fn test_to_rgb() {
        let cases = [
            ([108.0, 86.0, 86.0], [200.878, 250.002, 188.598]),
            ([8.0, 91.0, 85.0], [251.557, 191.224, 181.942]),
            ([0.0, 0.0, 13.0], [33.15, 33.15, 33.15]),
            ([20.0, 75.0, 100.0], [255.0, 255.0, 255.0]),
        ];
        for (input, expected) in cases {
            let rgb = Hsl::from_array(input).to_rgb();
            assert!(
                rgb.approx_eq(&Rgb::from_array(expected), ALMOST),
                "{:?} -> {:?}",
                input,
                rgb
            );
        }
    }

    #[test]
    fn test_to_hsv() {
        let cases = [
            ([108.0, 86.0, 86.0], [108.0, 24.561, 98.04]),
            ([8.0, 91.0, 85.0], [8.0, 27.673, 98.65]),
            ([0.0, 0.0, 13.0], [0.0, 0.0, 13.0]),
            ([20.0, 75.0, 100.0], [0.0, 0.0, 100.0]),
        ];
        for (input, expected) in cases {
            let hsv = Hsl::from_array(input).to_hsv();
            assert!(
                hsv.approx_eq(&Hsv::from_array(expected), ALMOST),
                "{:?} -> {:?}",
                input,
                hsv
            );
        }
    }

    #[test]
    fn test_to_lab() {
        let cases = [
            ([108.0, 86.0, 86.0], [93.636, -26.738, 24.46]),
            ([8.0, 91.0, 85.0], [82.565, 20.364, 13.08]),
            ([0.0, 0.0, 13.0], [12.813, 0.001, -0.002]),
            ([20.0, 75.0, 100.0], [100.0, 0.005, -0.0104]),
        ];
        for (input, expected) in cases {
            let lab = Hsl::from_array(input).to_lab();
            assert!(
                lab.approx_eq(&Lab::from_array(expected), ALMOST),
                "{:?} -> {:?}",
                input,
                lab
            );
        }
    }

    #[test]
    fn test_to_xyz() {
        let cases = [
            ([108.0, 86.0, 86.0], [67.382, 84.429, 60.66]),
            ([8.0, 91.0, 85.0], [67.102, 61.347, 52.529]),
            ([0.0, 0.0, 13.0], [1.456, 1.532, 1.668]),
            ([20.0, 75.0, 100.0], [95.05, 100.0, 108.9]),
        ];
        for (input, expected) in cases {
            let xyz = Hsl::from_array(input).to_xyz();
            assert!(
                xyz.approx_eq(&Xyz::from_array(expected), ALMOST),
                "{:?} -> {:?}",
                input,
                xyz
            );
        }
    }

    #[test]
    fn test_hue_to_rgb_pieces() {
        let (a, b) = (0.2, 0.8);
        assert!((hue_to_rgb(a, b, 0.1) - (a + (b - a) * 0.6)).abs() < 1e-12);
        assert_eq!(hue_to_rgb(a, b, 0.3), b);
        assert!((hue_to_rgb(a, b, 0.5) - (a + (b - a) * (2.0 / 3.0 - 0.5) * 6.0)).abs() < 1e-12);
        assert_eq!(hue_to_rgb(a, b, 0.9), a);
        // wraps once in either direction
        assert_eq!(hue_to_rgb(a, b, -0.7), hue_to_rgb(a, b, 0.3));
        assert_eq!(hue_to_rgb(a, b, 1.3), hue_to_rgb(a, b, 0.3));
    }
}
