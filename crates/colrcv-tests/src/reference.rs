//! Reference implementation wrappers
//!
//! Calls `palette` and rescales its results to colrcv's channel scales:
//! RGB 0-255, saturation/value/lightness 0-100, XYZ with Y = 100.
//!
//! All conversions are unclamped, so out-of-gamut results are returned
//! as computed.

use colrcv_core::{Color, ColorModel};
use palette::convert::{FromColorUnclamped, IntoColorUnclamped};
use palette::encoding::Srgb as SrgbEncoding;
use palette::white_point::D65;

type PRgb = palette::Srgb<f64>;
type PHsv = palette::Hsv<SrgbEncoding, f64>;
type PHsl = palette::Hsl<SrgbEncoding, f64>;
type PXyz = palette::Xyz<D65, f64>;
type PLab = palette::Lab<D65, f64>;

fn to_palette_rgb(rgb: [f64; 3]) -> PRgb {
    PRgb::new(rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0)
}

fn from_palette_rgb(rgb: PRgb) -> [f64; 3] {
    [rgb.red * 255.0, rgb.green * 255.0, rgb.blue * 255.0]
}

fn from_palette_hsv(hsv: PHsv) -> [f64; 3] {
    [
        hsv.hue.into_positive_degrees(),
        hsv.saturation * 100.0,
        hsv.value * 100.0,
    ]
}

fn from_palette_hsl(hsl: PHsl) -> [f64; 3] {
    [
        hsl.hue.into_positive_degrees(),
        hsl.saturation * 100.0,
        hsl.lightness * 100.0,
    ]
}

fn from_palette_xyz(xyz: PXyz) -> [f64; 3] {
    [xyz.x * 100.0, xyz.y * 100.0, xyz.z * 100.0]
}

fn from_palette_lab(lab: PLab) -> [f64; 3] {
    [lab.l, lab.a, lab.b]
}

/// Convert an RGB triple (0-255) to `target` with palette
pub fn rgb_to(target: ColorModel, rgb: [f64; 3]) -> [f64; 3] {
    let src = to_palette_rgb(rgb);
    match target {
        ColorModel::Rgb => rgb,
        ColorModel::Hsv => from_palette_hsv(PHsv::from_color_unclamped(src)),
        ColorModel::Hsl => from_palette_hsl(PHsl::from_color_unclamped(src)),
        ColorModel::Xyz => from_palette_xyz(PXyz::from_color_unclamped(src)),
        ColorModel::Lab => from_palette_lab(PLab::from_color_unclamped(src)),
    }
}

/// Convert a colour to RGB (0-255) with palette
pub fn to_rgb(color: Color) -> [f64; 3] {
    let [a, b, c] = color.to_array();
    let rgb: PRgb = match color.model() {
        ColorModel::Rgb => return [a, b, c],
        ColorModel::Hsv => PHsv::new(a, b / 100.0, c / 100.0).into_color_unclamped(),
        ColorModel::Hsl => PHsl::new(a, b / 100.0, c / 100.0).into_color_unclamped(),
        ColorModel::Xyz => PXyz::new(a / 100.0, b / 100.0, c / 100.0).into_color_unclamped(),
        ColorModel::Lab => PLab::new(a, b, c).into_color_unclamped(),
    };
    from_palette_rgb(rgb)
}

/// Convert CIE-L\*a\*b\* to XYZ (Y = 100) with palette
pub fn lab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    from_palette_xyz(PLab::new(lab[0], lab[1], lab[2]).into_color_unclamped())
}

/// Convert XYZ (Y = 100) to CIE-L\*a\*b\* with palette
pub fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let xyz = PXyz::new(xyz[0] / 100.0, xyz[1] / 100.0, xyz[2] / 100.0);
    from_palette_lab(xyz.into_color_unclamped())
}
