//! Runtime-selected conversions
//!
//! [`ColorModel`] names a model and [`Color`] holds a value of any model.
//! [`Color::convert`] is the dispatch table over every (source, target)
//! pair, for callers that only learn the models at runtime.

use crate::color::{Hsl, Hsv, Lab, Rgb, Xyz};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// One of the five supported colour models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorModel {
    Rgb,
    Hsv,
    Hsl,
    Lab,
    Xyz,
}

impl ColorModel {
    /// All models, in declaration order
    pub const ALL: [ColorModel; 5] = [
        ColorModel::Rgb,
        ColorModel::Hsv,
        ColorModel::Hsl,
        ColorModel::Lab,
        ColorModel::Xyz,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorModel::Rgb => "rgb",
            ColorModel::Hsv => "hsv",
            ColorModel::Hsl => "hsl",
            ColorModel::Lab => "lab",
            ColorModel::Xyz => "xyz",
        }
    }

    /// Channel names in declaration order
    pub fn channels(&self) -> [char; 3] {
        match self {
            ColorModel::Rgb => ['r', 'g', 'b'],
            ColorModel::Hsv => ['h', 's', 'v'],
            ColorModel::Hsl => ['h', 's', 'l'],
            ColorModel::Lab => ['l', 'a', 'b'],
            ColorModel::Xyz => ['x', 'y', 'z'],
        }
    }

    /// Closed `(min, max)` range of each channel
    pub fn channel_ranges(&self) -> [(f64, f64); 3] {
        match self {
            ColorModel::Rgb => [(Rgb::MIN, Rgb::MAX); 3],
            ColorModel::Hsv => [
                (Hsv::MIN, Hsv::H_MAX),
                (Hsv::MIN, Hsv::S_MAX),
                (Hsv::MIN, Hsv::V_MAX),
            ],
            ColorModel::Hsl => [
                (Hsl::MIN, Hsl::H_MAX),
                (Hsl::MIN, Hsl::S_MAX),
                (Hsl::MIN, Hsl::L_MAX),
            ],
            ColorModel::Lab => [
                (Lab::L_MIN, Lab::MAX),
                (Lab::A_MIN, Lab::MAX),
                (Lab::B_MIN, Lab::MAX),
            ],
            ColorModel::Xyz => [
                (Xyz::MIN, Xyz::X_MAX),
                (Xyz::MIN, Xyz::Y_MAX),
                (Xyz::MIN, Xyz::Z_MAX),
            ],
        }
    }

    /// Intermediate models a conversion to `target` passes through
    ///
    /// Empty for identity and for the pairs with a direct formula
    /// (RGB↔HSV, RGB↔HSL, RGB↔XYZ, XYZ↔LAB). Never longer than two.
    pub fn route(&self, target: ColorModel) -> &'static [ColorModel] {
        use ColorModel as M;

        match (*self, target) {
            (M::Rgb, M::Lab) | (M::Lab, M::Rgb) => &[M::Xyz],
            (M::Hsv, M::Lab) | (M::Hsl, M::Lab) => &[M::Rgb, M::Xyz],
            (M::Lab, M::Hsv) | (M::Lab, M::Hsl) => &[M::Xyz, M::Rgb],
            (M::Hsv, M::Hsl) | (M::Hsl, M::Hsv) => &[M::Rgb],
            (M::Hsv, M::Xyz) | (M::Hsl, M::Xyz) | (M::Xyz, M::Hsv) | (M::Xyz, M::Hsl) => &[M::Rgb],
            _ => &[],
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rgb" => Ok(ColorModel::Rgb),
            "hsv" => Ok(ColorModel::Hsv),
            "hsl" => Ok(ColorModel::Hsl),
            "lab" | "cielab" | "cie-lab" => Ok(ColorModel::Lab),
            "xyz" | "ciexyz" | "cie-xyz" => Ok(ColorModel::Xyz),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

/// A colour value in any of the supported models
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "model", rename_all = "lowercase")
)]
pub enum Color {
    Rgb(Rgb),
    Hsv(Hsv),
    Hsl(Hsl),
    Lab(Lab),
    Xyz(Xyz),
}

impl Color {
    /// Build a colour of `model` from channel values in declaration order
    pub fn new(model: ColorModel, channels: [f64; 3]) -> Self {
        match model {
            ColorModel::Rgb => Color::Rgb(Rgb::from_array(channels)),
            ColorModel::Hsv => Color::Hsv(Hsv::from_array(channels)),
            ColorModel::Hsl => Color::Hsl(Hsl::from_array(channels)),
            ColorModel::Lab => Color::Lab(Lab::from_array(channels)),
            ColorModel::Xyz => Color::Xyz(Xyz::from_array(channels)),
        }
    }

    /// Build a colour from a slice that must hold exactly three channels
    pub fn from_slice(model: ColorModel, channels: &[f64]) -> Result<Self> {
        let arr: [f64; 3] = channels.try_into().map_err(|_| Error::ChannelCount {
            expected: 3,
            actual: channels.len(),
        })?;
        Ok(Self::new(model, arr))
    }

    pub fn model(&self) -> ColorModel {
        match self {
            Color::Rgb(_) => ColorModel::Rgb,
            Color::Hsv(_) => ColorModel::Hsv,
            Color::Hsl(_) => ColorModel::Hsl,
            Color::Lab(_) => ColorModel::Lab,
            Color::Xyz(_) => ColorModel::Xyz,
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        match self {
            Color::Rgb(c) => c.to_array(),
            Color::Hsv(c) => c.to_array(),
            Color::Hsl(c) => c.to_array(),
            Color::Lab(c) => c.to_array(),
            Color::Xyz(c) => c.to_array(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Color::Rgb(c) => c.is_valid(),
            Color::Hsv(c) => c.is_valid(),
            Color::Hsl(c) => c.is_valid(),
            Color::Lab(c) => c.is_valid(),
            Color::Xyz(c) => c.is_valid(),
        }
    }

    pub fn clamp(&self) -> Self {
        match self {
            Color::Rgb(c) => Color::Rgb(c.clamp()),
            Color::Hsv(c) => Color::Hsv(c.clamp()),
            Color::Hsl(c) => Color::Hsl(c.clamp()),
            Color::Lab(c) => Color::Lab(c.clamp()),
            Color::Xyz(c) => Color::Xyz(c.clamp()),
        }
    }

    /// Convert to `target`, composing through intermediates where needed
    pub fn convert(&self, target: ColorModel) -> Color {
        tracing::trace!(from = %self.model(), to = %target, "convert");

        match (*self, target) {
            (Color::Rgb(c), ColorModel::Rgb) => Color::Rgb(c),
            (Color::Rgb(c), ColorModel::Hsv) => Color::Hsv(c.to_hsv()),
            (Color::Rgb(c), ColorModel::Hsl) => Color::Hsl(c.to_hsl()),
            (Color::Rgb(c), ColorModel::Lab) => Color::Lab(c.to_lab()),
            (Color::Rgb(c), ColorModel::Xyz) => Color::Xyz(c.to_xyz()),

            (Color::Hsv(c), ColorModel::Rgb) => Color::Rgb(c.to_rgb()),
            (Color::Hsv(c), ColorModel::Hsv) => Color::Hsv(c),
            (Color::Hsv(c), ColorModel::Hsl) => Color::Hsl(c.to_hsl()),
            (Color::Hsv(c), ColorModel::Lab) => Color::Lab(c.to_lab()),
            (Color::Hsv(c), ColorModel::Xyz) => Color::Xyz(c.to_xyz()),

            (Color::Hsl(c), ColorModel::Rgb) => Color::Rgb(c.to_rgb()),
            (Color::Hsl(c), ColorModel::Hsv) => Color::Hsv(c.to_hsv()),
            (Color::Hsl(c), ColorModel::Hsl) => Color::Hsl(c),
            (Color::Hsl(c), ColorModel::Lab) => Color::Lab(c.to_lab()),
            (Color::Hsl(c), ColorModel::Xyz) => Color::Xyz(c.to_xyz()),

            (Color::Lab(c), ColorModel::Rgb) => Color::Rgb(c.to_rgb()),
            (Color::Lab(c), ColorModel::Hsv) => Color::Hsv(c.to_hsv()),
            (Color::Lab(c), ColorModel::Hsl) => Color::Hsl(c.to_hsl()),
            (Color::Lab(c), ColorModel::Lab) => Color::Lab(c),
            (Color::Lab(c), ColorModel::Xyz) => Color::Xyz(c.to_xyz()),

            (Color::Xyz(c), ColorModel::Rgb) => Color::Rgb(c.to_rgb()),
            (Color::Xyz(c), ColorModel::Hsv) => Color::Hsv(c.to_hsv()),
            (Color::Xyz(c), ColorModel::Hsl) => Color::Hsl(c.to_hsl()),
            (Color::Xyz(c), ColorModel::Lab) => Color::Lab(c.to_lab()),
            (Color::Xyz(c), ColorModel::Xyz) => Color::Xyz(c),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.to_array();
        write!(f, "{}({}, {}, {})", self.model(), a, b, c)
    }
}

macro_rules! impl_color_from {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Color {
                fn from(value: $ty) -> Self {
                    Color::$ty(value)
                }
            }
        )*
    };
}

impl_color_from!(Rgb, Hsv, Hsl, Lab, Xyz);
