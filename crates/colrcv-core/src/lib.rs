//! # colrcv - Colour Model Conversions
//!
//! Closed-form conversions between five colour models:
//!
//! - **RGB**: device red/green/blue, channels 0-255
//! - **HSV**: hue/saturation/value
//! - **HSL**: hue/saturation/lightness
//! - **CIE-XYZ**: device-independent tristimulus values (2° observer, D65)
//! - **CIE-L\*a\*b\***: perceptual lightness and opponent axes
//!
//! RGB is the hub: HSV and HSL only ever convert through it. XYZ converts
//! directly to RGB and LAB, and LAB only converts directly to XYZ. Every
//! other pair is composed through at most two intermediate models.
//!
//! Conversions are total functions. They accept out-of-range input and
//! compute anyway; use the `is_valid`/`clamp` family to police values at
//! the boundary.
//!
//! ## Quick Start
//!
//! ```
//! use colrcv_core::{Color, ColorModel, Hsl, Rgb};
//!
//! let rgb = Hsl::new(108.0, 86.0, 86.0).to_rgb();
//! assert!((rgb.g - 250.002).abs() < 0.001);
//!
//! // Dynamic dispatch when the models are only known at runtime
//! let target: ColorModel = "lab".parse().unwrap();
//! let lab = Color::from(Rgb::new(33.0, 33.0, 33.0)).convert(target);
//! assert_eq!(lab.model(), ColorModel::Lab);
//! ```

pub mod color;
pub mod error;
pub mod math;
pub mod model;

pub use color::{ColorSpace, Hsl, Hsv, Lab, Rgb, WhitePoint, Xyz, D65};
pub use error::{Error, Result};
pub use model::{Color, ColorModel};

/// A version of colrcv in `MAJOR.MINOR.PATCH` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    /// Major version number
    pub major: u16,
    /// Minor version number
    pub minor: u16,
    /// Patch version number
    pub patch: u16,
    /// String form of the version (`vX.Y.Z`)
    pub string: &'static str,
}

/// Version of colrcv
pub const VERSION: Version = Version {
    major: parse_version_part(env!("CARGO_PKG_VERSION_MAJOR")),
    minor: parse_version_part(env!("CARGO_PKG_VERSION_MINOR")),
    patch: parse_version_part(env!("CARGO_PKG_VERSION_PATCH")),
    string: concat!("v", env!("CARGO_PKG_VERSION")),
};

const fn parse_version_part(digits: &str) -> u16 {
    let bytes = digits.as_bytes();
    let mut value: u16 = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u16;
        i += 1;
    }
    value
}
