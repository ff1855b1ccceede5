//! Numeric building blocks shared by every colour model
//!
//! - Closed-interval range checks and clamping
//! - sRGB transfer functions
//! - 3x3 matrices for RGB↔XYZ

pub mod gamma;
pub mod matrix;
pub mod range;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB};
pub use range::{clamp, max, min, range_valid};
