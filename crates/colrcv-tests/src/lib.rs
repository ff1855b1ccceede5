//! # colrcv-tests
//!
//! Accuracy testing framework for colrcv.
//!
//! This crate provides:
//! - Known-value fixtures for every conversion pair
//! - Property tests over seeded random inputs
//! - Parity tests comparing colrcv against `palette`
//!
//! ## Reference Implementation
//!
//! - **palette**: pure Rust colour library with the same sRGB, HSV, HSL,
//!   XYZ and L\*a\*b\* definitions (exact matrices and transfer constants,
//!   so small numeric differences are expected)

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{ALMOST, ChannelStats, almost_equal, hue_distance};
pub use fixtures::{Fixture, load_fixtures};
