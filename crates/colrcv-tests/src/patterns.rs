//! Test pattern generation
//!
//! Deterministic sample sets over RGB and over every colour model.

use colrcv_core::{Color, ColorModel, Hsv, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB colour cube corners (8 colours)
    ColorCube,
    /// Greyscale ramp 0-255
    Grayscale,
    /// Hue ramp at full saturation and value
    HueRamp,
    /// Saturated colours near the gamut boundary
    GamutBoundary,
    /// Uniform random RGB with seed
    Random(u64),
}

/// Generate `count` RGB samples for a pattern
pub fn generate_rgb(pattern: TestPattern, count: usize) -> Vec<Rgb> {
    match pattern {
        TestPattern::ColorCube => {
            let corners: [[f64; 3]; 8] = [
                [0.0, 0.0, 0.0],
                [255.0, 0.0, 0.0],
                [0.0, 255.0, 0.0],
                [0.0, 0.0, 255.0],
                [255.0, 255.0, 0.0],
                [255.0, 0.0, 255.0],
                [0.0, 255.0, 255.0],
                [255.0, 255.0, 255.0],
            ];
            (0..count).map(|i| Rgb::from_array(corners[i % 8])).collect()
        }
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = if count > 1 {
                    i as f64 / (count - 1) as f64 * Rgb::MAX
                } else {
                    0.0
                };
                Rgb::new(v, v, v)
            })
            .collect(),
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = i as f64 / count as f64 * 360.0;
                Hsv::new(hue, 100.0, 100.0).to_rgb()
            })
            .collect(),
        TestPattern::GamutBoundary => {
            let colors: [[f64; 3]; 8] = [
                [255.0, 0.0, 0.0],
                [0.0, 255.0, 0.0],
                [0.0, 0.0, 255.0],
                [255.0, 255.0, 0.0],
                [255.0, 0.0, 255.0],
                [0.0, 255.0, 255.0],
                [255.0, 128.0, 0.0],
                [128.0, 0.0, 255.0],
            ];
            (0..count).map(|i| Rgb::from_array(colors[i % 8])).collect()
        }
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    Rgb::new(
                        rng.gen_range(Rgb::MIN..=Rgb::MAX),
                        rng.gen_range(Rgb::MIN..=Rgb::MAX),
                        rng.gen_range(Rgb::MIN..=Rgb::MAX),
                    )
                })
                .collect()
        }
    }
}

/// Random colours of `model` with every channel inside its valid range
pub fn random_valid(model: ColorModel, seed: u64, count: usize) -> Vec<Color> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ranges = model.channel_ranges();
    (0..count)
        .map(|_| Color::new(model, ranges.map(|(lo, hi)| rng.gen_range(lo..=hi))))
        .collect()
}

/// Random finite colours of `model`, frequently outside the valid range
///
/// Each channel spans three times its range, centred on the range.
pub fn random_wide(model: ColorModel, seed: u64, count: usize) -> Vec<Color> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ranges = model.channel_ranges();
    (0..count)
        .map(|_| {
            let channels = ranges.map(|(lo, hi)| {
                let span = hi - lo;
                rng.gen_range(lo - span..=hi + span)
            });
            Color::new(model, channels)
        })
        .collect()
}
