//! Accuracy measurement for channel-wise comparisons
//!
//! Colour values are compared per channel against an absolute tolerance.
//! Hue channels wrap, so they are compared by angular distance.

use colrcv_core::ColorModel;

/// Tolerance used by every known-value fixture
pub const ALMOST: f64 = 0.001;

/// Whether two channel values agree within [`ALMOST`]
pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < ALMOST
}

/// Shortest angular distance between two hues in degrees
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Per-channel difference between two channel triples of the same model
///
/// The hue channel of HSV and HSL is measured by [`hue_distance`].
pub fn channel_differences(model: ColorModel, a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    let hue_first = matches!(model, ColorModel::Hsv | ColorModel::Hsl);
    std::array::from_fn(|i| {
        if i == 0 && hue_first {
            hue_distance(a[i], b[i])
        } else {
            (a[i] - b[i]).abs()
        }
    })
}

/// Statistics from a channel-wise comparison
#[derive(Debug, Clone)]
pub struct ChannelStats {
    /// Mean absolute difference per channel
    pub mean: [f64; 3],
    /// Maximum absolute difference per channel
    pub max: [f64; 3],
    /// Number of samples
    pub count: usize,
}

impl ChannelStats {
    /// Accumulate statistics over pairs of channel triples
    pub fn from_pairs<I>(model: ColorModel, pairs: I) -> Self
    where
        I: IntoIterator<Item = ([f64; 3], [f64; 3])>,
    {
        let mut sum = [0.0; 3];
        let mut max = [0.0f64; 3];
        let mut count = 0;

        for (a, b) in pairs {
            let diff = channel_differences(model, a, b);
            for ((s, m), d) in sum.iter_mut().zip(max.iter_mut()).zip(diff) {
                *s += d;
                *m = m.max(d);
            }
            count += 1;
        }

        let mean = if count == 0 {
            [0.0; 3]
        } else {
            sum.map(|s| s / count as f64)
        };

        Self { mean, max, count }
    }

    /// Largest difference over all channels
    pub fn worst(&self) -> f64 {
        self.max.iter().copied().fold(0.0, f64::max)
    }

    /// Check every channel stays within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.worst() < tolerance
    }
}

impl std::fmt::Display for ChannelStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean=[{:.5}, {:.5}, {:.5}] max=[{:.5}, {:.5}, {:.5}]",
            self.count,
            self.mean[0],
            self.mean[1],
            self.mean[2],
            self.max[0],
            self.max[1],
            self.max[2]
        )
    }
}
