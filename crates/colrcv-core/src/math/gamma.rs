//! sRGB transfer functions (IEC 61966-2-1)
//!
//! Both operate on values normalised to [0, 1]. Neither clamps: values
//! outside the unit range follow the same branches.

/// sRGB gamma decode (encoded → linear)
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded > 0.04045 {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// sRGB gamma encode (linear → encoded)
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear > 0.0031308 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_endpoints() {
        assert!(srgb_gamma_decode(0.0).abs() < EPSILON);
        assert!((srgb_gamma_decode(1.0) - 1.0).abs() < EPSILON);
        assert!(srgb_gamma_encode(0.0).abs() < EPSILON);
        assert!((srgb_gamma_encode(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_linear_segment() {
        assert!((srgb_gamma_decode(0.04) - 0.04 / 12.92).abs() < EPSILON);
        assert!((srgb_gamma_encode(0.003) - 0.003 * 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let rt = srgb_gamma_encode(srgb_gamma_decode(v));
            assert!((rt - v).abs() < 1e-6, "{} -> {}", v, rt);
        }
    }

    #[test]
    fn test_negative_passes_through_linear_segment() {
        assert!((srgb_gamma_encode(-0.1) - (-1.292)).abs() < EPSILON);
    }
}
