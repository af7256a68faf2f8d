//! sRGB transfer function
//!
//! Elementwise codec between gamma-encoded sRGB channels and linear light.
//! Both directions are total over all reals and never clamp: negative inputs
//! fall into the linear segment, values above 1.0 follow the power segment.

/// Encoded-domain breakpoint of the sRGB curve (IEC 61966-2-1)
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear-domain breakpoint of the sRGB curve (IEC 61966-2-1)
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded channel to linear light.
/// Uses the IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= DECODE_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts a linear-light channel to sRGB encoding.
/// Uses the IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= ENCODE_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Decode three channels at once
#[inline]
pub fn srgb_gamma_decode3(encoded: [f64; 3]) -> [f64; 3] {
    encoded.map(srgb_gamma_decode)
}

/// Encode three channels at once
#[inline]
pub fn srgb_gamma_encode3(linear: [f64; 3]) -> [f64; 3] {
    linear.map(srgb_gamma_encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_srgb_roundtrip() {
        for i in 0..=255 {
            let encoded = i as f64 / 255.0;
            let linear = srgb_gamma_decode(encoded);
            let roundtrip = srgb_gamma_encode(linear);
            assert!(
                (roundtrip - encoded).abs() < 1e-10,
                "sRGB roundtrip failed at {}",
                i
            );
        }
    }

    #[test]
    fn test_srgb_known_values() {
        // Black stays black
        assert!((srgb_gamma_decode(0.0) - 0.0).abs() < EPSILON);
        // White stays white
        assert!((srgb_gamma_decode(1.0) - 1.0).abs() < EPSILON);

        // Mid-gray: 0.5 encoded → ~0.214 linear
        let mid = srgb_gamma_decode(0.5);
        assert!(mid > 0.21 && mid < 0.22, "Mid-gray decode: {}", mid);

        // Breakpoint is inclusive on the linear side
        assert_eq!(srgb_gamma_decode(0.04045), 0.04045 / 12.92);
        assert_eq!(srgb_gamma_encode(0.0031308), 0.0031308 * 12.92);
    }

    #[test]
    fn test_decode_continuous_at_breakpoint() {
        let below = srgb_gamma_decode(0.04045);
        let above = srgb_gamma_decode(0.040450001);
        assert!((below - above).abs() < 1e-4, "{} vs {}", below, above);
    }

    #[test]
    fn test_encode_continuous_at_breakpoint() {
        let below = srgb_gamma_encode(0.0031308);
        let above = srgb_gamma_encode(0.0031308001);
        assert!((below - above).abs() < 1e-4, "{} vs {}", below, above);
    }

    #[test]
    fn test_negative_inputs_use_linear_segment() {
        assert_eq!(srgb_gamma_decode(-0.5), -0.5 / 12.92);
        assert_eq!(srgb_gamma_encode(-0.25), -0.25 * 12.92);
    }

    #[test]
    fn test_no_clamping_above_one() {
        assert!(srgb_gamma_decode(1.5) > 1.0);
        assert!(srgb_gamma_encode(2.0) > 1.0);
    }

    #[test]
    fn test_three_channel_helpers() {
        let lin = srgb_gamma_decode3([0.0, 0.5, 1.0]);
        assert_eq!(lin[1], srgb_gamma_decode(0.5));
        let enc = srgb_gamma_encode3(lin);
        assert!((enc[1] - 0.5).abs() < EPSILON);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decode_then_encode_is_identity(c in -1.0_f64..=2.0) {
                let back = srgb_gamma_encode(srgb_gamma_decode(c));
                prop_assert!((back - c).abs() < 1e-7, "{} vs {}", back, c);
            }

            #[test]
            fn decode_preserves_unit_range(c in 0.0_f64..=1.0) {
                let linear = srgb_gamma_decode(c);
                prop_assert!((0.0..=1.0 + 1e-12).contains(&linear), "{}", linear);
                prop_assert!(linear <= c + 1e-12);
            }
        }
    }
}
