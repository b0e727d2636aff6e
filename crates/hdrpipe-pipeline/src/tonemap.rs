//! Peak-limiting tone mapping.
//!
//! The policy here is a knee'd linear limiter. Values below the knee
//! (70% of the target peak) pass through untouched; values between the
//! knee and the declared content peak are compressed linearly so the
//! content peak lands exactly on the target peak. When the content
//! already fits under the target, the curve is the identity.
//!
//! Contract (tested, in order of importance):
//!
//! 1. output peak never exceeds the target peak
//! 2. the curve is monotonically non-decreasing
//! 3. identity when `content_peak <= target_peak`
//! 4. values below the knee are bit-exact unchanged
//!
//! Fancier roll-offs (Reinhard, BT.2390) trade highlight detail
//! differently but share this contract; swapping the curve must not
//! change any caller.

use hdrpipe_core::Image;
use hdrpipe_math::Vec3;

/// Fraction of the target peak below which values pass unchanged.
pub const KNEE_RATIO: f32 = 0.7;

/// Relative peak difference above which local tone mapping engages.
///
/// Below this, content and display are close enough that passing
/// metadata downstream is preferred over touching pixels.
pub const PEAK_DIFFERENCE_THRESHOLD: f32 = 0.1;

/// Whether the content/display peak mismatch is big enough to act on.
///
/// A non-positive target peak (dead or unreported display capability)
/// counts as a mismatch for any lit content; the relative form would
/// divide by it.
#[inline]
pub fn needs_tone_map(content_peak: f32, target_peak: f32) -> bool {
    if target_peak <= 0.0 {
        return content_peak > 0.0;
    }
    (content_peak - target_peak).abs() / target_peak > PEAK_DIFFERENCE_THRESHOLD
}

/// Tone-maps a single channel value.
///
/// `content_peak` is the declared peak of the content, `target_peak`
/// the largest value the destination can carry, both in the same units
/// as `v`. Samples above the declared peak are clipped to the target.
pub fn tone_map(v: f32, content_peak: f32, target_peak: f32) -> f32 {
    if content_peak <= target_peak || content_peak <= 0.0 {
        return v;
    }
    let knee = KNEE_RATIO * target_peak;
    if v <= knee {
        v
    } else {
        let compressed = knee + (v - knee) * (target_peak - knee) / (content_peak - knee);
        compressed.min(target_peak)
    }
}

/// Tone-maps all three channels of a sample.
#[inline]
pub fn tone_map_rgb(rgb: Vec3, content_peak: f32, target_peak: f32) -> Vec3 {
    rgb.map(|c| tone_map(c, content_peak, target_peak))
}

/// Tone-maps every sample of an image.
pub fn tone_map_image(image: &Image, content_peak: f32, target_peak: f32) -> Image {
    if content_peak <= target_peak || content_peak <= 0.0 {
        return image.clone();
    }
    image.par_map(|s| tone_map_rgb(s, content_peak, target_peak))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_when_content_fits() {
        for v in [0.0, 0.3, 0.9, 1.0] {
            assert_eq!(tone_map(v, 1.0, 1.0), v);
            assert_eq!(tone_map(v, 0.5, 1.0), v);
        }
    }

    #[test]
    fn test_peak_maps_to_target() {
        let out = tone_map(4000.0, 4000.0, 1000.0);
        assert_relative_eq!(out, 1000.0, epsilon = 1e-2);
    }

    #[test]
    fn test_output_never_exceeds_target() {
        for v in [0.0, 500.0, 700.0, 1000.0, 3999.0, 4000.0, 5000.0] {
            assert!(tone_map(v, 4000.0, 1000.0) <= 1000.0);
        }
    }

    #[test]
    fn test_below_knee_unchanged() {
        let knee = KNEE_RATIO * 1000.0;
        assert_eq!(tone_map(knee - 1.0, 4000.0, 1000.0), knee - 1.0);
        assert_eq!(tone_map(knee, 4000.0, 1000.0), knee);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = f32::MIN;
        for i in 0..=500 {
            let v = i as f32 * 10.0;
            let out = tone_map(v, 4000.0, 1000.0);
            assert!(out >= prev, "not monotonic at {}", v);
            prev = out;
        }
    }

    #[test]
    fn test_threshold_decision() {
        assert!(!needs_tone_map(1000.0, 1000.0));
        assert!(!needs_tone_map(1050.0, 1000.0));
        assert!(needs_tone_map(1200.0, 1000.0));
        assert!(needs_tone_map(500.0, 1000.0));
    }

    #[test]
    fn test_threshold_decision_zero_target() {
        // No NaN comparison when the display reports no peak.
        assert!(needs_tone_map(100.0, 0.0));
        assert!(!needs_tone_map(0.0, 0.0));
        assert!(needs_tone_map(100.0, -1.0));
    }

    #[test]
    fn test_image_peak_limited() {
        let img = Image::splat(Vec3::new(4000.0, 700.0, 100.0));
        let mapped = tone_map_image(&img, 4000.0, 1000.0);
        assert!(mapped.peak() <= 1000.0);
        // Below-knee channel untouched.
        assert_eq!(mapped.sample(0, 0).unwrap().z, 100.0);
    }
}
