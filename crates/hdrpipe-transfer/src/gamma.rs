//! Pure power-law gamma curves.
//!
//! Used as profile stand-ins where a real measured EOTF is not available;
//! the scaler stage applies gamma 4.0 as the panel's profile curve.
//!
//! # Range
//!
//! - Input/Output: [0, 1]

use hdrpipe_math::Vec3;

/// Panel profile exponent used by the scaler stage.
pub const PANEL_GAMMA: f32 = 4.0;

/// EOTF for an arbitrary gamma: `v^gamma`.
#[inline]
pub fn eotf(v: f32, gamma: f32) -> f32 {
    if v <= 0.0 { 0.0 } else { v.powf(gamma) }
}

/// OETF for an arbitrary gamma: `l^(1/gamma)`.
#[inline]
pub fn oetf(l: f32, gamma: f32) -> f32 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / gamma) }
}

/// Applies a gamma EOTF per channel.
#[inline]
pub fn eotf_rgb(rgb: Vec3, gamma: f32) -> Vec3 {
    rgb.map(|c| eotf(c, gamma))
}

/// Applies a gamma OETF per channel.
#[inline]
pub fn oetf_rgb(rgb: Vec3, gamma: f32) -> Vec3 {
    rgb.map(|c| oetf(c, gamma))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let back = oetf(eotf(v, PANEL_GAMMA), PANEL_GAMMA);
            assert!((v - back).abs() < 1e-5);
        }
    }

    #[test]
    fn test_negatives_clamp_to_zero() {
        assert_eq!(eotf(-0.5, 2.2), 0.0);
        assert_eq!(oetf(-0.5, 2.2), 0.0);
    }
}
