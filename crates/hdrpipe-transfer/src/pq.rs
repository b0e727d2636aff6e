//! SMPTE ST.2084 Perceptual Quantizer (PQ) transfer function.
//!
//! PQ is the absolute-luminance HDR10 curve. This module works on the
//! normalized domain the wire format uses: a linear value of 1.0 means
//! 10,000 cd/m2, and the encoded code value spans [0, 1].
//!
//! # Range
//!
//! - Linear: [0, 1] where 1.0 = 10,000 cd/m2
//! - Encoded: [0, 1]
//!
//! # Reference
//!
//! SMPTE ST 2084:2014
//!
//! # Usage
//!
//! ```rust
//! use hdrpipe_transfer::pq;
//!
//! // Encode 100 nits (100 / 10000 = 0.01)
//! let code = pq::oetf(0.01);
//! assert!((code - 0.508).abs() < 0.01);
//!
//! // And decode back
//! let ratio = pq::eotf(code);
//! assert!((ratio - 0.01).abs() < 1e-5);
//! ```

use hdrpipe_math::Vec3;

/// Luminance represented by a linear value of 1.0, in cd/m2.
pub const MAX_NITS: f32 = 10000.0;

// ST 2084 constants, kept as the exact published rationals.
const M1: f32 = 2610.0 / 16384.0;
const M2: f32 = 2523.0 / 4096.0 * 128.0;
const C1: f32 = 3424.0 / 4096.0;
const C2: f32 = 2413.0 / 128.0;
const C3: f32 = 2392.0 / 128.0;

/// PQ OETF: Encodes a linear luminance ratio to a PQ code value.
///
/// # Arguments
///
/// * `l` - Linear luminance ratio [0, 1], where 1.0 = 10,000 cd/m2.
///
/// # Formula
///
/// ```text
/// PQ(L) = ((c1 + c2 * L^m1) / (1 + c3 * L^m1))^m2
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0 {
        return 0.0;
    }
    let lp = l.clamp(0.0, 1.0).powf(M1);
    ((C1 + C2 * lp) / (1.0 + C3 * lp)).powf(M2)
}

/// PQ EOTF: Decodes a PQ code value to a linear luminance ratio.
///
/// The intermediate numerator is clamped to >= 0 before the final
/// fractional power; without the clamp, float round-off just below the
/// black code value produces NaN.
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.0 {
        return 0.0;
    }
    let vp = v.powf(1.0 / M2);
    let num = (vp - C1).max(0.0);
    (num / (C2 - C3 * vp)).powf(1.0 / M1)
}

/// Encodes an absolute luminance in cd/m2 to a PQ code value.
#[inline]
pub fn oetf_nits(nits: f32) -> f32 {
    oetf(nits / MAX_NITS)
}

/// Decodes a PQ code value to absolute luminance in cd/m2.
#[inline]
pub fn eotf_nits(v: f32) -> f32 {
    eotf(v) * MAX_NITS
}

/// Applies the PQ OETF per channel.
#[inline]
pub fn oetf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(oetf)
}

/// Applies the PQ EOTF per channel.
#[inline]
pub fn eotf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf)
}

/// Decodes each channel to absolute luminance in cd/m2.
#[inline]
pub fn eotf_nits_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf_nits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let l = i as f32 / 1000.0;
            let back = eotf(oetf(l));
            assert!((l - back).abs() < 1e-5, "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_domain_boundaries() {
        // Black round-trips exactly, and full scale encodes to a finite
        // maximum code value.
        assert_eq!(eotf(oetf(0.0)), 0.0);
        let max_code = oetf(1.0);
        assert!(max_code.is_finite());
        assert!((max_code - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_nan_near_black() {
        // Code values just above zero decode through the clamped
        // numerator path without producing NaN.
        for &v in &[1e-7, 1e-5, 1e-3, 0.01] {
            let l = eotf(v);
            assert!(l.is_finite() && l >= 0.0, "eotf({}) = {}", v, l);
        }
    }

    #[test]
    fn test_reference_white() {
        // 100 nits sits near code value 0.508.
        assert!((oetf_nits(100.0) - 0.508).abs() < 0.01);
        assert!((eotf_nits(0.508) - 100.0).abs() < 1.0);
    }
}
