//! Conversions between the canonical composition space and HDR10.
//!
//! The canonical composition space (CCCS) is linear Rec.709 with
//! 1.0 = 80 nits, stored fp16, so its representable range tops out
//! around 5M nits. The HDR10 wire format is PQ-encoded Rec.2020 where
//! code 1.0 = 10,000 nits. The bridge between the two is a fixed scale
//! of 125 (= 10,000 / 80) plus a primaries rotation.

use crate::context::CCCS_REFERENCE_WHITE_NITS;
use hdrpipe_math::Vec3;
use hdrpipe_primaries::matrices::{MAT_2020_TO_709, MAT_709_TO_2020};
use hdrpipe_transfer::pq;

/// CCCS units per unit of normalized PQ domain (10,000 / 80).
pub const CCCS_PER_PQ_UNIT: f32 = pq::MAX_NITS / CCCS_REFERENCE_WHITE_NITS;

/// Converts a luminance in nits to composition-space units.
#[inline]
pub fn nits_to_cccs(nits: f32) -> f32 {
    nits / CCCS_REFERENCE_WHITE_NITS
}

/// Encodes a linear Rec.709 composition-space sample as HDR10.
///
/// Rotates to Rec.2020, rescales 1.0 = 80 nits to 1.0 = 10,000 nits,
/// clamps to the PQ domain, and applies the PQ curve. The clamp caps
/// over-range fp16 content at the 10,000 nit code ceiling rather than
/// letting the encode run out of domain.
#[inline]
pub fn linear709_to_hdr10(rgb: Vec3) -> Vec3 {
    let rec2020 = MAT_709_TO_2020 * rgb;
    pq::oetf_rgb((rec2020 / CCCS_PER_PQ_UNIT).clamp01())
}

/// Decodes an HDR10 sample back to linear Rec.709 composition space.
///
/// Exact inverse of [`linear709_to_hdr10`] for in-range values.
#[inline]
pub fn hdr10_to_linear709(rgb: Vec3) -> Vec3 {
    let linear2020 = pq::eotf_rgb(rgb) * CCCS_PER_PQ_UNIT;
    MAT_2020_TO_709 * linear2020
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mid_gray_roundtrip() {
        let gray = Vec3::splat(0.18);
        let back = hdr10_to_linear709(linear709_to_hdr10(gray));
        // Within 1%: the rotation pair and PQ both contribute error.
        assert_relative_eq!(back.x, 0.18, max_relative = 0.01);
        assert_relative_eq!(back.y, 0.18, max_relative = 0.01);
        assert_relative_eq!(back.z, 0.18, max_relative = 0.01);
    }

    #[test]
    fn test_reference_white_code_value() {
        // 80 nits (CCCS 1.0) lands near PQ code 0.508.
        let encoded = linear709_to_hdr10(Vec3::ONE);
        assert_relative_eq!(encoded.y, 0.508, epsilon = 2e-3);
    }

    #[test]
    fn test_over_range_clamps_to_max_code() {
        // fp16 peak white is far past 10,000 nits; the encode saturates.
        let encoded = linear709_to_hdr10(Vec3::splat(65504.0));
        assert_relative_eq!(encoded.x, 1.0, epsilon = 1e-4);
        assert!(encoded.x <= 1.0);
    }

    #[test]
    fn test_nits_scale() {
        assert_eq!(nits_to_cccs(80.0), 1.0);
        assert_eq!(nits_to_cccs(10000.0), CCCS_PER_PQ_UNIT);
        assert_eq!(CCCS_PER_PQ_UNIT, 125.0);
    }

    #[test]
    fn test_black_is_black() {
        assert_eq!(linear709_to_hdr10(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(hdr10_to_linear709(Vec3::ZERO), Vec3::ZERO);
    }
}
