//! Fixed reference conversion matrices and luma-chroma transforms.
//!
//! These constants are interchange data, not derived values: systems on
//! both ends of the wire expect exactly these coefficients, so they are
//! reproduced digit-for-digit from the reference tables (Lindbloom for
//! the XYZ forms, the premultiplied rotation pairs for direct gamut
//! hops). Each stored A->B / B->A pair was derived independently and is
//! therefore only an approximate inverse; the conformance tests pin the
//! round-trip error below 1e-3.
//!
//! All matrices are row-major and multiply column vectors, matching
//! [`hdrpipe_math::Mat3`].

use hdrpipe_math::{Mat3, Vec3};

// ============================================================================
// Direct gamut rotations (premultiplied, D65)
// ============================================================================

/// Rec.709 -> Rec.2020 primaries rotation.
pub const MAT_709_TO_2020: Mat3 = Mat3::from_rows([
    [0.6274040, 0.3292820, 0.0433136],
    [0.0690970, 0.9195400, 0.0113612],
    [0.0163916, 0.0880132, 0.8955950],
]);

/// Rec.2020 -> Rec.709 primaries rotation.
pub const MAT_2020_TO_709: Mat3 = Mat3::from_rows([
    [1.660491, -0.587640, -0.0728517],
    [-0.124550, 1.132900, -0.0083480],
    [-0.018151, -0.100579, 1.1187300],
]);

/// Rec.2020 -> DCI-P3 primaries rotation (D65-referenced).
pub const MAT_2020_TO_DCIP3: Mat3 = Mat3::from_rows([
    [1.34357525, -0.28218550, -0.06138975],
    [-0.06529575, 1.07578445, -0.01048870],
    [0.00282219, -0.01960177, 1.01677958],
]);

/// DCI-P3 -> Rec.2020 primaries rotation (D65-referenced).
pub const MAT_DCIP3_TO_2020: Mat3 = Mat3::from_rows([
    [0.75383472, 0.19860256, 0.04756273],
    [0.04574290, 0.94178025, 0.01247684],
    [-0.00121051, 0.01760467, 0.98360584],
]);

/// Rec.709 -> DCI-P3 primaries rotation.
pub const MAT_709_TO_DCIP3: Mat3 = Mat3::from_rows([
    [0.822458, 0.177542, 0.000000],
    [0.033193, 0.966807, 0.000000],
    [0.017085, 0.072410, 0.910505],
]);

/// DCI-P3 -> Rec.709 primaries rotation.
pub const MAT_DCIP3_TO_709: Mat3 = Mat3::from_rows([
    [1.224947, -0.224947, 0.000000],
    [-0.042056, 1.042056, 0.000000],
    [-0.019641, -0.078651, 1.098291],
]);

/// Adobe RGB -> Rec.2020 primaries rotation.
pub const MAT_ADOBE_TO_2020: Mat3 = Mat3::from_rows([
    [0.87733865, 0.07749581, 0.04516554],
    [0.09662091, 0.89153109, 0.01184800],
    [0.02292443, 0.04304395, 0.93403162],
]);

/// Rec.2020 -> Adobe RGB primaries rotation.
pub const MAT_2020_TO_ADOBE: Mat3 = Mat3::from_rows([
    [1.15197208, -0.09750475, -0.05446733],
    [-0.12454710, 1.13289511, -0.00834801],
    [-0.02253383, -0.04981527, 1.07234910],
]);

// ============================================================================
// XYZ matrices (Lindbloom)
// ============================================================================

/// XYZ -> Rec.709 RGB (D65).
pub const XYZ_TO_709: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371585, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// XYZ -> Rec.2020 RGB (D65).
pub const XYZ_TO_2020: Mat3 = Mat3::from_rows([
    [1.716650, -0.3556710, -0.2533660],
    [-0.666684, 1.6164800, 0.0157681],
    [0.017640, -0.0427711, 0.9421030],
]);

/// Rec.2020 RGB -> XYZ (D65).
pub const MAT_2020_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.636958, 0.144617, 0.168881],
    [0.262700, 0.677998, 0.059302],
    [0.000000, 0.028073, 1.060985],
]);

/// XYZ -> Adobe RGB (D65).
pub const XYZ_TO_ADOBE: Mat3 = Mat3::from_rows([
    [2.0413690, -0.5649464, -0.3446944],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0134474, -0.1183897, 1.0154096],
]);

/// XYZ -> SMPTE-C RGB (D65).
pub const XYZ_TO_SMPTEC: Mat3 = Mat3::from_rows([
    [3.5053960, -1.7394894, -0.5439640],
    [-1.0690722, 1.9778245, 0.0351722],
    [0.0563200, -0.1970226, 1.0502026],
]);

/// XYZ -> ACES AP0 RGB (D60-referenced).
pub const XYZ_TO_ACES: Mat3 = Mat3::from_rows([
    [1.0498110175, 0.0000000000, -0.0000974845],
    [-0.4959030231, 1.3733130458, 0.0982400361],
    [0.0000000000, 0.0000000000, 0.9912520182],
]);

// ============================================================================
// Luma-chroma transforms
// ============================================================================

/// Chroma zero offset for 8-bit-centered YCbCr/YCoCg signals.
const CHROMA_OFFSET: f32 = 128.0 / 255.0;

/// Converts linear RGB to YCbCr with BT.601 luma coefficients.
///
/// Chroma channels are offset to center on 128/255 as in the 8-bit
/// signal convention.
#[inline]
pub fn rgb_to_ycbcr(rgb: Vec3) -> Vec3 {
    let y = 0.299 * rgb.x + 0.587 * rgb.y + 0.114 * rgb.z;
    let cb = -0.169 * rgb.x - 0.331 * rgb.y + 0.500 * rgb.z;
    let cr = 0.500 * rgb.x - 0.419 * rgb.y - 0.081 * rgb.z;
    Vec3::new(y, cb + CHROMA_OFFSET, cr + CHROMA_OFFSET)
}

/// Converts YCbCr back to RGB (BT.601).
#[inline]
pub fn ycbcr_to_rgb(ycc: Vec3) -> Vec3 {
    let y = ycc.x;
    let cb = ycc.y - CHROMA_OFFSET;
    let cr = ycc.z - CHROMA_OFFSET;
    Vec3::new(
        y + 1.400 * cr,
        y - 0.343 * cb - 0.711 * cr,
        y + 1.765 * cb,
    )
}

/// Converts RGB to YCoCg.
#[inline]
pub fn rgb_to_ycocg(rgb: Vec3) -> Vec3 {
    let y = (rgb.x + 2.0 * rgb.y + rgb.z) * 0.25;
    let co = (2.0 * rgb.x - 2.0 * rgb.z) * 0.25;
    let cg = (-rgb.x + 2.0 * rgb.y - rgb.z) * 0.25;
    Vec3::new(y, co + CHROMA_OFFSET, cg + CHROMA_OFFSET)
}

/// Converts YCoCg back to RGB. Exact inverse of [`rgb_to_ycocg`].
#[inline]
pub fn ycocg_to_rgb(ycocg: Vec3) -> Vec3 {
    let y = ycocg.x;
    let co = ycocg.y - CHROMA_OFFSET;
    let cg = ycocg.z - CHROMA_OFFSET;
    Vec3::new(y + co - cg, y + cg, y - co - cg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_mutual_inverse(a: Mat3, b: Mat3, tol: f32) {
        let id = a * b;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (id.m[i][j] - expected).abs() < tol,
                    "product[{}][{}] = {}",
                    i,
                    j,
                    id.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_rotation_pairs_are_inverses() {
        // Independently transcribed pairs: a discrepancy beyond 1e-3
        // relative would mean a transcription defect.
        assert_mutual_inverse(MAT_709_TO_2020, MAT_2020_TO_709, 1e-3);
        assert_mutual_inverse(MAT_2020_TO_DCIP3, MAT_DCIP3_TO_2020, 1e-3);
        assert_mutual_inverse(MAT_709_TO_DCIP3, MAT_DCIP3_TO_709, 1e-3);
        assert_mutual_inverse(MAT_ADOBE_TO_2020, MAT_2020_TO_ADOBE, 1e-3);
        assert_mutual_inverse(XYZ_TO_2020, MAT_2020_TO_XYZ, 1e-2);
    }

    #[test]
    fn test_color_roundtrip_through_rotation() {
        let rgb = Vec3::new(0.25, 0.5, 0.75);
        let back = MAT_2020_TO_709 * (MAT_709_TO_2020 * rgb);
        assert_relative_eq!(back.x, rgb.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, rgb.y, epsilon = 1e-3);
        assert_relative_eq!(back.z, rgb.z, epsilon = 1e-3);
    }

    #[test]
    fn test_white_is_rotation_invariant() {
        // Both endpoints are D65, so the white axis maps to itself.
        let white = MAT_709_TO_2020 * Vec3::ONE;
        assert_relative_eq!(white.x, 1.0, epsilon = 1e-3);
        assert_relative_eq!(white.y, 1.0, epsilon = 1e-3);
        assert_relative_eq!(white.z, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_ycbcr_roundtrip() {
        for rgb in [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.1, 0.9, 0.3),
        ] {
            let back = ycbcr_to_rgb(rgb_to_ycbcr(rgb));
            assert_relative_eq!(back.x, rgb.x, epsilon = 2e-3);
            assert_relative_eq!(back.y, rgb.y, epsilon = 2e-3);
            assert_relative_eq!(back.z, rgb.z, epsilon = 2e-3);
        }
    }

    #[test]
    fn test_ycocg_roundtrip_exact() {
        for rgb in [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.25, 0.5, 0.75),
            Vec3::new(0.0, 0.0, 0.0),
        ] {
            let back = ycocg_to_rgb(rgb_to_ycocg(rgb));
            assert_relative_eq!(back.x, rgb.x, epsilon = 1e-6);
            assert_relative_eq!(back.y, rgb.y, epsilon = 1e-6);
            assert_relative_eq!(back.z, rgb.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_gray_has_centered_chroma() {
        let ycc = rgb_to_ycbcr(Vec3::splat(0.5));
        assert_relative_eq!(ycc.y, CHROMA_OFFSET, epsilon = 1e-3);
        assert_relative_eq!(ycc.z, CHROMA_OFFSET, epsilon = 1e-3);
    }

    #[test]
    fn test_xyz_709_matches_derived() {
        let derived = crate::xyz_to_rgb_matrix(&crate::REC709).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (XYZ_TO_709.m[i][j] - derived.m[i][j]).abs() < 2e-3,
                    "[{}][{}]: stored {} vs derived {}",
                    i,
                    j,
                    XYZ_TO_709.m[i][j],
                    derived.m[i][j]
                );
            }
        }
    }
}
