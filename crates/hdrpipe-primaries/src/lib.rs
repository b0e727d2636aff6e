//! # hdrpipe-primaries
//!
//! Color primaries, white points, and RGB/XYZ matrix generation.
//!
//! This crate is the colorimetric foundation of the display-path model:
//! it defines the chromaticity coordinates of the standard gamuts the
//! pipeline rotates between and derives the 3x3 matrices that carry RGB
//! values to and from CIE XYZ.
//!
//! # Modules
//!
//! - [`chromaticity`] - 1931 xy <-> 1976 u'v' <-> XYZ conversions
//! - [`cie`] - CIE Lab and Luv conversions (used for gamut-volume sampling)
//! - [`matrices`] - fixed reference rotation matrices and luma-chroma forms
//!
//! # Included Color Spaces
//!
//! | Color Space | White | Primary Use |
//! |-------------|-------|-------------|
//! | Rec.709 / sRGB | D65 | SDR and scRGB composition |
//! | Rec.2020 | D65 | HDR10 wire format |
//! | DCI-P3 | DCI | cinema projection, panel gamuts |
//! | Adobe RGB | D65 | photo / print surfaces |
//! | ACES AP0 | D60 | archival interchange |
//! | NTSC 1953, SMPTE-C | C/D65 | legacy broadcast comparison |
//!
//! # Usage
//!
//! ```rust
//! use hdrpipe_primaries::{rgb_to_xyz_matrix, REC709};
//! use hdrpipe_math::Vec3;
//!
//! let m = rgb_to_xyz_matrix(&REC709).unwrap();
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`hdrpipe-core`] - error types
//! - [`hdrpipe-math`] - `Vec2`/`Vec3`/`Mat3`
//!
//! # Used By
//!
//! - `hdrpipe-gamut` - coverage and volume computation
//! - `hdrpipe-pipeline` - per-stage gamut rotations

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chromaticity;
pub mod cie;
pub mod matrices;

use hdrpipe_core::{Error, Result};
use hdrpipe_math::{Mat3, Vec2, Vec3};

use chromaticity::xy_to_xyz;

/// RGB color space definition: three primaries plus a white point,
/// all as 1931 xy chromaticities.
///
/// # Example
///
/// ```rust
/// use hdrpipe_primaries::Primaries;
/// use hdrpipe_math::Vec2;
///
/// let custom = Primaries {
///     r: Vec2::new(0.64, 0.33),
///     g: Vec2::new(0.30, 0.60),
///     b: Vec2::new(0.15, 0.06),
///     w: Vec2::new(0.3127, 0.3290),
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary.
    pub r: Vec2,
    /// Green primary.
    pub g: Vec2,
    /// Blue primary.
    pub b: Vec2,
    /// White point.
    pub w: Vec2,
    /// Color space name, used in error reports.
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ with the given luminance.
    pub fn white_xyz(&self, y: f32) -> Result<Vec3> {
        xy_to_xyz(self.w, y)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D50 white point (~5000K).
pub const D50: Vec2 = Vec2::new(0.34567, 0.35850);

/// D60 white point (~6000K, used by ACES).
pub const D60: Vec2 = Vec2::new(0.32168, 0.33767);

/// D65 white point (~6500K, assumed by the compositor model).
pub const D65: Vec2 = Vec2::new(0.31271, 0.32902);

/// DCI white point (theatrical projection).
pub const DCI: Vec2 = Vec2::new(0.31400, 0.35100);

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// Rec.709 / sRGB primaries (D65).
pub const REC709: Primaries = Primaries {
    r: Vec2::new(0.640, 0.330),
    g: Vec2::new(0.300, 0.600),
    b: Vec2::new(0.150, 0.060),
    w: D65,
    name: "Rec.709",
};

/// Rec.2020 / Rec.2100 primaries (D65).
pub const REC2020: Primaries = Primaries {
    r: Vec2::new(0.708, 0.292),
    g: Vec2::new(0.170, 0.797),
    b: Vec2::new(0.131, 0.046),
    w: D65,
    name: "Rec.2020",
};

/// DCI-P3 primaries (DCI white).
pub const DCI_P3: Primaries = Primaries {
    r: Vec2::new(0.680, 0.320),
    g: Vec2::new(0.265, 0.690),
    b: Vec2::new(0.150, 0.060),
    w: DCI,
    name: "DCI-P3",
};

/// Display P3 primaries (DCI-P3 gamut with a D65 white point).
pub const DISPLAY_P3: Primaries = Primaries {
    r: Vec2::new(0.680, 0.320),
    g: Vec2::new(0.265, 0.690),
    b: Vec2::new(0.150, 0.060),
    w: D65,
    name: "Display P3",
};

/// Adobe RGB (1998) primaries (D65).
pub const ADOBE_RGB: Primaries = Primaries {
    r: Vec2::new(0.640, 0.330),
    g: Vec2::new(0.210, 0.710),
    b: Vec2::new(0.150, 0.060),
    w: D65,
    name: "Adobe RGB",
};

/// ACES AP0 primaries (D60).
///
/// The blue primary sits below the spectral locus (y = -0.0770), outside
/// the 1931 xy domain that matrix derivation accepts, so
/// [`rgb_to_xyz_matrix`] rejects this set with
/// [`Error::ChromaticityOutOfDomain`]. Use the fixed
/// [`matrices::XYZ_TO_ACES`] rotation instead.
pub const ACES_AP0: Primaries = Primaries {
    r: Vec2::new(0.7347, 0.2653),
    g: Vec2::new(0.0000, 1.0000),
    b: Vec2::new(0.0001, -0.0770),
    w: D60,
    name: "ACES AP0",
};

/// NTSC 1953 primaries.
pub const NTSC_1953: Primaries = Primaries {
    r: Vec2::new(0.67, 0.33),
    g: Vec2::new(0.21, 0.71),
    b: Vec2::new(0.14, 0.08),
    w: D65,
    name: "NTSC 1953",
};

/// SMPTE-C primaries (D65).
pub const SMPTE_C: Primaries = Primaries {
    r: Vec2::new(0.630, 0.340),
    g: Vec2::new(0.310, 0.595),
    b: Vec2::new(0.155, 0.070),
    w: D65,
    name: "SMPTE-C",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Computes the RGB -> XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert each primary and the white point from xy to XYZ (Y = 1)
/// 2. Build the candidate matrix with the primaries as columns
/// 3. Map the white point through the candidate's *inverse* to obtain
///    per-primary scale factors, and scale the columns with them
///
/// The scale factors come from the inverse matrix, not the candidate
/// itself; the white luminance `y` scales the whole result so that RGB
/// (1,1,1) maps to a white of luminance `y`.
///
/// # Errors
///
/// [`Error::DegeneratePrimaries`] when the chromaticities are collinear
/// or coincident and the candidate matrix is singular. There is no
/// identity fallback: a wrong matrix here silently corrupts every color
/// downstream.
pub fn rgb_to_xyz_matrix_scaled(primaries: &Primaries, y: f32) -> Result<Mat3> {
    let r = xy_to_xyz(primaries.r, 1.0)?;
    let g = xy_to_xyz(primaries.g, 1.0)?;
    let b = xy_to_xyz(primaries.b, 1.0)?;
    let w = xy_to_xyz(primaries.w, y)?;

    let candidate = Mat3::from_col_vecs(r, g, b);
    let inv = candidate
        .inverse()
        .ok_or_else(|| Error::degenerate_primaries(primaries.name))?;
    let s = inv * w;

    Ok(Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z))
}

/// Computes the RGB -> XYZ matrix with a white luminance of 1.0.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Result<Mat3> {
    rgb_to_xyz_matrix_scaled(primaries, 1.0)
}

/// Computes the XYZ -> RGB matrix for a set of primaries.
///
/// The exact matrix inverse of [`rgb_to_xyz_matrix_scaled`] for the same
/// arguments.
pub fn xyz_to_rgb_matrix_scaled(primaries: &Primaries, y: f32) -> Result<Mat3> {
    rgb_to_xyz_matrix_scaled(primaries, y)?
        .inverse()
        .ok_or_else(|| Error::degenerate_primaries(primaries.name))
}

/// Computes the XYZ -> RGB matrix with a white luminance of 1.0.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Result<Mat3> {
    xyz_to_rgb_matrix_scaled(primaries, 1.0)
}

/// Computes the direct rotation matrix between two RGB color spaces.
///
/// Goes through XYZ: `RGB_src -> XYZ -> RGB_dst`. No chromatic
/// adaptation is applied; the display-path model treats both endpoints
/// as D65-referenced, matching the reference matrices.
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Result<Mat3> {
    let to_xyz = rgb_to_xyz_matrix(src)?;
    let from_xyz = xyz_to_rgb_matrix(dst)?;
    Ok(from_xyz * to_xyz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rec709_reproduces_published_matrix() {
        // Row 1 of XYZ->709 must match the Lindbloom coefficients.
        let m = xyz_to_rgb_matrix(&REC709).unwrap();
        assert_relative_eq!(m.m[0][0], 3.2405, epsilon = 1e-3);
        assert_relative_eq!(m.m[0][1], -1.5371, epsilon = 1e-3);
        assert_relative_eq!(m.m[0][2], -0.4985, epsilon = 1e-3);
    }

    #[test]
    fn test_forward_matches_published() {
        let m = rgb_to_xyz_matrix(&REC709).unwrap();
        assert_relative_eq!(m.m[0][0], 0.4124, epsilon = 1e-3);
        assert_relative_eq!(m.m[1][0], 0.2126, epsilon = 1e-3);
        assert_relative_eq!(m.m[2][2], 0.9503, epsilon = 1e-2);
    }

    #[test]
    fn test_white_maps_to_white() {
        for p in [REC709, REC2020, DCI_P3, ADOBE_RGB, SMPTE_C, NTSC_1953] {
            let m = rgb_to_xyz_matrix(&p).unwrap();
            let white = m * Vec3::ONE;
            assert_relative_eq!(white.y, 1.0, epsilon = 1e-3);
            let expected = xy_to_xyz(p.w, 1.0).unwrap();
            assert_relative_eq!(white.x, expected.x, epsilon = 1e-3);
            assert_relative_eq!(white.z, expected.z, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_xyz_to_rgb_is_true_inverse() {
        for p in [REC709, REC2020, DCI_P3, ADOBE_RGB] {
            let fwd = rgb_to_xyz_matrix(&p).unwrap();
            let bwd = xyz_to_rgb_matrix(&p).unwrap();
            let id = bwd * fwd;
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_relative_eq!(id.m[i][j], expected, epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_rgb_roundtrip_through_xyz() {
        let fwd = rgb_to_xyz_matrix(&REC2020).unwrap();
        let bwd = xyz_to_rgb_matrix(&REC2020).unwrap();
        let rgb = Vec3::new(0.25, 0.6, 0.85);
        let back = bwd * (fwd * rgb);
        assert_relative_eq!(back.x, rgb.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, rgb.y, epsilon = 1e-4);
        assert_relative_eq!(back.z, rgb.z, epsilon = 1e-4);
    }

    #[test]
    fn test_degenerate_primaries_rejected() {
        let collinear = Primaries {
            r: Vec2::new(0.3, 0.3),
            g: Vec2::new(0.3, 0.3),
            b: Vec2::new(0.3, 0.3),
            w: D65,
            name: "degenerate",
        };
        assert!(matches!(
            rgb_to_xyz_matrix(&collinear),
            Err(Error::DegeneratePrimaries { .. })
        ));
    }

    #[test]
    fn test_aces_ap0_matrix_not_derivable() {
        // The imaginary blue primary is outside the xy domain; the fixed
        // XYZ_TO_ACES constant is the supported path for this gamut.
        assert!(matches!(
            rgb_to_xyz_matrix(&ACES_AP0),
            Err(Error::ChromaticityOutOfDomain { .. })
        ));
    }

    #[test]
    fn test_self_rotation_is_identity() {
        let m = rgb_to_rgb_matrix(&REC709, &REC709).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(m.m[i][j], expected, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_derived_709_to_2020_matches_reference() {
        let m = rgb_to_rgb_matrix(&REC709, &REC2020).unwrap();
        assert_relative_eq!(m.m[0][0], 0.627404, epsilon = 1e-3);
        assert_relative_eq!(m.m[1][1], 0.919540, epsilon = 1e-3);
        assert_relative_eq!(m.m[2][2], 0.895595, epsilon = 1e-3);
    }
}
