//! Chromaticity diagram conversions: 1931 xy, 1976 u'v', CIE XYZ.
//!
//! The gamut geometry engine compares triangle areas in 1976 u'v'
//! because that diagram is perceptually more uniform than 1931 xy; the
//! projective transforms between the two live here, together with the
//! xy -> XYZ lift used for matrix generation.

use hdrpipe_core::{Error, Result};
use hdrpipe_math::{Vec2, Vec3};

/// Converts a 1931 xy chromaticity to XYZ with luminance `y_lum`.
///
/// # Errors
///
/// [`Error::ChromaticityOutOfDomain`] unless `0 <= x <= 1` and
/// `0 < y <= 1`. Silently returning black here would hide bad
/// primaries until far downstream, so the domain check is explicit.
///
/// # Example
///
/// ```rust
/// use hdrpipe_primaries::chromaticity::xy_to_xyz;
/// use hdrpipe_math::Vec2;
///
/// let d65 = xy_to_xyz(Vec2::new(0.31271, 0.32902), 1.0).unwrap();
/// assert!((d65.y - 1.0).abs() < 1e-6);
/// ```
pub fn xy_to_xyz(xy: Vec2, y_lum: f32) -> Result<Vec3> {
    if !(0.0..=1.0).contains(&xy.x) || xy.y <= 0.0 || xy.y > 1.0 {
        return Err(Error::ChromaticityOutOfDomain { x: xy.x, y: xy.y });
    }
    Ok(Vec3::new(xy.x / xy.y, 1.0, (1.0 - xy.x - xy.y) / xy.y) * y_lum)
}

/// Converts a 1931 xy chromaticity to 1976 u'v'.
///
/// Projective transform:
///
/// ```text
/// u' = 4x / (-2x + 12y + 3)
/// v' = 9y / (-2x + 12y + 3)
/// ```
#[inline]
pub fn xy_to_uv(xy: Vec2) -> Vec2 {
    let d = -2.0 * xy.x + 12.0 * xy.y + 3.0;
    Vec2::new(4.0 * xy.x / d, 9.0 * xy.y / d)
}

/// Converts a 1976 u'v' chromaticity back to 1931 xy.
///
/// ```text
/// x = 9u' / (6u' - 16v' + 12)
/// y = 4v' / (6u' - 16v' + 12)
/// ```
#[inline]
pub fn uv_to_xy(uv: Vec2) -> Vec2 {
    let d = 6.0 * uv.x - 16.0 * uv.y + 12.0;
    Vec2::new(9.0 * uv.x / d, 4.0 * uv.y / d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{D65, REC709};
    use approx::assert_relative_eq;

    #[test]
    fn test_xy_uv_roundtrip() {
        for xy in [
            D65,
            REC709.r,
            REC709.g,
            REC709.b,
            Vec2::new(0.708, 0.292),
            Vec2::new(0.131, 0.046),
        ] {
            let back = uv_to_xy(xy_to_uv(xy));
            assert_relative_eq!(back.x, xy.x, epsilon = 1e-5);
            assert_relative_eq!(back.y, xy.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_d65_uv_reference() {
        // Published 1976 coordinates of D65.
        let uv = xy_to_uv(D65);
        assert_relative_eq!(uv.x, 0.19783, epsilon = 1e-4);
        assert_relative_eq!(uv.y, 0.46833, epsilon = 1e-4);
    }

    #[test]
    fn test_out_of_domain_rejected() {
        assert!(xy_to_xyz(Vec2::new(-0.1, 0.3), 1.0).is_err());
        assert!(xy_to_xyz(Vec2::new(1.1, 0.3), 1.0).is_err());
        assert!(xy_to_xyz(Vec2::new(0.3, 0.0), 1.0).is_err());
        assert!(xy_to_xyz(Vec2::new(0.3, -0.5), 1.0).is_err());
    }

    #[test]
    fn test_luminance_scales() {
        let xyz = xy_to_xyz(D65, 100.0).unwrap();
        assert_relative_eq!(xyz.y, 100.0, epsilon = 1e-4);
    }
}
