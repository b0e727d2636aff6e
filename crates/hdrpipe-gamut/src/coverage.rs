//! Gamut coverage: fraction of a reference gamut reached by a test gamut.
//!
//! Primaries are specified in 1931 xy, but areas are compared in 1976
//! u'v', where equal areas are closer to equal perceptual extent. Both
//! triangles are converted, intersected, and the overlap area is
//! reported as a fraction of the reference triangle's area.

use crate::polygon::{area, intersect, Triangle};
use hdrpipe_core::{Error, Result};
use hdrpipe_math::Vec2;
use hdrpipe_primaries::chromaticity::xy_to_uv;
use hdrpipe_primaries::Primaries;

/// Reference triangle areas below this are treated as degenerate.
const MIN_REFERENCE_AREA: f32 = 1e-9;

/// Builds the u'v' gamut triangle for a set of primaries.
///
/// Vertex order blue, green, red gives clockwise winding for every
/// physically meaningful gamut.
fn uv_triangle(p: &Primaries) -> Triangle {
    Triangle::new(xy_to_uv(p.b), xy_to_uv(p.g), xy_to_uv(p.r))
}

/// Area of a gamut triangle in 1976 u'v', from 1931 xy primaries.
///
/// Unsigned magnitude; winding is normalized internally.
pub fn gamut_area(r: Vec2, g: Vec2, b: Vec2) -> f32 {
    let r_uv = xy_to_uv(r);
    let g_uv = xy_to_uv(g);
    let b_uv = xy_to_uv(b);
    ((b_uv - g_uv).cross(r_uv - g_uv) * 0.5).abs()
}

/// Fraction of `reference`'s u'v' area covered by `test`.
///
/// Returns a value in [0, 1]: 1.0 when the reference triangle lies
/// entirely inside the test triangle, 0.0 when they are disjoint.
///
/// # Errors
///
/// [`Error::DegenerateReferenceGamut`] when the reference triangle has
/// (near-)zero area, which would make the ratio undefined.
///
/// # Example
///
/// ```rust
/// use hdrpipe_gamut::coverage::gamut_coverage;
/// use hdrpipe_primaries::{REC2020, REC709};
///
/// // Rec.2020 fully contains Rec.709.
/// let c = gamut_coverage(&REC2020, &REC709).unwrap();
/// assert!((c - 1.0).abs() < 1e-4);
/// ```
pub fn gamut_coverage(test: &Primaries, reference: &Primaries) -> Result<f32> {
    let ref_area = gamut_area(reference.r, reference.g, reference.b);
    if ref_area < MIN_REFERENCE_AREA {
        return Err(Error::DegenerateReferenceGamut { area: ref_area });
    }

    let overlap = intersect(&uv_triangle(test), &uv_triangle(reference));
    Ok(area(&overlap).abs() / ref_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hdrpipe_primaries::{ADOBE_RGB, D65, DCI_P3, REC2020, REC709};

    #[test]
    fn test_self_coverage_is_one() {
        for p in [REC709, REC2020, DCI_P3, ADOBE_RGB] {
            let c = gamut_coverage(&p, &p).unwrap();
            assert_relative_eq!(c, 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_wider_gamut_contains_narrower() {
        assert_relative_eq!(
            gamut_coverage(&REC2020, &REC709).unwrap(),
            1.0,
            epsilon = 1e-4
        );
        // And the reverse is strictly partial.
        let narrow = gamut_coverage(&REC709, &REC2020).unwrap();
        assert!(narrow > 0.3 && narrow < 0.9, "coverage = {}", narrow);
    }

    #[test]
    fn test_p3_against_2020_reference_value() {
        // DCI-P3 covers roughly three quarters of Rec.2020 in u'v'.
        let c = gamut_coverage(&DCI_P3, &REC2020).unwrap();
        assert!(c > 0.70 && c < 0.80, "coverage = {}", c);
    }

    #[test]
    fn test_overlap_area_symmetric() {
        let a = area(&intersect(
            &super::uv_triangle(&DCI_P3),
            &super::uv_triangle(&ADOBE_RGB),
        ));
        let b = area(&intersect(
            &super::uv_triangle(&ADOBE_RGB),
            &super::uv_triangle(&DCI_P3),
        ));
        assert_relative_eq!(a, b, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_reference_rejected() {
        let degenerate = hdrpipe_primaries::Primaries {
            r: Vec2::new(0.3, 0.3),
            g: Vec2::new(0.3, 0.3),
            b: Vec2::new(0.3, 0.3),
            w: D65,
            name: "degenerate",
        };
        assert!(matches!(
            gamut_coverage(&REC709, &degenerate),
            Err(Error::DegenerateReferenceGamut { .. })
        ));
    }
}
