//! CIE Lab and Luv conversions.
//!
//! Both perceptual spaces are needed for gamut-volume estimation: the
//! volume sampler walks an integer grid in Lab (or Luv), lifts each
//! sample back to XYZ, and tests whether the gamut's RGB cube contains
//! it. The canonical `delta = 6/29` breakpoint is used throughout.
//!
//! All conversions take the white point as XYZ, at whatever luminance
//! the caller is working in (the volume sampler uses Y = 100).

use hdrpipe_math::Vec3;

const DELTA: f32 = 6.0 / 29.0;

/// Lab forward companding function.
fn f(t: f32) -> f32 {
    if t > DELTA.powi(3) {
        t.powf(1.0 / 3.0)
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Lab inverse companding function.
fn f_inv(t: f32) -> f32 {
    if t > DELTA {
        t.powi(3)
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// Converts CIE XYZ to CIE Lab relative to the given white.
pub fn xyz_to_lab(xyz: Vec3, white: Vec3) -> Vec3 {
    let fx = f(xyz.x / white.x);
    let fy = f(xyz.y / white.y);
    let fz = f(xyz.z / white.z);
    Vec3::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Converts CIE Lab back to CIE XYZ relative to the given white.
pub fn lab_to_xyz(lab: Vec3, white: Vec3) -> Vec3 {
    let l = (lab.x + 16.0) / 116.0;
    Vec3::new(
        white.x * f_inv(l + lab.y / 500.0),
        white.y * f_inv(l),
        white.z * f_inv(l - lab.z / 200.0),
    )
}

/// u' projection of an XYZ value.
#[inline]
fn u_prime(xyz: Vec3) -> f32 {
    4.0 * xyz.x / (xyz.x + 15.0 * xyz.y + 3.0 * xyz.z)
}

/// v' projection of an XYZ value.
#[inline]
fn v_prime(xyz: Vec3) -> f32 {
    9.0 * xyz.y / (xyz.x + 15.0 * xyz.y + 3.0 * xyz.z)
}

/// Converts CIE XYZ to CIE Luv relative to the given white.
pub fn xyz_to_luv(xyz: Vec3, white: Vec3) -> Vec3 {
    let y_ratio = xyz.y / white.y;
    let l = if y_ratio <= DELTA.powi(3) {
        (2.0 / DELTA).powi(3) * y_ratio
    } else {
        116.0 * y_ratio.powf(1.0 / 3.0) - 16.0
    };
    Vec3::new(
        l,
        13.0 * l * (u_prime(xyz) - u_prime(white)),
        13.0 * l * (v_prime(xyz) - v_prime(white)),
    )
}

/// Converts CIE Luv back to CIE XYZ relative to the given white.
///
/// L = 0 with non-zero u/v is outside the space's domain; the division
/// by 13L then yields non-finite components, which gamut sampling
/// discards via its finite [0,1] range test.
pub fn luv_to_xyz(luv: Vec3, white: Vec3) -> Vec3 {
    let un = u_prime(white);
    let vn = v_prime(white);
    let u = luv.y / (13.0 * luv.x) + un;
    let v = luv.z / (13.0 * luv.x) + vn;
    let y = if luv.x <= 8.0 {
        white.y * luv.x * (DELTA / 2.0).powi(3)
    } else {
        white.y * ((luv.x + 16.0) / 116.0).powi(3)
    };
    Vec3::new(
        y * 9.0 * u / (4.0 * v),
        y,
        y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromaticity::xy_to_xyz;
    use crate::D65;
    use approx::assert_relative_eq;

    fn white100() -> Vec3 {
        xy_to_xyz(D65, 100.0).unwrap()
    }

    #[test]
    fn test_lab_white_is_l100() {
        let w = white100();
        let lab = xyz_to_lab(w, w);
        assert_relative_eq!(lab.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(lab.y, 0.0, epsilon = 1e-3);
        assert_relative_eq!(lab.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_lab_roundtrip() {
        let w = white100();
        for lab in [
            Vec3::new(50.0, 20.0, -30.0),
            Vec3::new(5.0, -3.0, 8.0),
            Vec3::new(96.0, 120.0, 80.0),
        ] {
            let back = xyz_to_lab(lab_to_xyz(lab, w), w);
            assert_relative_eq!(back.x, lab.x, epsilon = 1e-2);
            assert_relative_eq!(back.y, lab.y, epsilon = 1e-2);
            assert_relative_eq!(back.z, lab.z, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_luv_white_is_l100() {
        let w = white100();
        let luv = xyz_to_luv(w, w);
        assert_relative_eq!(luv.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(luv.y, 0.0, epsilon = 1e-2);
        assert_relative_eq!(luv.z, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn test_luv_roundtrip() {
        let w = white100();
        for luv in [Vec3::new(60.0, 40.0, -15.0), Vec3::new(20.0, -10.0, 30.0)] {
            let back = xyz_to_luv(luv_to_xyz(luv, w), w);
            assert_relative_eq!(back.x, luv.x, epsilon = 1e-2);
            assert_relative_eq!(back.y, luv.y, epsilon = 1e-1);
            assert_relative_eq!(back.z, luv.z, epsilon = 1e-1);
        }
    }

    #[test]
    fn test_luv_origin_goes_nonfinite_not_panic() {
        let w = white100();
        let xyz = luv_to_xyz(Vec3::new(0.0, 50.0, 50.0), w);
        assert!(!xyz.is_finite());
    }
}
