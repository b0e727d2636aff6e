//! Brute-force gamut volume estimation in CIE Lab and CIE Luv.
//!
//! A gamut's volume is estimated by sweeping a dense integer grid over
//! the perceptual space (L in 0..=100, both chroma axes in -200..=200),
//! lifting each grid point back to XYZ and then into the gamut's RGB
//! coordinates, and counting the points whose RGB lands inside the unit
//! cube. The count is the volume in unit grid cells; absolute numbers
//! only mean something relative to other gamuts swept on the same grid.
//!
//! The sweep is ~16.5M samples per call. L slices are independent, so
//! the outer loop runs on the rayon pool.

use hdrpipe_core::Result;
use hdrpipe_math::{Mat3, Vec3};
use hdrpipe_primaries::cie::{lab_to_xyz, luv_to_xyz};
use hdrpipe_primaries::{xyz_to_rgb_matrix_scaled, Primaries};
use rayon::prelude::*;

/// White luminance the grid is referenced to.
const GRID_WHITE_Y: f32 = 100.0;

/// Chroma axis extent; both axes sweep `-CHROMA_EXTENT..=CHROMA_EXTENT`.
const CHROMA_EXTENT: i32 = 200;

/// Counts grid points whose lifted XYZ lands inside the RGB unit cube.
///
/// `to_xyz` lifts one perceptual-space grid point to XYZ. Non-finite
/// lifts (Luv at L = 0 with non-zero chroma) fail the range test and
/// are not counted.
fn sweep_grid(xyz_to_rgb: Mat3, to_xyz: impl Fn(Vec3) -> Vec3 + Sync) -> u64 {
    (0..=100i32)
        .into_par_iter()
        .map(|l| {
            let mut count = 0u64;
            for a in -CHROMA_EXTENT..=CHROMA_EXTENT {
                for b in -CHROMA_EXTENT..=CHROMA_EXTENT {
                    let p = Vec3::new(l as f32, a as f32, b as f32);
                    let rgb = xyz_to_rgb * to_xyz(p);
                    if rgb.is_finite() && rgb.in_range(0.0, 1.0) {
                        count += 1;
                    }
                }
            }
            count
        })
        .sum()
}

/// Estimates the gamut volume in CIE Lab, in unit Lab grid cells.
///
/// # Errors
///
/// [`hdrpipe_core::Error::DegeneratePrimaries`] or
/// [`hdrpipe_core::Error::ChromaticityOutOfDomain`] when no RGB/XYZ
/// matrix exists for the primaries.
///
/// # Reference values
///
/// | Gamut | Lab cells |
/// |-----------|-----------|
/// | Rec.709 | ~820,285 |
/// | Adobe RGB | ~1,195,981 |
/// | DCI-P3 | ~1,230,953 |
/// | Rec.2020 | ~1,854,871 |
pub fn gamut_volume_lab(primaries: &Primaries) -> Result<u64> {
    let xyz_to_rgb = xyz_to_rgb_matrix_scaled(primaries, GRID_WHITE_Y)?;
    let white = primaries.white_xyz(GRID_WHITE_Y)?;
    Ok(sweep_grid(xyz_to_rgb, move |lab| lab_to_xyz(lab, white)))
}

/// Estimates the gamut volume in CIE Luv, in unit Luv grid cells.
///
/// Same grid and counting rule as [`gamut_volume_lab`]; Luv stretches
/// saturated regions further, so the counts run higher.
///
/// # Errors
///
/// Same conditions as [`gamut_volume_lab`].
///
/// # Reference values
///
/// | Gamut | Luv cells |
/// |-----------|-----------|
/// | Rec.709 | ~1,327,095 |
/// | DCI-P3 | ~1,799,039 |
/// | Adobe RGB | ~1,818,180 |
/// | Rec.2020 | ~2,505,074 |
///
/// Classic published Luv figures run exactly 160,801 higher per gamut
/// (Rec.709 1,487,896, Rec.2020 2,665,875): the Luv lift divides by
/// `13 L`, so the whole 401x401 L = 0 slice comes back non-finite, and
/// counting loops without a finiteness test let that slice through.
/// Here the slice fails [`sweep_grid`]'s range test and is excluded.
pub fn gamut_volume_luv(primaries: &Primaries) -> Result<u64> {
    let xyz_to_rgb = xyz_to_rgb_matrix_scaled(primaries, GRID_WHITE_Y)?;
    let white = primaries.white_xyz(GRID_WHITE_Y)?;
    Ok(sweep_grid(xyz_to_rgb, move |luv| luv_to_xyz(luv, white)))
}
