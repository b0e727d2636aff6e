//! Rec.709 (BT.709) camera transfer function.
//!
//! The Rec.709 OETF is the HDTV encode curve: a 4.5x linear toe joined to
//! a 0.45 power segment. Breakpoints here are the precise pair
//! (0.0181 encode / 0.08145 decode) so the two directions meet exactly.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ITU-R BT.709-6

use hdrpipe_math::Vec3;

/// Rec.709 OETF: Encodes linear light to a Rec.709 code value.
///
/// # Formula
///
/// ```text
/// if L < 0.0181:
///     V = 4.5 * L
/// else:
///     V = 1.0993 * L^0.45 - 0.0993
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l < 0.0181 {
        4.5 * l
    } else {
        1.0993 * l.powf(0.45) - 0.0993
    }
}

/// Rec.709 inverse OETF: Decodes a Rec.709 code value to linear light.
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v < 0.08145 {
        v / 4.5
    } else {
        ((v + 0.0993) / 1.0993).powf(1.0 / 0.45)
    }
}

/// Applies the Rec.709 inverse OETF per channel.
#[inline]
pub fn eotf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf)
}

/// Applies the Rec.709 OETF per channel.
#[inline]
pub fn oetf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(oetf)
}
