//! sRGB transfer function, exact and fast forms.
//!
//! The sRGB curve is a piecewise function: a linear segment near black
//! joined to a 2.4 power curve, approximating gamma 2.2 overall.
//!
//! The `*_fast` variants replace `powf` with sqrt/rational approximations
//! (error < 0.4%). They are separate named functions and are never
//! substituted for the exact forms by the pipeline.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use hdrpipe_math::Vec3;

/// sRGB EOTF: Decodes an sRGB code value to linear light.
///
/// # Formula
///
/// ```text
/// if V < 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use hdrpipe_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v < 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: Encodes linear light to an sRGB code value.
///
/// # Formula
///
/// ```text
/// if L < 0.0031308:
///     V = 12.92 * L
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l < 0.0031308 {
        12.92 * l
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Fast sRGB OETF, avoiding `powf`. Error < 0.4% over [0, 1].
#[inline]
pub fn oetf_fast(l: f32) -> f32 {
    if l < 0.0031308 {
        12.92 * l
    } else {
        1.13005 * (l - 0.00228).sqrt() - 0.13448 * l + 0.005719
    }
}

/// Fast sRGB EOTF, avoiding `powf`. Error < 0.4% over [0, 1].
#[inline]
pub fn eotf_fast(v: f32) -> f32 {
    if v < 0.04045 {
        v / 12.92
    } else {
        -7.43605 * v - 31.24297 * (-0.53792 * v + 1.279924).sqrt() + 35.34864
    }
}

/// Applies the sRGB EOTF per channel.
#[inline]
pub fn eotf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf)
}

/// Applies the sRGB OETF per channel.
#[inline]
pub fn oetf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(oetf)
}
