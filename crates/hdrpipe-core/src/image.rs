//! Image buffer with pure per-sample transforms.
//!
//! [`Image`] is a 2D grid of `Vec3` samples. Every pipeline transform
//! is a pure function applied independently to each sample, so a 1x1
//! bring-up image ([`Image::splat`]) and a full-resolution picture go
//! through identical math.
//!
//! Per-pixel application is embarrassingly parallel; [`Image::par_map`]
//! fans out over rows with rayon while the pure [`Image::map`] stays
//! available for small buffers and tests.

use crate::error::{Error, Result};
use half::f16;
use hdrpipe_math::Vec3;
use rayon::prelude::*;

/// Largest value representable in an fp16 scan-out surface.
pub const HALF_MAX: f32 = 65504.0;

/// Rec.709 luma coefficients.
const LUMA_709: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// Rec.709 luma of a linear RGB sample.
#[inline]
pub fn luminance_rec709(rgb: Vec3) -> f32 {
    rgb.dot(LUMA_709)
}

/// A 2D buffer of 3-component float samples.
///
/// Samples are stored row-major. The buffer itself is encoding-agnostic;
/// what the floats *mean* (linear nits, PQ code values, gamma-encoded
/// unorm) is declared separately by the
/// [`PixelFormat`](crate::PixelFormat)/[`ColorSpaceType`](crate::ColorSpaceType)
/// pair traveling with it.
///
/// # Example
///
/// ```rust
/// use hdrpipe_core::Image;
/// use hdrpipe_math::Vec3;
///
/// // A 1x1 bring-up image
/// let img = Image::splat(Vec3::splat(0.18));
/// let doubled = img.map(|s| s * 2.0);
/// assert_eq!(doubled.sample(0, 0).unwrap().x, 0.36);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    samples: Vec<Vec3>,
}

impl Image {
    /// Creates a black image of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                reason: "width and height must be non-zero".into(),
            });
        }
        Ok(Self {
            width,
            height,
            samples: vec![Vec3::ZERO; (width as usize) * (height as usize)],
        })
    }

    /// Creates an image from an existing row-major sample buffer.
    pub fn from_samples(width: u32, height: u32, samples: Vec<Vec3>) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                reason: "width and height must be non-zero".into(),
            });
        }
        if samples.len() != expected {
            return Err(Error::InvalidDimensions {
                width,
                height,
                reason: format!("expected {} samples, got {}", expected, samples.len()),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Creates a 1x1 image holding a single sample.
    ///
    /// The bring-up form used by stage-level tests.
    pub fn splat(sample: Vec3) -> Self {
        Self {
            width: 1,
            height: 1,
            samples: vec![sample],
        }
    }

    /// Image width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the raw sample buffer.
    #[inline]
    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }

    /// Returns the sample at (x, y), or an error when out of bounds.
    pub fn sample(&self, x: u32, y: u32) -> Result<Vec3> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.samples[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Sets the sample at (x, y).
    pub fn set_sample(&mut self, x: u32, y: u32, v: Vec3) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.samples[(y as usize) * (self.width as usize) + (x as usize)] = v;
        Ok(())
    }

    /// Applies a pure function to every sample, sequentially.
    pub fn map(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        Self {
            width: self.width,
            height: self.height,
            samples: self.samples.iter().map(|&s| f(s)).collect(),
        }
    }

    /// Applies a pure function to every sample in parallel.
    ///
    /// No shared mutable state: the function sees one sample at a time,
    /// the same contract as [`Image::map`].
    pub fn par_map(&self, f: impl Fn(Vec3) -> Vec3 + Sync + Send) -> Self {
        Self {
            width: self.width,
            height: self.height,
            samples: self.samples.par_iter().map(|&s| f(s)).collect(),
        }
    }

    /// Multiplies every sample by a scalar factor.
    pub fn scaled(&self, factor: f32) -> Self {
        self.map(|s| s * factor)
    }

    /// Largest component over all samples.
    ///
    /// The content peak used by the tone-mapping decision logic.
    pub fn peak(&self) -> f32 {
        self.samples
            .iter()
            .map(|s| s.max_component())
            .fold(f32::MIN, f32::max)
    }

    /// Mean Rec.709 luma over all samples (frame average light level).
    pub fn average_luminance(&self) -> f32 {
        let sum: f32 = self.samples.iter().map(|&s| luminance_rec709(s)).sum();
        sum / self.samples.len() as f32
    }

    /// Converts the buffer to fp16 triplets for an scRGB surface.
    ///
    /// Values outside fp16 range saturate to the half-float maximum.
    pub fn to_f16_samples(&self) -> Vec<[f16; 3]> {
        self.samples
            .iter()
            .map(|s| {
                [
                    f16::from_f32(s.x.clamp(-HALF_MAX, HALF_MAX)),
                    f16::from_f32(s.y.clamp(-HALF_MAX, HALF_MAX)),
                    f16::from_f32(s.z.clamp(-HALF_MAX, HALF_MAX)),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Image::new(0, 4).is_err());
        assert!(Image::new(4, 0).is_err());
        assert!(Image::from_samples(2, 2, vec![Vec3::ZERO; 3]).is_err());
    }

    #[test]
    fn test_bounds_checked_access() {
        let img = Image::new(2, 2).unwrap();
        assert!(img.sample(1, 1).is_ok());
        assert!(matches!(
            img.sample(2, 0),
            Err(Error::OutOfBounds { x: 2, .. })
        ));
    }

    #[test]
    fn test_map_par_map_agree() {
        let samples: Vec<Vec3> = (0..64)
            .map(|i| Vec3::splat(i as f32 / 63.0))
            .collect();
        let img = Image::from_samples(8, 8, samples).unwrap();
        let f = |s: Vec3| s.map(|c| (c * 2.0).min(1.0));
        assert_eq!(img.map(f), img.par_map(f));
    }

    #[test]
    fn test_peak_and_average() {
        let mut img = Image::new(2, 1).unwrap();
        img.set_sample(0, 0, Vec3::new(0.5, 0.25, 4.0)).unwrap();
        img.set_sample(1, 0, Vec3::splat(1.0)).unwrap();
        assert_eq!(img.peak(), 4.0);
        let avg = img.average_luminance();
        let expected =
            (luminance_rec709(Vec3::new(0.5, 0.25, 4.0)) + luminance_rec709(Vec3::ONE)) / 2.0;
        assert_relative_eq!(avg, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_f16_saturates() {
        let img = Image::splat(Vec3::splat(1e6));
        let half = img.to_f16_samples();
        assert_eq!(half[0][0].to_f32(), HALF_MAX);
    }
}
