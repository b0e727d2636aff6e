//! Error types for display-path operations.
//!
//! All failures in this pipeline are local computation failures: a
//! transform either fully succeeds or reports a specific error. Nothing
//! here is retryable, so there is no retry machinery, and nothing is ever
//! silently defaulted to a plausible-looking value.

use crate::format::{ColorSpaceType, PixelFormat};
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while moving an image through the display path.
///
/// # Categories
///
/// - **Validation**: [`UnsupportedFormat`](Error::UnsupportedFormat),
///   [`UnsupportedOutputMode`](Error::UnsupportedOutputMode)
/// - **Geometry/configuration**: [`DegeneratePrimaries`](Error::DegeneratePrimaries),
///   [`ChromaticityOutOfDomain`](Error::ChromaticityOutOfDomain),
///   [`DegenerateReferenceGamut`](Error::DegenerateReferenceGamut)
/// - **Buffer access**: [`OutOfBounds`](Error::OutOfBounds),
///   [`InvalidDimensions`](Error::InvalidDimensions)
#[derive(Debug, Error)]
pub enum Error {
    /// A pipeline stage received a `(format, color space)` pair outside
    /// its allow-list.
    ///
    /// Names the boundary that rejected the pair; the application layer
    /// decides whether this aborts the process.
    #[error("stage {stage}: color space {color_space} is not supported with format {format}")]
    UnsupportedFormat {
        /// Name of the pipeline stage that rejected the input.
        stage: &'static str,
        /// Declared pixel format.
        format: PixelFormat,
        /// Declared color space.
        color_space: ColorSpaceType,
    },

    /// The GPU output stage was asked for a link mode this model does not
    /// drive (only the HDR10 wire format is modeled).
    #[error("stage {stage}: output mode {mode} is not modeled")]
    UnsupportedOutputMode {
        /// Name of the pipeline stage.
        stage: &'static str,
        /// Requested mode.
        mode: &'static str,
    },

    /// Primary chromaticities are degenerate (collinear or coincident),
    /// so the RGB/XYZ matrix is singular.
    #[error("degenerate primaries for {space}: matrix is singular")]
    DegeneratePrimaries {
        /// Name of the color space whose primaries failed.
        space: String,
    },

    /// A 1931 xy chromaticity fell outside the valid domain
    /// (`0 <= x <= 1`, `0 < y <= 1`).
    #[error("chromaticity ({x}, {y}) outside the 1931 xy domain")]
    ChromaticityOutOfDomain {
        /// x coordinate.
        x: f32,
        /// y coordinate.
        y: f32,
    },

    /// The reference gamut triangle in a coverage computation has
    /// (near-)zero area, making the coverage ratio undefined.
    #[error("reference gamut triangle is degenerate (area {area})")]
    DegenerateReferenceGamut {
        /// Computed u'v' area of the reference triangle.
        area: f32,
    },

    /// Sample coordinates are outside the image bounds.
    #[error("sample ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was accessed.
        x: u32,
        /// Y coordinate that was accessed.
        y: u32,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },

    /// Image dimensions are unusable (zero-sized, or the sample count
    /// does not match width * height).
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Why the dimensions were rejected.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::UnsupportedFormat`] for a stage boundary.
    #[inline]
    pub fn unsupported_format(
        stage: &'static str,
        format: PixelFormat,
        color_space: ColorSpaceType,
    ) -> Self {
        Self::UnsupportedFormat {
            stage,
            format,
            color_space,
        }
    }

    /// Creates an [`Error::DegeneratePrimaries`].
    #[inline]
    pub fn degenerate_primaries(space: impl Into<String>) -> Self {
        Self::DegeneratePrimaries {
            space: space.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_boundary() {
        let err = Error::unsupported_format(
            "CompositorPresent",
            PixelFormat::Rgba8Unorm,
            ColorSpaceType::FullG2084NoneP2020,
        );
        let msg = err.to_string();
        assert!(msg.contains("CompositorPresent"));
        assert!(msg.contains("Rgba8Unorm"));
    }

    #[test]
    fn test_chromaticity_message() {
        let err = Error::ChromaticityOutOfDomain { x: 1.5, y: 0.0 };
        assert!(err.to_string().contains("1.5"));
    }
}
