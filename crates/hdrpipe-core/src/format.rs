//! Pixel format and color space tags for pipeline boundaries.
//!
//! A surface crossing a pipeline boundary carries raw bits plus a
//! *declaration* of how those bits are to be interpreted: the bit layout
//! ([`PixelFormat`]) and the transfer function + primaries
//! ([`ColorSpaceType`]). The pair is validated at every stage transition;
//! an undeclared or mismatched pair is a configuration error, never a
//! silent fallback.
//!
//! # Usage
//!
//! ```rust
//! use hdrpipe_core::{ColorSpaceType, PixelFormat};
//!
//! // An HDR10 video surface: 10-bit fixed point, PQ curve, 2020 primaries
//! let format = PixelFormat::Rgba10Unorm;
//! let space = ColorSpaceType::FullG2084NoneP2020;
//! assert!(space.is_hdr());
//! ```

use std::fmt;

/// Bit layout of a scan-out surface.
///
/// Only the three layouts that actually occur on the modeled display path
/// are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit unsigned normalized per channel (classic SDR surfaces).
    Rgba8Unorm,
    /// 10-bit unsigned normalized color, 2-bit alpha (HDR10 wire format).
    Rgba10Unorm,
    /// 16-bit float per channel (scRGB / canonical composition surfaces).
    Rgba16Float,
}

impl PixelFormat {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgba8Unorm => "Rgba8Unorm",
            Self::Rgba10Unorm => "Rgba10Unorm",
            Self::Rgba16Float => "Rgba16Float",
        }
    }

    /// Bits per color channel.
    pub const fn bits_per_channel(self) -> u8 {
        match self {
            Self::Rgba8Unorm => 8,
            Self::Rgba10Unorm => 10,
            Self::Rgba16Float => 16,
        }
    }

    /// Whether the format stores floating-point samples.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Rgba16Float)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transfer function + primaries declaration for a surface.
///
/// Variant names follow the swap-chain convention
/// `<range><gamma><siting><primaries>`:
///
/// | Variant | Transfer | Primaries | Typical producer |
/// |---------|----------|-----------|------------------|
/// | `FullG22NoneP709` | sRGB-like gamma 2.2 | Rec.709 | classic SDR app |
/// | `FullG10NoneP709` | linear (gamma 1.0) | Rec.709 | HDR game / viewer (scRGB) |
/// | `FullG2084NoneP2020` | SMPTE ST.2084 (PQ) | Rec.2020 | HDR10 video player |
/// | `FullG22NoneAdobe` | gamma 2.2 | Adobe RGB | photo / print app |
/// | `StudioG2084NoneP2020` | PQ, studio range | Rec.2020 | broadcast chain |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpaceType {
    /// Full-range gamma-2.2 Rec.709 (classic SDR / sRGB).
    FullG22NoneP709,
    /// Full-range linear Rec.709 (scRGB, canonical composition space).
    FullG10NoneP709,
    /// Full-range PQ-encoded Rec.2020 (HDR10).
    FullG2084NoneP2020,
    /// Full-range gamma-2.2 Adobe RGB.
    FullG22NoneAdobe,
    /// Studio-range PQ-encoded Rec.2020.
    StudioG2084NoneP2020,
}

impl ColorSpaceType {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullG22NoneP709 => "FullG22NoneP709",
            Self::FullG10NoneP709 => "FullG10NoneP709",
            Self::FullG2084NoneP2020 => "FullG2084NoneP2020",
            Self::FullG22NoneAdobe => "FullG22NoneAdobe",
            Self::StudioG2084NoneP2020 => "StudioG2084NoneP2020",
        }
    }

    /// Whether samples are linear light (no transfer curve to remove).
    pub const fn is_linear(self) -> bool {
        matches!(self, Self::FullG10NoneP709)
    }

    /// Whether the declaration describes an HDR signal (PQ or scRGB).
    pub const fn is_hdr(self) -> bool {
        matches!(
            self,
            Self::FullG10NoneP709 | Self::FullG2084NoneP2020 | Self::StudioG2084NoneP2020
        )
    }

    /// Whether samples carry the SMPTE ST.2084 (PQ) curve.
    pub const fn is_pq(self) -> bool {
        matches!(self, Self::FullG2084NoneP2020 | Self::StudioG2084NoneP2020)
    }
}

impl fmt::Display for ColorSpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdr_classification() {
        assert!(ColorSpaceType::FullG2084NoneP2020.is_hdr());
        assert!(ColorSpaceType::FullG10NoneP709.is_hdr());
        assert!(!ColorSpaceType::FullG22NoneP709.is_hdr());
        assert!(!ColorSpaceType::FullG22NoneAdobe.is_hdr());
    }

    #[test]
    fn test_pq_flag() {
        assert!(ColorSpaceType::FullG2084NoneP2020.is_pq());
        assert!(!ColorSpaceType::FullG10NoneP709.is_pq());
    }

    #[test]
    fn test_format_bits() {
        assert_eq!(PixelFormat::Rgba10Unorm.bits_per_channel(), 10);
        assert!(PixelFormat::Rgba16Float.is_float());
        assert!(!PixelFormat::Rgba8Unorm.is_float());
    }
}
