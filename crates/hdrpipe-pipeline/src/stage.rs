//! Stage descriptors and boundary validation.
//!
//! The display path is a fixed linear sequence of stages. Each stage
//! publishes the `(PixelFormat, ColorSpaceType)` pairs it accepts on
//! input as a table entry rather than inline branches, so validation is
//! one lookup and the whole stage x format matrix is testable by
//! iterating the table.
//!
//! A mismatched pair is [`Error::UnsupportedFormat`] naming the stage
//! and the offending pair; the caller decides whether that aborts the
//! frame or the process.

use hdrpipe_core::ColorSpaceType::*;
use hdrpipe_core::PixelFormat::*;
use hdrpipe_core::{ColorSpaceType, Error, PixelFormat, Result};
use std::fmt;

/// A stop on the display path, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Application producing a surface.
    ApplicationRender,
    /// Compositor flattening windows into the canonical space.
    CompositorPresent,
    /// GPU scan-out hardware encoding for the wire.
    GpuDisplay,
    /// HDMI / DisplayPort link, transparent to sample values.
    Wire,
    /// DSP inside the monitor.
    Scaler,
    /// TCON and driver IC, the physical end of the line.
    Panel,
}

impl Stage {
    /// Stage name as used in error reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ApplicationRender => "ApplicationRender",
            Self::CompositorPresent => "CompositorPresent",
            Self::GpuDisplay => "GpuDisplay",
            Self::Wire => "Wire",
            Self::Scaler => "Scaler",
            Self::Panel => "Panel",
        }
    }

    /// The full path in traversal order.
    pub const SEQUENCE: [Stage; 6] = [
        Stage::ApplicationRender,
        Stage::CompositorPresent,
        Stage::GpuDisplay,
        Stage::Wire,
        Stage::Scaler,
        Stage::Panel,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input contract of one stage.
#[derive(Debug, Clone, Copy)]
pub enum AllowList {
    /// The stage consumes whatever arrives (identity stages).
    Any,
    /// Only the listed pairs are accepted.
    Pairs(&'static [(PixelFormat, ColorSpaceType)]),
}

impl AllowList {
    /// Whether the pair is on the list.
    pub fn accepts(&self, format: PixelFormat, color_space: ColorSpaceType) -> bool {
        match self {
            Self::Any => true,
            Self::Pairs(pairs) => pairs.contains(&(format, color_space)),
        }
    }
}

/// One row of the stage table: a stage and its input allow-list.
#[derive(Debug, Clone, Copy)]
pub struct StageDescriptor {
    /// The stage this row describes.
    pub stage: Stage,
    /// Pairs the stage accepts on input.
    pub accepts: AllowList,
}

/// Surface pairs an application may hand to the compositor.
const PRESENTABLE: &[(PixelFormat, ColorSpaceType)] = &[
    (Rgba8Unorm, FullG22NoneP709),
    (Rgba10Unorm, FullG22NoneP709),
    (Rgba16Float, FullG10NoneP709),
    (Rgba10Unorm, FullG2084NoneP2020),
    (Rgba10Unorm, StudioG2084NoneP2020),
    (Rgba8Unorm, FullG22NoneAdobe),
    (Rgba10Unorm, FullG22NoneAdobe),
];

/// The HDR10 wire format, the only link mode this model drives.
const HDR10_WIRE: &[(PixelFormat, ColorSpaceType)] =
    &[(Rgba10Unorm, FullG2084NoneP2020)];

/// The canonical composition surface.
const CCCS: &[(PixelFormat, ColorSpaceType)] = &[(Rgba16Float, FullG10NoneP709)];

/// The full stage table, one row per stage in path order.
pub const STAGES: [StageDescriptor; 6] = [
    StageDescriptor {
        stage: Stage::ApplicationRender,
        accepts: AllowList::Any,
    },
    StageDescriptor {
        stage: Stage::CompositorPresent,
        accepts: AllowList::Pairs(PRESENTABLE),
    },
    StageDescriptor {
        stage: Stage::GpuDisplay,
        accepts: AllowList::Pairs(CCCS),
    },
    StageDescriptor {
        stage: Stage::Wire,
        accepts: AllowList::Pairs(HDR10_WIRE),
    },
    StageDescriptor {
        stage: Stage::Scaler,
        accepts: AllowList::Pairs(HDR10_WIRE),
    },
    StageDescriptor {
        stage: Stage::Panel,
        // Panel-native encoding has no swap-chain tag; the scaler already
        // guaranteed the signal, so the panel takes what it is given.
        accepts: AllowList::Any,
    },
];

/// Looks up the descriptor for a stage.
pub fn descriptor(stage: Stage) -> &'static StageDescriptor {
    // SEQUENCE order == table order.
    &STAGES[stage as usize]
}

/// Validates a pair against a stage's allow-list.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] naming the stage and pair.
pub fn validate(
    stage: Stage,
    format: PixelFormat,
    color_space: ColorSpaceType,
) -> Result<()> {
    if descriptor(stage).accepts.accepts(format, color_space) {
        Ok(())
    } else {
        Err(Error::unsupported_format(stage.name(), format, color_space))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FORMATS: [PixelFormat; 3] = [Rgba8Unorm, Rgba10Unorm, Rgba16Float];
    const ALL_SPACES: [ColorSpaceType; 5] = [
        FullG22NoneP709,
        FullG10NoneP709,
        FullG2084NoneP2020,
        FullG22NoneAdobe,
        StudioG2084NoneP2020,
    ];

    #[test]
    fn test_table_order_matches_sequence() {
        for (i, desc) in STAGES.iter().enumerate() {
            assert_eq!(desc.stage, Stage::SEQUENCE[i]);
            assert_eq!(descriptor(desc.stage).stage, desc.stage);
        }
    }

    #[test]
    fn test_compositor_matrix() {
        // Every format x space combination, checked against the table.
        for format in ALL_FORMATS {
            for space in ALL_SPACES {
                let expected = PRESENTABLE.contains(&(format, space));
                let result = validate(Stage::CompositorPresent, format, space);
                assert_eq!(result.is_ok(), expected, "{} + {}", format, space);
            }
        }
    }

    #[test]
    fn test_hdr10_needs_ten_bits() {
        assert!(validate(Stage::CompositorPresent, Rgba10Unorm, FullG2084NoneP2020).is_ok());
        let err = validate(Stage::CompositorPresent, Rgba8Unorm, FullG2084NoneP2020)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedFormat {
                stage: "CompositorPresent",
                format: Rgba8Unorm,
                color_space: FullG2084NoneP2020,
            }
        ));
    }

    #[test]
    fn test_wire_only_carries_hdr10() {
        assert!(validate(Stage::Wire, Rgba10Unorm, FullG2084NoneP2020).is_ok());
        assert!(validate(Stage::Wire, Rgba16Float, FullG10NoneP709).is_err());
    }

    #[test]
    fn test_identity_stages_accept_anything() {
        for format in ALL_FORMATS {
            for space in ALL_SPACES {
                assert!(validate(Stage::ApplicationRender, format, space).is_ok());
                assert!(validate(Stage::Panel, format, space).is_ok());
            }
        }
    }
}
