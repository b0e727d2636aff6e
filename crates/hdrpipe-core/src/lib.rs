//! # hdrpipe-core
//!
//! Core types for modeling an HDR display path.
//!
//! This crate provides the vocabulary the rest of the pipeline speaks:
//!
//! - [`Image`] - a 2D buffer of linear-float color samples
//! - [`PixelFormat`] / [`ColorSpaceType`] - how raw bits at a pipeline
//!   boundary must be interpreted
//! - [`Hdr10Metadata`] - ST.2086-shaped content/display metadata
//!   (peak, CALL/FALL, black level, primaries)
//! - [`MetadataStore`] - the process-wide "current content metadata" slot
//! - [`Error`] - typed failures for format validation and bounds checks
//!
//! # Design
//!
//! Every sample is `[f32; 3]`; bit depth and encoding are *declared* by a
//! `(PixelFormat, ColorSpaceType)` pair rather than baked into the buffer
//! type. Each pipeline stage validates the declared pair against its
//! allow-list before touching pixels, so a mis-declared surface fails fast
//! with a structured error instead of producing plausible wrong colors.
//!
//! # Dependencies
//!
//! - [`hdrpipe-math`] - `Vec2`/`Vec3` sample types
//! - [`thiserror`] - error derives
//! - [`rayon`] - parallel per-pixel application
//! - [`half`] - fp16 surface interop (scRGB render targets)
//!
//! # Used By
//!
//! - `hdrpipe-pipeline` - stage transforms and orchestration
//! - `hdrpipe-tests` - end-to-end scenarios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod image;
pub mod metadata;

pub use error::{Error, Result};
pub use format::{ColorSpaceType, PixelFormat};
pub use image::{luminance_rec709, Image, HALF_MAX};
pub use metadata::{DisplayCharacteristics, Hdr10Metadata, MetadataStore};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{ColorSpaceType, PixelFormat};
    pub use crate::image::{luminance_rec709, Image};
    pub use crate::metadata::{DisplayCharacteristics, Hdr10Metadata, MetadataStore};
}
