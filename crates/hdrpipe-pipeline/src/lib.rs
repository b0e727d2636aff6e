//! # hdrpipe-pipeline
//!
//! The staged display-path model: what happens to a frame between an
//! application's swap chain and the photons leaving the panel.
//!
//! Every hop of a real HDR display path reinterprets the image - the
//! compositor flattens windows into a canonical linear space, the GPU
//! encodes for the wire, the monitor's scaler decodes and adapts to the
//! panel. Each hop is a pure per-sample transform selected by the
//! declared `(PixelFormat, ColorSpaceType)` pair and validated against
//! a per-stage allow-list.
//!
//! # Modules
//!
//! - [`context`] - [`DisplayContext`]: settings + shared metadata
//! - [`stage`] - stage descriptors and boundary validation
//! - [`stages`] - the stage transforms and [`run_pipeline`]
//! - [`tonemap`] - knee'd peak-limiting tone mapper
//! - [`convert`] - CCCS <-> HDR10 bridges
//! - [`master`] - app-side exposure/encode helpers
//!
//! # Usage
//!
//! ```rust
//! use hdrpipe_core::{ColorSpaceType, Image, PixelFormat};
//! use hdrpipe_math::Vec3;
//! use hdrpipe_pipeline::{run_pipeline, DisplayContext};
//!
//! // A classic SDR app presents full white
//! let ctx = DisplayContext::new_typical();
//! let frame = Image::splat(Vec3::ONE);
//! let shown = run_pipeline(
//!     &frame,
//!     PixelFormat::Rgba8Unorm,
//!     ColorSpaceType::FullG22NoneP709,
//!     &ctx,
//! )
//! .unwrap();
//! assert!(shown.sample(0, 0).unwrap().in_range(0.0, 1.0));
//! ```
//!
//! # Dependencies
//!
//! - [`hdrpipe-core`] - `Image`, format tags, metadata, errors
//! - [`hdrpipe-math`] - `Vec3`/`Mat3`
//! - [`hdrpipe-primaries`] - gamut rotation matrices
//! - [`hdrpipe-transfer`] - PQ / gamma curves

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod context;
pub mod convert;
pub mod master;
pub mod stage;
pub mod stages;
pub mod tonemap;

pub use context::{DisplayContext, CCCS_REFERENCE_WHITE_NITS, DEFAULT_SDR_BOOST};
pub use convert::{hdr10_to_linear709, linear709_to_hdr10, nits_to_cccs};
pub use master::{hdr_master_and_encode, sdr_master_and_encode};
pub use stage::{validate, Stage, StageDescriptor, STAGES};
pub use stages::{compositor_present, gpu_display, panel_show, run_pipeline, scaler_scale};
pub use tonemap::{tone_map, tone_map_image, tone_map_rgb};
