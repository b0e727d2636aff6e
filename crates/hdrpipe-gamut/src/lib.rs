//! # hdrpipe-gamut
//!
//! Gamut geometry: how much of one color gamut does another cover?
//!
//! A gamut is the triangle its three primaries span on a chromaticity
//! diagram. This crate quantifies overlap and extent of such triangles:
//!
//! - [`polygon`] - Sutherland-Hodgman triangle clipping and polygon area
//! - [`coverage`] - coverage ratio of a reference gamut by a test gamut,
//!   computed in 1976 u'v' where areas are perceptually comparable
//! - [`volume`] - brute-force gamut volume estimation over a dense
//!   Lab/Luv grid
//!
//! # Usage
//!
//! ```rust
//! use hdrpipe_gamut::coverage::gamut_coverage;
//! use hdrpipe_primaries::{DCI_P3, REC2020, REC709};
//!
//! // How much of Rec.2020 does P3 reach?
//! let c = gamut_coverage(&DCI_P3, &REC2020).unwrap();
//! assert!(c > 0.7 && c < 0.8);
//!
//! // A gamut always covers itself fully.
//! let s = gamut_coverage(&REC709, &REC709).unwrap();
//! assert!((s - 1.0).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`hdrpipe-core`] - error types
//! - [`hdrpipe-math`] - `Vec2` chromaticity points
//! - [`hdrpipe-primaries`] - primaries, xy/u'v'/XYZ/Lab/Luv conversions
//! - [`rayon`] - parallel volume grid sweep
//!
//! # Used By
//!
//! - `hdrpipe-tests` - coverage/volume conformance scenarios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod coverage;
pub mod polygon;
pub mod volume;

pub use coverage::{gamut_area, gamut_coverage};
pub use polygon::{area, intersect, Polygon, Triangle};
pub use volume::{gamut_volume_lab, gamut_volume_luv};
