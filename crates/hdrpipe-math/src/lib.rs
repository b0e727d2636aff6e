//! # hdrpipe-math
//!
//! Math primitives for modeling an HDR display path.
//!
//! This crate provides the small fixed-size types the color pipeline is
//! built on:
//!
//! - [`Vec2`] - 2D points for chromaticity coordinates (1931 xy, 1976 u'v')
//! - [`Vec3`] - color triplets (RGB, XYZ, Lab, Luv)
//! - [`Mat3`] - 3x3 matrices for gamut rotations and RGB/XYZ conversion
//!
//! # Convention
//!
//! Matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use hdrpipe_math::{Mat3, Vec3};
//!
//! let rec709_to_rec2020 = Mat3::from_rows([
//!     [0.6274040, 0.3292820, 0.0433136],
//!     [0.0690970, 0.9195400, 0.0113612],
//!     [0.0163916, 0.0880132, 0.8955950],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let wide = rec709_to_rec2020 * rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with SIMD-accelerated math
//!
//! # Used By
//!
//! - `hdrpipe-primaries` - RGB/XYZ matrix generation
//! - `hdrpipe-gamut` - chromaticity-plane geometry
//! - `hdrpipe-pipeline` - per-stage color transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec2;
mod vec3;

pub use mat3::*;
pub use vec2::*;
pub use vec3::*;
