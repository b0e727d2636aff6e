//! # hdrpipe-transfer
//!
//! Transfer functions (OETF/EOTF) used on the modeled display path.
//!
//! Transfer functions convert between linear light and encoded code
//! values. Each one is a pure scalar function, safe to apply per channel
//! with no cross-channel interaction; every module also exposes a `Vec3`
//! overload that lifts the scalar form to whole samples.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`srgb`] | classic SDR surfaces | [0, 1] |
//! | [`rec709`] | HDTV broadcast encode | [0, 1] |
//! | [`pq`] | HDR10 wire format (ST.2084) | 1.0 = 10,000 cd/m2 |
//! | [`gamma`] | panel profile stand-ins | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use hdrpipe_transfer::{pq, srgb};
//!
//! // Decode an sRGB surface to linear
//! let linear = srgb::eotf(0.5);
//!
//! // Encode a luminance ratio (1.0 = 10,000 cd/m2) to a PQ code value
//! let code = pq::oetf(0.01); // 100 nits
//! assert!(code > 0.0 && code < 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`hdrpipe-math`] - `Vec3` sample overloads
//!
//! # Used By
//!
//! - `hdrpipe-pipeline` - per-stage encode/decode

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod pq;
pub mod rec709;
pub mod srgb;

pub use pq::{eotf as pq_eotf, oetf as pq_oetf};
pub use rec709::{eotf as rec709_eotf, oetf as rec709_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
