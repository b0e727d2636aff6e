//! The stage transforms and the orchestrator that walks them.
//!
//! Each stage function takes the [`DisplayContext`] plus an image and
//! returns the image as the next stage expects it. All pixel math is a
//! pure per-sample function handed to [`Image::par_map`]; the only
//! state a stage touches is the shared metadata slot.
//!
//! Stage order and per-stage semantics:
//!
//! | Stage | In | Out | Work |
//! |-------|----|----|------|
//! | Compositor | any presentable pair | CCCS | decode to linear 709, boost SDR |
//! | GPU display | CCCS | HDR10 wire | brightness, 709->2020, PQ encode |
//! | Wire | HDR10 | HDR10 | transparent |
//! | Scaler | HDR10 | panel-native | OSD scale, PQ decode, tone-map, 2020->P3, gamma 4.0 |
//! | Panel | panel-native | light | identity |

use crate::context::{DisplayContext, CCCS_REFERENCE_WHITE_NITS};
use crate::convert::{hdr10_to_linear709, linear709_to_hdr10, nits_to_cccs};
use crate::stage::{validate, Stage};
use crate::tonemap::{needs_tone_map, tone_map_image, tone_map_rgb};
use hdrpipe_core::ColorSpaceType::*;
use hdrpipe_core::PixelFormat::*;
use hdrpipe_core::{ColorSpaceType, Error, Image, PixelFormat, Result};
use hdrpipe_primaries::matrices::{MAT_2020_TO_709, MAT_2020_TO_DCIP3, MAT_ADOBE_TO_2020};
use hdrpipe_transfer::{gamma, pq};

/// Transfer curve of legacy Adobe RGB surfaces (2.2 stand-in for the
/// true 563/256 exponent).
const ADOBE_GAMMA: f32 = 2.2;

/// Shared over-range peak policy of the present and scaler stages.
///
/// When the content peak differs from the display peak by more than the
/// 10% threshold, exactly one of two things happens: the content peak
/// is published downstream as metadata (display tone-maps), or the
/// image is tone-mapped here (metadata stays untouched). Both peaks are
/// taken in composition-space units.
fn apply_peak_policy(ctx: &DisplayContext, image: Image) -> Image {
    let display_peak = nits_to_cccs(ctx.display.peak_luminance);
    let content_peak = image.peak();
    if !needs_tone_map(content_peak, display_peak) {
        return image;
    }
    if ctx.trust_display_tonemap {
        let mut declared = ctx.display;
        declared.peak_luminance = content_peak * CCCS_REFERENCE_WHITE_NITS;
        ctx.metadata.set(declared);
        image
    } else {
        tone_map_image(&image, content_peak, display_peak)
    }
}

/// Composes a presented surface into the canonical composition space.
///
/// Output is always linear Rec.709 fp16 (CCCS, 1.0 = 80 nits):
///
/// - CCCS float input passes through
/// - HDR10 input loses its PQ curve, gains the x125 range scale, and
///   rotates 2020 -> 709
/// - Adobe RGB input loses its gamma, rotates Adobe -> 709, and gets
///   the SDR boost
/// - classic SDR input is scaled by the SDR boost
///
/// The over-range peak policy then runs on the composed result.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] when the pair is off the compositor's
/// allow-list.
pub fn compositor_present(
    ctx: &DisplayContext,
    image: &Image,
    format: PixelFormat,
    color_space: ColorSpaceType,
) -> Result<Image> {
    validate(Stage::CompositorPresent, format, color_space)?;

    let composed = match color_space {
        FullG10NoneP709 => image.clone(),
        FullG2084NoneP2020 | StudioG2084NoneP2020 => image.par_map(hdr10_to_linear709),
        FullG22NoneAdobe => {
            let boost = ctx.sdr_boost;
            image.par_map(move |s| {
                let linear_adobe = gamma::eotf_rgb(s, ADOBE_GAMMA);
                let linear709 = MAT_2020_TO_709 * (MAT_ADOBE_TO_2020 * linear_adobe);
                linear709 * boost
            })
        }
        FullG22NoneP709 => image.scaled(ctx.sdr_boost),
    };

    Ok(apply_peak_policy(ctx, composed))
}

/// Encodes the composed frame for the wire.
///
/// Applies the global brightness setting, rotates 709 -> 2020, and
/// applies the PQ curve. Output codes never exceed 1.0 (the 10,000 nit
/// ceiling); the encode clamps before the curve.
///
/// # Errors
///
/// [`Error::UnsupportedOutputMode`] when `hdr_output` is false; only
/// the HDR10 link mode is modeled.
pub fn gpu_display(ctx: &DisplayContext, image: &Image, hdr_output: bool) -> Result<Image> {
    if !hdr_output {
        return Err(Error::UnsupportedOutputMode {
            stage: Stage::GpuDisplay.name(),
            mode: "SDR",
        });
    }

    let brightness = ctx.global_brightness;
    let encoded = image.par_map(move |s| linear709_to_hdr10(s * brightness));
    debug_assert!(encoded.peak() <= 1.0);
    Ok(encoded)
}

/// The monitor's DSP: from wire signal to panel drive signal.
///
/// Applies the OSD brightness factor, removes the PQ curve, tone-maps
/// the content peak against the panel peak when their mismatch exceeds
/// the threshold, rotates 2020 to the panel's DCI-P3 primaries, and
/// encodes with the panel profile (gamma 4.0 stand-in). Output is
/// normalized so 1.0 drives the panel at its peak luminance.
pub fn scaler_scale(ctx: &DisplayContext, image: &Image) -> Image {
    let display = ctx.display;
    let content = ctx.metadata.get();
    let osd = ctx.osd_brightness;
    let mapping = needs_tone_map(content.peak_luminance, display.peak_luminance);

    image.par_map(move |s| {
        let mut nits = pq::eotf_nits_rgb(s * osd);
        if mapping {
            nits = tone_map_rgb(nits, content.peak_luminance, display.peak_luminance);
        }
        let panel_linear = MAT_2020_TO_DCIP3 * (nits / display.peak_luminance);
        gamma::oetf_rgb(panel_linear.clamp01(), gamma::PANEL_GAMMA)
    })
}

/// The panel itself: photons out, no further transform.
pub fn panel_show(image: &Image) -> Image {
    image.clone()
}

/// Walks a presented surface through the whole display path.
///
/// Compositor -> GPU display -> wire -> scaler -> panel, validating the
/// declared `(format, color space)` pair at every boundary. The wire
/// hop is transparent; it exists so the boundary is still checked.
///
/// # Errors
///
/// Any stage's validation error propagates unchanged.
pub fn run_pipeline(
    image: &Image,
    format: PixelFormat,
    color_space: ColorSpaceType,
    ctx: &DisplayContext,
) -> Result<Image> {
    let composed = compositor_present(ctx, image, format, color_space)?;

    // Compositor output is the canonical composition surface.
    let (format, color_space) = (Rgba16Float, FullG10NoneP709);
    validate(Stage::GpuDisplay, format, color_space)?;
    let wire_signal = gpu_display(ctx, &composed, true)?;

    // GPU output is the HDR10 wire format.
    let (format, color_space) = (Rgba10Unorm, FullG2084NoneP2020);
    validate(Stage::Wire, format, color_space)?;
    validate(Stage::Scaler, format, color_space)?;
    let panel_signal = scaler_scale(ctx, &wire_signal);

    Ok(panel_show(&panel_signal))
}
