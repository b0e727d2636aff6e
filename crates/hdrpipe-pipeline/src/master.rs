//! App-side mastering: exposure normalization plus peak encoding.
//!
//! Before an application presents a rendered frame, it normalizes
//! exposure so the scene average lands on diffuse mid-gray (0.18), then
//! peak-limits whatever still pokes above the encoding format's
//! ceiling: 10,000 nits for an HDR10 target, 80 nits for SDR. All
//! values are composition-space units (1.0 = 80 nits).

use crate::convert::nits_to_cccs;
use crate::tonemap::tone_map_image;
use hdrpipe_core::Image;
use hdrpipe_transfer::pq;

/// Diffuse mid-gray the scene average is exposed to.
const MID_GRAY: f32 = 0.18;

fn master_and_encode(image: &Image, max_encode_nits: f32) -> Image {
    let avg = image.average_luminance();
    let exposed = if avg > 0.0 {
        image.scaled(MID_GRAY / avg)
    } else {
        // A black frame has nothing to expose.
        image.clone()
    };
    let content_peak = exposed.peak();
    tone_map_image(&exposed, content_peak, nits_to_cccs(max_encode_nits))
}

/// Masters a frame for an HDR10 encode (10,000 nit ceiling).
pub fn hdr_master_and_encode(image: &Image) -> Image {
    master_and_encode(image, pq::MAX_NITS)
}

/// Masters a frame for an SDR encode (80 nit ceiling).
pub fn sdr_master_and_encode(image: &Image) -> Image {
    master_and_encode(image, 80.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hdrpipe_core::{luminance_rec709, Image};
    use hdrpipe_math::Vec3;

    #[test]
    fn test_average_exposed_to_mid_gray() {
        let img = Image::splat(Vec3::splat(4.0));
        let out = hdr_master_and_encode(&img);
        let avg = luminance_rec709(out.sample(0, 0).unwrap());
        assert_relative_eq!(avg, MID_GRAY, epsilon = 1e-5);
    }

    #[test]
    fn test_peaks_fit_encoding_ceiling() {
        // Average near gray, one channel blown out far past 10,000 nits.
        let samples = vec![Vec3::new(0.18, 0.18, 0.18), Vec3::new(60000.0, 0.1, 0.1)];
        let img = Image::from_samples(2, 1, samples).unwrap();
        let hdr = hdr_master_and_encode(&img);
        assert!(hdr.peak() <= nits_to_cccs(pq::MAX_NITS));
        let sdr = sdr_master_and_encode(&img);
        assert!(sdr.peak() <= 1.0);
    }

    #[test]
    fn test_black_frame_stays_black() {
        let img = Image::splat(Vec3::ZERO);
        assert_eq!(hdr_master_and_encode(&img), img);
    }
}
