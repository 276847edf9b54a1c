//! Color to intensity conversion.
//!
//! `DynamicImage::to_luma8` uses Rec. 709 weights. Whiteness here is judged
//! with the Rec. 601 weights that common computer-vision tooling applies to
//! 8-bit images, so results line up with thresholds tuned elsewhere.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::map::map_colors;

const SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899; // 0.299 * 2^14
const G_WEIGHT: u32 = 9617; // 0.587 * 2^14
const B_WEIGHT: u32 = 1868; // 0.114 * 2^14
const ROUND: u32 = 1 << (SHIFT - 1);

const _: () = assert!(R_WEIGHT + G_WEIGHT + B_WEIGHT == 1 << SHIFT);

/// Luminance of one pixel, `0.299 R + 0.587 G + 0.114 B` in fixed point.
#[inline]
pub fn luminance(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    let y = (u32::from(r) * R_WEIGHT + u32::from(g) * G_WEIGHT + u32::from(b) * B_WEIGHT + ROUND)
        >> SHIFT;
    // Weights sum to 2^14, so y never exceeds 255.
    y as u8
}

#[must_use = "returns the intensity image"]
pub fn to_intensity(image: &RgbImage) -> GrayImage {
    map_colors(image, |pixel| Luma([luminance(pixel)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_are_preserved() {
        assert_eq!(luminance(Rgb([0, 0, 0])), 0);
        assert_eq!(luminance(Rgb([255, 255, 255])), 255);
    }

    #[test]
    fn test_gray_stays_gray() {
        for v in [1u8, 17, 128, 240, 241, 254] {
            assert_eq!(luminance(Rgb([v, v, v])), v);
        }
    }

    #[test]
    fn test_channel_weights() {
        // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
        assert_eq!(luminance(Rgb([255, 0, 0])), 76);
        assert_eq!(luminance(Rgb([0, 255, 0])), 150);
        assert_eq!(luminance(Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn test_to_intensity_keeps_dimensions() {
        let image = RgbImage::from_fn(7, 3, |x, _| Rgb([x as u8 * 30, 0, 0]));
        let gray = to_intensity(&image);
        assert_eq!(gray.dimensions(), (7, 3));
        assert_eq!(gray.get_pixel(0, 0)[0], 0);
        assert_eq!(gray.get_pixel(6, 2)[0], luminance(Rgb([180, 0, 0])));
    }
}
