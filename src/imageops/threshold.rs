use image::GrayImage;
use imageproc::contrast::{threshold, ThresholdType};

/// Foreground value in masks produced by [`non_white_mask`].
pub const FOREGROUND: u8 = 255;

/// Inverse binary threshold: intensity `<= cutoff` becomes [`FOREGROUND`],
/// anything brighter becomes 0.
#[must_use = "returns the binary mask"]
pub fn non_white_mask(intensity: &GrayImage, cutoff: u8) -> GrayImage {
    threshold(intensity, cutoff, ThresholdType::BinaryInverted)
}
