use image::{imageops, RgbImage};

use super::BoundingBox;

/// Shrink `bbox` by `margin` on every side.
///
/// Returns `None` when nothing would remain.
pub fn shrink_box(bbox: BoundingBox, margin: u32) -> Option<BoundingBox> {
    let trimmed = margin.checked_mul(2)?;
    if bbox.width <= trimmed || bbox.height <= trimmed {
        return None;
    }
    Some(BoundingBox::new(
        bbox.x + margin,
        bbox.y + margin,
        bbox.width - trimmed,
        bbox.height - trimmed,
    ))
}

/// Copy the region `bbox` out of `image`. The box is clamped to the image.
#[must_use = "returns the cropped image"]
pub fn crop_to_box(image: &RgbImage, bbox: BoundingBox) -> RgbImage {
    imageops::crop_imm(image, bbox.x, bbox.y, bbox.width, bbox.height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_zero_margin_is_identity() {
        let bbox = BoundingBox::new(10, 10, 80, 60);
        assert_eq!(shrink_box(bbox, 0), Some(bbox));
    }

    #[test]
    fn test_margin_trims_every_side() {
        let bbox = BoundingBox::new(10, 10, 80, 60);
        assert_eq!(shrink_box(bbox, 18), Some(BoundingBox::new(28, 28, 44, 24)));
    }

    #[test]
    fn test_margin_consuming_box() {
        let bbox = BoundingBox::new(0, 0, 36, 100);
        assert_eq!(shrink_box(bbox, 18), None);
        assert_eq!(shrink_box(bbox, u32::MAX), None);
    }

    #[test]
    fn test_crop_copies_region() {
        let image = RgbImage::from_fn(10, 10, |x, y| Rgb([x as u8, y as u8, 0]));
        let cropped = crop_to_box(&image, BoundingBox::new(2, 3, 4, 5));
        assert_eq!(cropped.dimensions(), (4, 5));
        assert_eq!(*cropped.get_pixel(0, 0), Rgb([2, 3, 0]));
        assert_eq!(*cropped.get_pixel(3, 4), Rgb([5, 7, 0]));
    }
}
