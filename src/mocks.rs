use std::cell::Cell;

use image::RgbImage;

use crate::errors::Result;
use crate::imageops::BoundingBox;
use crate::traits::{Cleaned, ImageCleaner};

/// Cleaner for tests: keeps the whole image, or finds nothing.
#[derive(Debug, Default)]
pub struct MockCleaner {
    pub find_nothing: bool,
    calls: Cell<usize>,
}

impl MockCleaner {
    pub const fn new() -> Self {
        Self {
            find_nothing: false,
            calls: Cell::new(0),
        }
    }

    pub const fn finding_nothing() -> Self {
        Self {
            find_nothing: true,
            calls: Cell::new(0),
        }
    }

    /// Number of images handed to [`ImageCleaner::clean`].
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ImageCleaner for MockCleaner {
    fn clean(&self, image: &RgbImage) -> Result<Option<Cleaned>> {
        self.calls.set(self.calls.get() + 1);
        if self.find_nothing {
            return Ok(None);
        }
        let (width, height) = image.dimensions();
        Ok(Some(Cleaned {
            image: image.clone(),
            bounding_box: BoundingBox::new(0, 0, width, height),
            area: width * height,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_mock_keeps_whole_image() -> Result<()> {
        let mock = MockCleaner::new();
        let image = RgbImage::from_pixel(4, 3, Rgb([1, 2, 3]));
        let cleaned = mock.clean(&image)?.expect("mock always finds the image");
        assert_eq!(cleaned.image, image);
        assert_eq!(cleaned.bounding_box, BoundingBox::new(0, 0, 4, 3));
        assert_eq!(mock.calls(), 1);
        Ok(())
    }

    #[test]
    fn test_mock_finding_nothing() -> Result<()> {
        let mock = MockCleaner::finding_nothing();
        assert_eq!(mock.clean(&RgbImage::new(2, 2))?, None);
        assert_eq!(mock.calls(), 1);
        Ok(())
    }
}
