use crate::errors::Result;
use crate::imageops::BoundingBox;
use image::RgbImage;

/// Result of cleaning one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Cleaned {
    pub image: RgbImage,
    /// Region of the source image that was kept.
    pub bounding_box: BoundingBox,
    /// Pixel count of the component that was kept.
    pub area: u32,
}

/// Policy applied to each decoded image.
///
/// The batch driver depends on this trait rather than a concrete cleaner so
/// that directory handling can be exercised with a stand-in.
pub trait ImageCleaner {
    /// Clean one image. `Ok(None)` means no qualifying object was found.
    fn clean(&self, image: &RgbImage) -> Result<Option<Cleaned>>;
}

impl<C: ImageCleaner + ?Sized> ImageCleaner for &C {
    fn clean(&self, image: &RgbImage) -> Result<Option<Cleaned>> {
        (**self).clean(image)
    }
}
