use image::RgbImage;
use tracing::{debug, warn};

use crate::config::CleanParams;
use crate::errors::Result;
use crate::imageops::{
    crop_to_box, label_components, non_white_mask, select_largest, shrink_box, to_intensity,
};
use crate::traits::{Cleaned, ImageCleaner};

/// Keeps the largest non-white blob of an image and crops to it.
#[derive(Debug, Clone, Default)]
pub struct LargestBlobCleaner {
    params: CleanParams,
}

impl LargestBlobCleaner {
    pub fn new(params: CleanParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }
}

impl ImageCleaner for LargestBlobCleaner {
    fn clean(&self, image: &RgbImage) -> Result<Option<Cleaned>> {
        let intensity = to_intensity(image);
        let mask = non_white_mask(&intensity, self.params.threshold);
        let components = label_components(&mask);

        let Some(largest) = select_largest(&components, self.params.min_blob_size) else {
            debug!(
                components = components.len(),
                min_blob_size = self.params.min_blob_size,
                "no component large enough"
            );
            return Ok(None);
        };

        let margin = self.params.effective_margin();
        let bounding_box = match shrink_box(largest.bounding_box, margin) {
            Some(bbox) => bbox,
            None => {
                warn!(
                    margin,
                    bbox = %largest.bounding_box,
                    "margin would remove the whole object, keeping the full bounding box"
                );
                largest.bounding_box
            }
        };

        debug!(
            area = largest.area,
            bbox = %bounding_box,
            components = components.len(),
            "selected largest component"
        );

        Ok(Some(Cleaned {
            image: crop_to_box(image, bounding_box),
            bounding_box,
            area: largest.area,
        }))
    }
}
