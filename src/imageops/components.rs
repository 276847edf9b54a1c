//! Connected-component statistics and largest-blob selection.
//!
//! Labeling itself is [`imageproc::region_labelling::connected_components`];
//! this module only gathers per-component area and bounding box from the
//! label image and applies the selection policy.

use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box covering a single pixel.
    const fn at(x: u32, y: u32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Grow to include `(x, y)`.
    fn include(&mut self, x: u32, y: u32) {
        let right = (self.x + self.width).max(x + 1);
        let bottom = (self.y + self.height).max(y + 1);
        self.x = self.x.min(x);
        self.y = self.y.min(y);
        self.width = right - self.x;
        self.height = bottom - self.y;
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Area and extent of one connected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentStats {
    pub label: u32,
    pub area: u32,
    pub bounding_box: BoundingBox,
}

/// Label the foreground of `mask` with 8-connectivity and collect stats.
///
/// Components are returned in raster order of their first pixel, so the
/// result does not depend on how the labeling routine numbers them.
pub fn label_components(mask: &GrayImage) -> Vec<ComponentStats> {
    let labels = connected_components(mask, Connectivity::Eight, Luma([0u8]));

    // Slot per label; labels are dense in 1..=n.
    let mut slots: Vec<Option<usize>> = Vec::new();
    let mut stats: Vec<ComponentStats> = Vec::new();

    for (x, y, pixel) in labels.enumerate_pixels() {
        let label = pixel[0];
        if label == 0 {
            continue;
        }
        let slot = label as usize;
        if slot >= slots.len() {
            slots.resize(slot + 1, None);
        }
        match slots[slot] {
            Some(index) => {
                let component = &mut stats[index];
                component.area += 1;
                component.bounding_box.include(x, y);
            }
            None => {
                slots[slot] = Some(stats.len());
                stats.push(ComponentStats {
                    label,
                    area: 1,
                    bounding_box: BoundingBox::at(x, y),
                });
            }
        }
    }

    stats
}

/// Largest component with `area >= min_area`.
///
/// A later component only replaces the current best when strictly larger,
/// so ties go to the component found first.
pub fn select_largest(components: &[ComponentStats], min_area: u32) -> Option<ComponentStats> {
    components
        .iter()
        .filter(|c| c.area >= min_area)
        .fold(None, |best: Option<&ComponentStats>, c| match best {
            Some(b) if c.area <= b.area => Some(b),
            _ => Some(c),
        })
        .copied()
}
