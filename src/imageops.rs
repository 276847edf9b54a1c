//! Image operations behind the cleaning pipeline.
//!
//! Each step is a thin wrapper over `image`/`imageproc` so the pipeline in
//! [`crate::cleaner`] reads as a sequence of calls.

pub mod components;
pub mod crop;
pub mod grayscale;
pub mod threshold;

pub use components::{label_components, select_largest, BoundingBox, ComponentStats};
pub use crop::{crop_to_box, shrink_box};
pub use grayscale::to_intensity;
pub use threshold::non_white_mask;
