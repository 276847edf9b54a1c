use clap::{Args, Parser};
use std::path::PathBuf;

use crate::errors::{CleanerError, Result};

/// Pixels brighter than this are treated as white background.
pub const DEFAULT_THRESHOLD: u8 = 240;
/// Components smaller than this many pixels are ignored.
pub const DEFAULT_MIN_BLOB_SIZE: u32 = 5000;
/// Safety margin trimmed from every side once enabled.
pub const DEFAULT_EXTRA_CROP: u32 = 18;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(default_value = "input_images")]
    pub input_dir: PathBuf,

    #[arg(default_value = "output_images")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub params: CleanParams,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Log filter (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Parameters of the per-image cleaning policy.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CleanParams {
    /// Grayscale intensity above which a pixel counts as white
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Minimum area in pixels for a blob to be kept
    #[arg(short, long, default_value_t = DEFAULT_MIN_BLOB_SIZE)]
    pub min_blob_size: u32,

    /// Extra pixels to trim from each side of the crop
    #[arg(long, default_value_t = DEFAULT_EXTRA_CROP)]
    pub extra_crop: u32,

    /// Apply `extra_crop`; off by default, in which case the crop is the bare bounding box
    #[arg(long)]
    pub apply_margin: bool,
}

impl Default for CleanParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_blob_size: DEFAULT_MIN_BLOB_SIZE,
            extra_crop: DEFAULT_EXTRA_CROP,
            apply_margin: false,
        }
    }
}

impl CleanParams {
    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub const fn with_min_blob_size(mut self, min_blob_size: u32) -> Self {
        self.min_blob_size = min_blob_size;
        self
    }

    pub const fn with_margin(mut self, extra_crop: u32, apply: bool) -> Self {
        self.extra_crop = extra_crop;
        self.apply_margin = apply;
        self
    }

    /// Margin actually removed from each side of the crop.
    pub const fn effective_margin(&self) -> u32 {
        if self.apply_margin {
            self.extra_crop
        } else {
            0
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_blob_size == 0 {
            return Err(CleanerError::Validation {
                field: "min_blob_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Config {
    /// Configuration for a run over `input_dir` with default parameters.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            params: CleanParams::default(),
            no_progress: true,
            log_level: "info".to_string(),
        }
    }

    pub fn with_params(mut self, params: CleanParams) -> Self {
        self.params = params;
        self
    }
}
