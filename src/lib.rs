pub mod cleaner;
pub mod config;
pub mod errors;
pub mod imageops;
pub mod report;
pub mod traits;

pub mod mocks;

use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

pub use cleaner::LargestBlobCleaner;
pub use config::{CleanParams, Config};
pub use errors::{CleanerError, Result};
pub use imageops::BoundingBox;
pub use report::{BatchReport, FileOutcome, SkipReason};
pub use traits::*;

/// File name suffixes treated as images, compared case-insensitively.
pub const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Runs an [`ImageCleaner`] over every image in a directory.
pub struct BatchCleaner<C: ImageCleaner> {
    cleaner: C,
    config: Config,
}

impl<C: ImageCleaner> BatchCleaner<C> {
    pub const fn new(cleaner: C, config: Config) -> Self {
        Self { cleaner, config }
    }

    /// Clean every image directly inside the input directory.
    ///
    /// Per-file problems are recorded in the report; only a missing input
    /// directory or an output directory that cannot be created is an error.
    pub fn process_directory(&self) -> Result<BatchReport> {
        let input_path = &self.config.input_dir;
        let output_path = &self.config.output_dir;

        if !input_path.is_dir() {
            return Err(CleanerError::FileSystem {
                path: input_path.clone(),
                operation: "check input directory".to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "input directory does not exist",
                ),
            });
        }

        fs::create_dir_all(output_path).map_err(|e| CleanerError::FileSystem {
            path: output_path.clone(),
            operation: "create output directory".to_string(),
            source: e,
        })?;

        let image_files = self.collect_image_files(input_path)?;
        let mut report = BatchReport::default();

        if image_files.is_empty() {
            info!("No images found in {}", input_path.display());
            return Ok(report);
        }

        let pb = self.progress_bar(image_files.len() as u64);

        for input_file in &image_files {
            let outcome = self.process_single_image(input_file, output_path);
            pb.suspend(|| log_outcome(&outcome));
            report.push(outcome);
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(report)
    }

    /// Image files directly inside `input_path`, sorted by file name.
    fn collect_image_files(&self, input_path: &Path) -> Result<Vec<PathBuf>> {
        let mut image_files = Vec::new();

        for entry in WalkDir::new(input_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            // `Path::is_file` follows symlinks; dangling links are left out.
            if path.is_file() && self.is_supported_image_format(path) {
                image_files.push(path.to_path_buf());
            }
        }

        Ok(image_files)
    }

    pub fn is_supported_image_format(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| {
            let name = name.to_string_lossy().to_lowercase();
            IMAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
        })
    }

    /// Clean one file, writing the crop under the same name in `output_dir`.
    pub fn process_single_image(&self, input_file: &Path, output_dir: &Path) -> FileOutcome {
        let skipped = |reason| FileOutcome::Skipped {
            input: input_file.to_path_buf(),
            reason,
        };

        let image = match load_rgb(input_file) {
            Ok(image) => image,
            Err(e) => return skipped(SkipReason::Unreadable(e.to_string())),
        };

        let cleaned = match self.cleaner.clean(&image) {
            Ok(Some(cleaned)) => cleaned,
            Ok(None) => return skipped(SkipReason::NoLargeObject),
            Err(e) => return skipped(SkipReason::ProcessingFailed(e.to_string())),
        };

        let Some(file_name) = input_file.file_name() else {
            return skipped(SkipReason::WriteFailed("input has no file name".to_string()));
        };
        let output_file = output_dir.join(file_name);

        if let Err(e) = cleaned.image.save(&output_file) {
            return skipped(SkipReason::WriteFailed(e.to_string()));
        }

        FileOutcome::Cleaned {
            input: input_file.to_path_buf(),
            output: output_file,
            bounding_box: cleaned.bounding_box,
        }
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if self.config.no_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

impl BatchCleaner<LargestBlobCleaner> {
    pub fn from_config(config: Config) -> Result<Self> {
        let cleaner = LargestBlobCleaner::new(config.params.clone())?;
        Ok(Self::new(cleaner, config))
    }
}

/// Clean `input_dir` into `output_dir` with the given parameters.
pub fn clean_directory(
    input_dir: impl Into<PathBuf>,
    output_dir: impl Into<PathBuf>,
    params: CleanParams,
) -> Result<BatchReport> {
    let config = Config::new(input_dir, output_dir).with_params(params);
    BatchCleaner::from_config(config)?.process_directory()
}

/// Decode by content rather than extension, turn the pixels upright per the
/// EXIF orientation tag, and drop any alpha channel.
fn load_rgb(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| CleanerError::FileSystem {
            path: path.to_path_buf(),
            operation: "open image".to_string(),
            source: e,
        })?
        .with_guessed_format()
        .map_err(|e| CleanerError::FileSystem {
            path: path.to_path_buf(),
            operation: "detect image format".to_string(),
            source: e,
        })?;

    let decode_error = |operation: &str, e: image::ImageError| CleanerError::ImageProcessing {
        path: path.display().to_string(),
        operation: operation.to_string(),
        source: Box::new(e),
    };

    let mut decoder = reader
        .into_decoder()
        .map_err(|e| decode_error("read image header", e))?;
    let orientation = decoder
        .orientation()
        .map_err(|e| decode_error("read orientation", e))?;
    let mut image =
        DynamicImage::from_decoder(decoder).map_err(|e| decode_error("decode image", e))?;
    image.apply_orientation(orientation);

    Ok(image.into_rgb8())
}

fn log_outcome(outcome: &FileOutcome) {
    let name = outcome
        .input()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match outcome {
        FileOutcome::Cleaned { bounding_box, .. } => {
            info!(bbox = %bounding_box, "Cleaned and saved: {name}");
        }
        FileOutcome::Skipped {
            reason: SkipReason::NoLargeObject,
            ..
        } => info!("No large object found in {name}, skipping."),
        FileOutcome::Skipped {
            reason: SkipReason::Unreadable(e),
            ..
        } => warn!(error = %e, "Skipping unreadable file: {name}"),
        FileOutcome::Skipped {
            reason: SkipReason::ProcessingFailed(e),
            ..
        } => warn!(error = %e, "Failed to process {name}, skipping."),
        FileOutcome::Skipped {
            reason: SkipReason::WriteFailed(e),
            ..
        } => warn!(error = %e, "Failed to save {name}, skipping."),
    }
}
