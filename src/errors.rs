use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for the image cleaner.
///
/// Only batch-level failures are reported through this type. Problems with a
/// single file (unreadable input, no qualifying blob, failed write) are
/// recorded as [`crate::report::FileOutcome::Skipped`] instead, so that one
/// bad file never stops the batch.
#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Filesystem error: {operation} failed for {path:?}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Image processing error: {operation} failed (file: {path})")]
    ImageProcessing {
        path: String,
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {field} {reason}")]
    Validation { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CleanerError>;

/// Convert I/O errors to filesystem errors.
///
/// Callers that know the path and operation should build
/// [`CleanerError::FileSystem`] themselves; this is the fallback for `?`.
impl From<std::io::Error> for CleanerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("unknown"),
            operation: "unknown".to_string(),
            source: err,
        }
    }
}

/// Convert image crate errors to image processing errors.
impl From<image::ImageError> for CleanerError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageProcessing {
            path: "unknown".to_string(),
            operation: "image processing".to_string(),
            source: Box::new(err),
        }
    }
}

/// Directory walking errors carry their own path when one is known.
impl From<walkdir::Error> for CleanerError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("unknown"));
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
        Self::FileSystem {
            path,
            operation: "directory listing".to_string(),
            source,
        }
    }
}
