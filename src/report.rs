use std::fmt;
use std::path::{Path, PathBuf};

use crate::imageops::BoundingBox;

/// Why a file produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file could not be decoded as an image.
    Unreadable(String),
    /// No component reached the minimum blob size.
    NoLargeObject,
    /// The cleaner reported an error for this image.
    ProcessingFailed(String),
    /// The crop was computed but could not be written.
    WriteFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(e) => write!(f, "unreadable: {e}"),
            Self::NoLargeObject => f.write_str("no large object found"),
            Self::ProcessingFailed(e) => write!(f, "processing failed: {e}"),
            Self::WriteFailed(e) => write!(f, "write failed: {e}"),
        }
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Cleaned {
        input: PathBuf,
        output: PathBuf,
        bounding_box: BoundingBox,
    },
    Skipped {
        input: PathBuf,
        reason: SkipReason,
    },
}

impl FileOutcome {
    pub fn input(&self) -> &Path {
        match self {
            Self::Cleaned { input, .. } | Self::Skipped { input, .. } => input,
        }
    }

    pub const fn is_cleaned(&self) -> bool {
        matches!(self, Self::Cleaned { .. })
    }
}

/// Outcomes of a batch, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn cleaned(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_cleaned())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_cleaned())
    }

    pub fn cleaned_count(&self) -> usize {
        self.cleaned().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcome recorded for a file name, if it was a candidate.
    pub fn find(&self, file_name: &str) -> Option<&FileOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.input().file_name().is_some_and(|n| n == file_name))
    }
}
