//! Core data structures for scanned audio assets.
//!
//! Both types are derived fresh on every scan and discarded after output;
//! nothing here is persisted or mutated after construction.

use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

use serde::Serialize;

/// Number of bytes in one binary megabyte (MiB), the unit used throughout
/// the size report.
pub const BYTES_PER_MB: u64 = 1_048_576;

/// A single audio file found during a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AudioFile {
    /// Path to the file, as produced by directory enumeration
    pub path: PathBuf,

    /// File size in bytes, read from filesystem metadata
    pub size_bytes: u64,
}

impl AudioFile {
    /// Create a new record for a scanned file.
    #[must_use]
    pub const fn new(path: PathBuf, size_bytes: u64) -> Self {
        Self { path, size_bytes }
    }

    /// File size in binary megabytes (1 MB = 1,048,576 bytes).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB as f64
    }

    /// The file name component of the path.
    ///
    /// Enumeration only ever yields real directory entries, so the name is
    /// always present; an empty string would indicate a scanner bug.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Display for AudioFile {
    /// Format as `<name>: <size>MB` with one decimal place.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {:.1}MB", self.file_name(), self.size_mb())
    }
}

/// The complete result of one directory scan.
///
/// Invariant: `total_bytes` always equals the sum of `size_bytes` across
/// `files`, so the megabyte total matches the per-file sum up to
/// floating-point rounding.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScanReport {
    /// All matched files, sorted by file name
    pub files: Vec<AudioFile>,

    /// Sum of all file sizes in bytes
    pub total_bytes: u64,
}

impl ScanReport {
    /// Build a report from scanned files, computing the byte total.
    #[must_use]
    pub fn new(files: Vec<AudioFile>) -> Self {
        let total_bytes = files.iter().map(|f| f.size_bytes).sum();

        Self { files, total_bytes }
    }

    /// Total size in binary megabytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_mb(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MB as f64
    }

    /// Number of matched files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the scan matched no files at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
