//! Scan and report configuration.
//!
//! The original workflow hardcoded both the asset directory and the file
//! extension; here they are explicit parameters with the same values as
//! documented defaults, so the scanning logic stays reusable and testable
//! against any directory layout.

use std::path::PathBuf;

use clap::ValueEnum;

/// Directory scanned when no path is given on the command line.
pub const DEFAULT_ASSET_DIR: &str = "assets/audio/386_Music";

/// Extension matched when none is given on the command line.
pub const DEFAULT_EXTENSION: &str = "mp3";

/// Packaged-size target annotated in the report, in bytes (30 MiB).
pub const DEFAULT_TARGET_BYTES: u64 = 30 * 1024 * 1024;

/// Configuration for a single asset scan.
///
/// A scan looks only at the entries directly inside `dir`; subdirectories
/// are never descended into.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Directory containing the audio assets
    pub dir: PathBuf,

    /// File extension to match, without the leading dot (e.g. `mp3`)
    ///
    /// Matching is case-insensitive, so `Track.MP3` is picked up by the
    /// default filter.
    pub extension: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_ASSET_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Sort order applied to scanned files before display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortCriteria {
    /// Alphabetical by file name (default)
    #[default]
    Name,

    /// Largest file first
    Size,
}

/// Configuration for report rendering.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Target packaged size annotated below the total, in bytes
    pub target_bytes: u64,

    /// Order in which per-file lines are printed
    pub sort: SortCriteria,

    /// Whether to print the optimization suggestions block
    pub suggestions: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            target_bytes: DEFAULT_TARGET_BYTES,
            sort: SortCriteria::default(),
            suggestions: true,
        }
    }
}
