//! Directory scanning and size collection.
//!
//! This module provides the single-pass scan at the heart of the tool: a
//! non-recursive enumeration of one asset directory, keeping every file
//! whose name matches the configured extension and reading its size from
//! filesystem metadata. The scan is read-only and stateless; running it
//! twice against an unchanged directory yields identical reports.

use std::{fs, io, path::PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::{
    asset::{AudioFile, ScanReport},
    config::ScanOptions,
};

/// Errors produced by a scan.
///
/// A missing target directory is a distinct, fatal error rather than an
/// empty result, so callers can never mistake "directory absent" for
/// "directory present but empty".
#[derive(Debug, Error)]
pub enum ScanError {
    /// The target directory does not exist
    #[error("asset directory not found: {}", .0.display())]
    DirNotFound(PathBuf),

    /// The target path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A matched entry could not be read (broken symlink, permission denial)
    ///
    /// These are not transient faults in this context, so they propagate
    /// instead of being skipped or retried.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Entry that failed to stat
        path: PathBuf,
        /// Underlying filesystem error
        source: io::Error,
    },
}

/// Asset directory scanner.
///
/// Encapsulates the enumeration and sizing logic for a single directory of
/// audio assets. Construction is cheap; all filesystem work happens in
/// [`Scanner::scan`].
#[derive(Debug)]
pub struct Scanner {
    /// Configuration for the scan (directory and extension filter)
    options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner for the given options.
    #[must_use]
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scan the configured directory and collect matched file sizes.
    ///
    /// Enumerates the entries directly inside the target directory
    /// (subdirectories are ignored, not descended into), keeps the files
    /// whose extension matches the filter case-insensitively, and reads
    /// each one's byte length via a metadata query. File contents are
    /// never opened.
    ///
    /// The returned report is sorted by file name so output is
    /// reproducible regardless of the platform's enumeration order.
    ///
    /// # Errors
    ///
    /// - [`ScanError::DirNotFound`] if the directory does not exist
    /// - [`ScanError::NotADirectory`] if the path is not a directory
    /// - [`ScanError::Io`] if a matched entry cannot be stat'd
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let dir = &self.options.dir;

        match fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(ScanError::NotADirectory(dir.clone())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ScanError::DirNotFound(dir.clone()));
            }
            Err(e) => {
                return Err(ScanError::Io {
                    path: dir.clone(),
                    source: e,
                });
            }
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| dir.clone(), PathBuf::from);
                ScanError::Io {
                    path,
                    source: e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("unreadable directory entry")),
                }
            })?;

            if !entry.file_type().is_file() || !self.matches_extension(entry.path()) {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| ScanError::Io {
                path: entry.path().to_path_buf(),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("metadata unavailable")),
            })?;

            files.push(AudioFile::new(entry.into_path(), metadata.len()));
        }

        files.sort_by_key(AudioFile::file_name);

        Ok(ScanReport::new(files))
    }

    /// Whether a path's extension matches the configured filter.
    ///
    /// The filter is stored without its leading dot; comparison ignores
    /// ASCII case so `Track.MP3` matches the default `mp3` filter.
    fn matches_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.options.extension))
    }
}
