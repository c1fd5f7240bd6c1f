//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, all human-readable output (colors,
//! emojis, suggestions) is suppressed and a single JSON document describing
//! the scan is printed to stdout instead.

use humansize::{BINARY, format_size};
use serde::Serialize;

use crate::asset::{AudioFile, ScanReport};

/// Top-level JSON document emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// One entry per matched audio file, in report order.
    pub files: Vec<JsonFileEntry>,

    /// Aggregated totals for the whole scan.
    pub summary: JsonSummary,
}

/// A single audio file in the JSON output.
#[derive(Debug, Serialize)]
pub struct JsonFileEntry {
    /// File name without the directory part.
    pub name: String,

    /// Full path as scanned.
    pub path: String,

    /// File size in bytes.
    pub size_bytes: u64,

    /// Human-readable binary-unit size (e.g. `"2 MiB"`).
    pub size_formatted: String,
}

/// Aggregated summary across all matched files.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    /// Number of matched files.
    pub total_files: usize,

    /// Total size in bytes.
    pub total_bytes: u64,

    /// Human-readable binary-unit total.
    pub total_formatted: String,

    /// Configured packaged-size target in bytes.
    pub target_bytes: u64,
}

impl JsonOutput {
    /// Build the JSON document from a scan report and the configured target.
    #[must_use]
    pub fn from_report(report: &ScanReport, target_bytes: u64) -> Self {
        Self {
            files: report.files.iter().map(JsonFileEntry::from_file).collect(),
            summary: JsonSummary {
                total_files: report.len(),
                total_bytes: report.total_bytes,
                total_formatted: format_size(report.total_bytes, BINARY),
                target_bytes,
            },
        }
    }
}

impl JsonFileEntry {
    /// Convert an [`AudioFile`] into its JSON representation.
    #[must_use]
    pub fn from_file(file: &AudioFile) -> Self {
        Self {
            name: file.file_name(),
            path: file.path.display().to_string(),
            size_bytes: file.size_bytes,
            size_formatted: format_size(file.size_bytes, BINARY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report() -> ScanReport {
        ScanReport::new(vec![
            AudioFile::new(PathBuf::from("assets/a.mp3"), 2_097_152),
            AudioFile::new(PathBuf::from("assets/b.mp3"), 1_048_576),
        ])
    }

    #[test]
    fn test_from_report_totals() {
        let output = JsonOutput::from_report(&report(), 31_457_280);

        assert_eq!(output.files.len(), 2);
        assert_eq!(output.summary.total_files, 2);
        assert_eq!(output.summary.total_bytes, 3_145_728);
        assert_eq!(output.summary.target_bytes, 31_457_280);
    }

    #[test]
    fn test_file_entry_fields() {
        let output = JsonOutput::from_report(&report(), 0);
        let entry = &output.files[0];

        assert_eq!(entry.name, "a.mp3");
        assert_eq!(entry.path, "assets/a.mp3");
        assert_eq!(entry.size_bytes, 2_097_152);
        assert_eq!(entry.size_formatted, "2 MiB");
    }

    #[test]
    fn test_serializes_to_json() {
        let output = JsonOutput::from_report(&report(), 31_457_280);
        let json = serde_json::to_string_pretty(&output).expect("serialization failed");

        assert!(json.contains("\"total_bytes\": 3145728"));
        assert!(json.contains("\"a.mp3\""));
    }
}
