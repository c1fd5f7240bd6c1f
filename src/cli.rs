//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and their defaults using
//! the [clap](https://docs.rs/clap/) library. The original workflow
//! hardcoded the asset directory and extension; here both are ordinary
//! arguments whose defaults match the original layout.

use std::path::PathBuf;

use clap::Parser;

use audio_assets_report::config::{
    DEFAULT_ASSET_DIR, DEFAULT_EXTENSION, ReportOptions, ScanOptions, SortCriteria,
};
use audio_assets_report::report::parse_size;

/// Main command-line interface structure.
#[derive(Debug, Parser)]
#[command(name = "audio-assets-report")]
#[command(
    about = "Scan a directory of audio assets, report per-file and total sizes, and suggest ways to shrink the packaged size"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Directory containing the audio assets to scan
    ///
    /// Only the entries directly inside this directory are considered;
    /// subdirectories are never descended into.
    #[arg(default_value = DEFAULT_ASSET_DIR)]
    dir: PathBuf,

    /// File extension to match, without the leading dot
    ///
    /// Matching is case-insensitive, so the default picks up both
    /// `track.mp3` and `TRACK.MP3`.
    #[arg(short = 'e', long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Packaged-size target annotated below the total
    ///
    /// Accepts plain byte counts and decimal (KB, MB, GB) or binary
    /// (KiB, MiB, GiB) units, e.g. `30MiB` or `25MB`.
    #[arg(long, default_value = "30MiB")]
    target_size: String,

    /// Sort order for the per-file lines
    #[arg(long, value_enum, default_value = "name")]
    sort: SortCriteria,

    /// Output the scan result as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, emojis, the
    /// suggestions block) is suppressed and a single JSON document is
    /// printed to stdout.
    #[arg(long)]
    json: bool,

    /// Print only the size table, without the optimization suggestions
    #[arg(long)]
    no_suggestions: bool,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Build the scan options from the parsed arguments.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            dir: self.dir.clone(),
            extension: self.extension.clone(),
        }
    }

    /// Build the report options from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if `--target-size` is not a valid size string.
    pub fn report_options(&self) -> anyhow::Result<ReportOptions> {
        Ok(ReportOptions {
            target_bytes: parse_size(&self.target_size)?,
            sort: self.sort,
            suggestions: !self.no_suggestions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["audio-assets-report"]);

        let scan = cli.scan_options();
        assert_eq!(scan.dir, PathBuf::from("assets/audio/386_Music"));
        assert_eq!(scan.extension, "mp3");

        let report = cli.report_options().expect("default target parses");
        assert_eq!(report.target_bytes, 31_457_280);
        assert_eq!(report.sort, SortCriteria::Name);
        assert!(report.suggestions);
        assert!(!cli.json());
    }

    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::parse_from([
            "audio-assets-report",
            "some/assets",
            "--extension",
            "ogg",
            "--target-size",
            "10MB",
            "--sort",
            "size",
            "--json",
            "--no-suggestions",
        ]);

        let scan = cli.scan_options();
        assert_eq!(scan.dir, PathBuf::from("some/assets"));
        assert_eq!(scan.extension, "ogg");

        let report = cli.report_options().expect("target parses");
        assert_eq!(report.target_bytes, 10_000_000);
        assert_eq!(report.sort, SortCriteria::Size);
        assert!(!report.suggestions);
        assert!(cli.json());
    }

    #[test]
    fn test_invalid_target_size_is_rejected() {
        let cli = Cli::parse_from(["audio-assets-report", "--target-size", "loud"]);

        assert!(cli.report_options().is_err());
    }
}
