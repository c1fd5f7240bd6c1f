//! # audio-assets-report
//!
//! A small CLI tool that scans a directory of audio assets, reports each
//! file's size and the total, and prints suggestions for reducing an
//! application's packaged size.
//!
//! The tool is strictly read-only: it enumerates one directory (no
//! recursion), reads file sizes from metadata, and prints a report. No
//! files are modified and nothing persists between runs.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the default asset directory
//! audio-assets-report
//!
//! # Scan a specific directory of OGG files, largest first
//! audio-assets-report path/to/assets --extension ogg --sort size
//!
//! # Machine-readable output
//! audio-assets-report --json
//! ```

mod cli;

use anyhow::Result;
use audio_assets_report::{advice, output::JsonOutput, report, scanner::Scanner};
use clap::Parser;
use cli::Cli;
use std::process::exit;

/// Entry point for the audio-assets-report application.
///
/// Handles all errors by calling [`inner_main`] and printing any error to
/// stderr before exiting with a non-zero status code. All normal runs,
/// including scans that match zero files, exit with status 0.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, runs the scan, and prints either the JSON document or
/// the human-readable report plus suggestions.
///
/// # Errors
///
/// Returns errors from target-size parsing, the directory scan (missing
/// directory, unreadable entry), or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let report_options = args.report_options()?;
    let scan_report = Scanner::new(args.scan_options()).scan()?;

    if args.json() {
        let output = JsonOutput::from_report(&scan_report, report_options.target_bytes);
        println!("{}", serde_json::to_string_pretty(&output)?);

        return Ok(());
    }

    report::print_report(&scan_report, &report_options);

    if report_options.suggestions {
        advice::print_suggestions();
    }

    Ok(())
}
