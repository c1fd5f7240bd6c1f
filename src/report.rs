//! Human-readable report rendering and size parsing.
//!
//! Renders the scan result as the per-file table, total, and target
//! annotation printed in normal (non-`--json`) mode, and parses the
//! human-readable size strings accepted by `--target-size`.

use colored::Colorize;

use anyhow::{Result, bail};

use crate::{
    asset::{AudioFile, BYTES_PER_MB, ScanReport},
    config::{ReportOptions, SortCriteria},
};

/// Width of the separator rule printed around the file table.
const RULE_WIDTH: usize = 50;

/// Sort scanned files for display.
///
/// `Name` is alphabetical; `Size` puts the largest file first so the
/// biggest savings candidates appear at the top.
pub fn sort_files(files: &mut [AudioFile], sort: SortCriteria) {
    match sort {
        SortCriteria::Name => files.sort_by_key(AudioFile::file_name),
        SortCriteria::Size => files.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes)),
    }
}

/// Print the size report to stdout.
///
/// One line per file with its size at one decimal place in binary MB,
/// followed by the total and the target-size annotation. The exact
/// wording is cosmetic and not a compatibility surface.
pub fn print_report(report: &ScanReport, options: &ReportOptions) {
    let rule = "=".repeat(RULE_WIDTH);

    println!("{}", "📊 Current Audio Files Analysis:".bold());
    println!("{rule}");

    if report.is_empty() {
        println!("{}", "(no matching audio files found)".dimmed());
    }

    let mut files = report.files.clone();
    sort_files(&mut files, options.sort);

    for file in &files {
        println!("📁 {file}");
    }

    println!("{rule}");
    println!(
        "📏 Total Audio Size: {}",
        format!("{:.1}MB", report.total_mb()).bright_white()
    );
    println!("🎯 {}", target_annotation(report.total_bytes, options.target_bytes));
}

/// Build the target-size line, including the reduction needed to reach it.
fn target_annotation(total_bytes: u64, target_bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let target_mb = target_bytes as f64 / BYTES_PER_MB as f64;

    if total_bytes <= target_bytes {
        return format!("Target Size: ~{target_mb:.0}MB (already within target)");
    }

    #[allow(clippy::cast_precision_loss)]
    let reduction = (1.0 - target_bytes as f64 / total_bytes as f64) * 100.0;

    format!("Target Size: ~{target_mb:.0}MB ({reduction:.0}% reduction)")
}

/// Parse a human-readable size string into bytes.
///
/// Accepts plain byte counts and decimal (KB, MB, GB) or binary
/// (KiB, MiB, GiB) units, case-insensitively, with optional fractional
/// values like `1.5GiB`.
///
/// # Errors
///
/// Returns an error if the numeric part is missing, negative, not a
/// number, or would overflow `u64` after applying the unit multiplier.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn parse_size(size_str: &str) -> Result<u64> {
    const UNITS: &[(&str, u64)] = &[
        ("GIB", 1_073_741_824),
        ("MIB", 1_048_576),
        ("KIB", 1_024),
        ("GB", 1_000_000_000),
        ("MB", 1_000_000),
        ("KB", 1_000),
        ("B", 1),
    ];

    let upper = size_str.trim().to_uppercase();
    let (number_str, multiplier) = UNITS
        .iter()
        .find_map(|(suffix, m)| upper.strip_suffix(suffix).map(|n| (n.trim(), *m)))
        .unwrap_or((upper.as_str(), 1));

    if number_str.is_empty() {
        bail!("Invalid size: {size_str}");
    }

    let value: f64 = number_str
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size: {size_str}"))?;

    if !value.is_finite() || value < 0.0 {
        bail!("Invalid size: {size_str}");
    }

    let bytes = value * multiplier as f64;
    if bytes > u64::MAX as f64 {
        bail!("Size value overflow: {size_str}");
    }

    Ok(bytes.round() as u64)
}
