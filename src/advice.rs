//! Static optimization advice printed below the size report.
//!
//! The advice is pure data: two fixed lists of suggestion strings fed
//! through one generic numbered-block printer. There is deliberately no
//! logic here that inspects the scan result.

use colored::Colorize;

/// High-level strategies for shrinking the packaged audio footprint.
pub const STRATEGIES: &[&str] = &[
    "Compress MP3 files to 128kbps (saves ~60%)",
    "Create 30-second preview versions (saves ~80%)",
    "Keep only 5-10 essential tracks",
    "Use OGG format for better compression",
];

/// Concrete manual steps for applying the strategies.
pub const MANUAL_STEPS: &[&str] = &[
    "Use FFmpeg: ffmpeg -i input.mp3 -b:a 128k output.mp3",
    "Use online tools: Audacity, Online Audio Converter",
    "Select only essential tracks for the app",
];

/// Print a numbered block of suggestions under a bold header.
fn print_block(header: &str, items: &[&str]) {
    println!("\n{}", header.bold());
    for (i, item) in items.iter().enumerate() {
        println!("{}. {item}", i + 1);
    }
}

/// Print both suggestion blocks to stdout.
pub fn print_suggestions() {
    print_block("🎯 Optimization Strategies:", STRATEGIES);
    print_block("🛠️ Manual Steps:", MANUAL_STEPS);
}
