//! # audio-assets-report
//!
//! Library crate backing the `audio-assets-report` CLI tool, which scans a
//! directory of bundled audio assets, reports their sizes, and prints
//! suggestions for reducing an application's packaged size.
//!
//! The scan is a single non-recursive pass over one directory: every entry
//! whose name matches the configured extension is stat'd (metadata only,
//! file contents are never read) and collected into a [`ScanReport`] with a
//! running byte total. Nothing is modified on disk and nothing persists
//! between runs.
//!
//! ## Main Parts
//!
//! - [`Scanner`] - Performs the directory scan and size collection
//! - [`ScanReport`] / [`AudioFile`] - The collected results
//! - [`ScanOptions`] / [`ReportOptions`] - Configuration with documented defaults
//! - [`output::JsonOutput`] - Structured output for `--json` mode

pub mod advice;
pub mod asset;
pub mod config;
pub mod output;
pub mod report;
pub mod scanner;

pub use asset::{AudioFile, ScanReport};
pub use config::{ReportOptions, ScanOptions, SortCriteria};
pub use scanner::{ScanError, Scanner};
