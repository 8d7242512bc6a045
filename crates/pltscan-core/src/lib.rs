/// pltscan core — path classification, scanning and report writing.
///
/// This crate contains all domain logic with no CLI dependencies.
///
/// # Modules
///
/// - [`model`] — Discovered files, report records and layouts.
/// - [`classify`] — Anchor lookup and branch-dependent depth rules.
/// - [`scanner`] — Sorted serial enumeration and the scan driver.
/// - [`report`] — BOM-prefixed CSV report writer.
/// - [`config`] — Explicit run configuration.
/// - [`error`] — Per-file and run-level error types.
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use config::ScanConfig;
pub use error::{ClassificationError, ConfigError, ScanError};
pub use scanner::{run_scan, run_scan_with_progress, ScanSummary};
