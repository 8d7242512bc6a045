/// Scan Driver — pulls files from the enumerator, classifies each one and
/// streams the resulting records into the report.
///
/// The run is single-threaded and synchronous. Per-file classification
/// failures are logged, counted and skipped; configuration and I/O failures
/// abort the run. Rows already written stay on disk either way.
pub mod progress;
pub mod walk;

use crate::classify::Classifier;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::model::size::{format_count, format_size};
use crate::model::{DiscoveredFile, Layout};
use crate::report::ReportWriter;
use progress::ScanProgress;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use walk::WalkEvent;

/// A progress update is emitted every this many written records.
pub const PROGRESS_INTERVAL: u64 = 1_000;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Canonical root that was walked.
    pub root_dir: PathBuf,
    pub output_path: PathBuf,
    pub records_written: u64,
    /// Files that matched the filter but failed classification.
    pub skipped: u64,
    /// Entries the enumerator could not read.
    pub walk_errors: u64,
    pub bytes_written: u64,
    pub duration: Duration,
}

impl ScanSummary {
    /// One-line human-readable summary.
    pub fn describe(&self) -> String {
        let mut line = format!(
            "Done: {} files written to {} ({})",
            format_count(self.records_written),
            self.output_path.display(),
            format_size(self.bytes_written),
        );
        if self.skipped > 0 {
            line.push_str(&format!(", {} skipped", format_count(self.skipped)));
        }
        if self.walk_errors > 0 {
            line.push_str(&format!(
                ", {} unreadable entries",
                format_count(self.walk_errors)
            ));
        }
        line
    }
}

/// Run a scan with no progress observer.
pub fn run_scan(config: &ScanConfig) -> Result<ScanSummary, ScanError> {
    run_scan_with_progress(config, |_| {})
}

/// Run a scan, reporting progress through `on_progress` as well as `tracing`.
pub fn run_scan_with_progress<F>(
    config: &ScanConfig,
    mut on_progress: F,
) -> Result<ScanSummary, ScanError>
where
    F: FnMut(&ScanProgress),
{
    let start = Instant::now();

    config.validate()?;
    let extension = config.normalized_extension()?;
    let classifier = Classifier::new(config.anchor()?, config.layout);
    let root = resolve_root(&config.root_dir)?;

    info!(
        "Scanning {} for .{} files ({} layout)",
        root.display(),
        extension,
        config.layout.label()
    );
    let anchor_in_root = root.iter().any(|c| c == classifier.anchor().as_str());
    if config.layout == Layout::Anchored && !anchor_in_root {
        warn!(
            "Anchor `{}` is not part of the root path; files without it below the root will be skipped",
            classifier.anchor()
        );
    }

    let mut report = ReportWriter::create(&config.output_path, config.layout)?;
    let report_path =
        fs::canonicalize(report.path()).unwrap_or_else(|_| report.path().to_path_buf());

    let mut skipped: u64 = 0;
    let mut walk_errors: u64 = 0;

    for event in walk::matching_files(&root, &extension) {
        let path = match event {
            WalkEvent::Match(path) => path,
            WalkEvent::Error { path, message } => {
                walk_errors += 1;
                let shown = path
                    .as_deref()
                    .map_or_else(|| "<unknown>".into(), |p| p.display().to_string());
                warn!("Cannot read {}: {}", shown, message);
                on_progress(&ScanProgress::WalkError { path, message });
                continue;
            }
        };

        // The report may sit inside the tree it describes.
        if path == report_path {
            continue;
        }

        let classified =
            DiscoveredFile::new(path.as_path()).and_then(|f| classifier.classify(&f));
        match classified {
            Ok(record) => {
                report.write(&record)?;
                debug!("{} -> {}/{}", record.full_path, record.class, record.kind);

                let written = report.rows_written();
                if written % PROGRESS_INTERVAL == 0 {
                    info!("Processed {} files...", format_count(written));
                    on_progress(&ScanProgress::Update {
                        records_written: written,
                        skipped,
                        current_path: record.full_path,
                    });
                }
            }
            Err(reason) => {
                skipped += 1;
                warn!("Skipping {}: {}", path.display(), reason);
                on_progress(&ScanProgress::Skipped { path, reason });
            }
        }
    }

    let records_written = report.rows_written();
    let bytes_written = report.finish()?;

    let summary = ScanSummary {
        root_dir: root,
        output_path: report_path,
        records_written,
        skipped,
        walk_errors,
        bytes_written,
        duration: start.elapsed(),
    };
    debug!("{} in {:?}", summary.describe(), summary.duration);
    Ok(summary)
}

/// Canonicalise the root and make sure it is a readable directory.
fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let unavailable = |source| ScanError::RootUnavailable {
        path: root.to_path_buf(),
        source,
    };
    let root = fs::canonicalize(root).map_err(unavailable)?;
    if !root.is_dir() {
        return Err(ScanError::RootNotDirectory(root));
    }
    fs::read_dir(&root).map_err(unavailable)?;
    Ok(root)
}
