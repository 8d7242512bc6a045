/// Progress signals emitted by the scan driver while it runs.
///
/// The driver also logs each of these through `tracing`; the callback lets a
/// frontend or test observe them without parsing log output.
use crate::error::ClassificationError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanProgress {
    /// Emitted every `PROGRESS_INTERVAL` successfully written records.
    Update {
        records_written: u64,
        skipped: u64,
        current_path: String,
    },
    /// One file could not be classified and was left out of the report.
    Skipped {
        path: PathBuf,
        reason: ClassificationError,
    },
    /// The enumerator could not read an entry (e.g. permission denied).
    WalkError {
        path: Option<PathBuf>,
        message: String,
    },
}
