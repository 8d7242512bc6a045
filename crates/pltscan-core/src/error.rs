//! Error types for classification, configuration and scanning.
//!
//! Two tiers: [`ClassificationError`] is per-file and recoverable (the
//! driver logs it and moves on), everything in [`ScanError`] aborts the run.

use crate::classify::Branch;
use std::path::PathBuf;
use thiserror::Error;

/// Why one discovered file could not be mapped onto the report schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("anchor directory `{anchor}` not found in path")]
    AnchorNotFound { anchor: String },

    #[error("anchor directory `{anchor}` appears {occurrences} times in path")]
    AmbiguousAnchor { anchor: String, occurrences: usize },

    #[error("unexpected depth {depth} below anchor for {branch} branch")]
    UnexpectedDepth { branch: Branch, depth: usize },

    #[error("path is not valid UTF-8")]
    NonUtf8Path,

    #[error("path has no file name")]
    MissingFileName,
}

/// Structural misconfiguration detected before the walk starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid anchor name `{0}`: must be a single, non-empty directory name")]
    InvalidAnchor(String),

    #[error("invalid target extension `{0}`")]
    InvalidExtension(String),
}

/// Run-level failures. Rows already written stay on disk.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("root directory {} is missing or unreadable", .path.display())]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("root path {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("cannot create output directory {}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open report file {}", .path.display())]
    OpenReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing report")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
