//! Run configuration passed explicitly into the scan driver.

use crate::classify::ClassificationAnchor;
use crate::error::ConfigError;
use crate::model::Layout;
use std::path::PathBuf;

/// Default target extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "plt";

/// Everything one scan needs. No global state is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory scanned recursively. Must exist.
    pub root_dir: PathBuf,
    /// Report destination. Missing parent directories are created.
    pub output_path: PathBuf,
    /// File suffix filter, matched case-insensitively. A leading dot is optional.
    pub target_extension: String,
    /// Directory name marking the classification root.
    pub anchor_name: String,
    pub layout: Layout,
}

impl ScanConfig {
    pub fn new(root_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            output_path: output_path.into(),
            target_extension: DEFAULT_EXTENSION.to_owned(),
            anchor_name: ClassificationAnchor::DEFAULT.to_owned(),
            layout: Layout::default(),
        }
    }

    /// Extension without its leading dot, lowercased.
    pub fn normalized_extension(&self) -> Result<String, ConfigError> {
        let ext = self.target_extension.trim();
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if ext.is_empty() || ext.contains(['/', '\\', '.']) {
            return Err(ConfigError::InvalidExtension(self.target_extension.clone()));
        }
        Ok(ext.to_ascii_lowercase())
    }

    pub fn anchor(&self) -> Result<ClassificationAnchor, ConfigError> {
        ClassificationAnchor::new(&self.anchor_name)
    }

    /// Check every structural setting before any file is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.normalized_extension()?;
        self.anchor()?;
        Ok(())
    }
}
