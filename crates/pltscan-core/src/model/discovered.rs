//! A single file yielded by the enumerator, before classification.

use crate::error::ClassificationError;
use std::path::{Component, Path, PathBuf};

/// An absolute file path plus its pre-validated UTF-8 views.
///
/// Non-UTF-8 paths are rejected at construction so the report's
/// `plt_filepath` column always resolves back to the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    path: PathBuf,
    full_path: String,
    file_name: String,
}

impl DiscoveredFile {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ClassificationError> {
        let path = path.into();
        let full_path = path
            .to_str()
            .ok_or(ClassificationError::NonUtf8Path)?
            .to_owned();
        let file_name = path
            .file_name()
            .ok_or(ClassificationError::MissingFileName)?
            .to_str()
            .ok_or(ClassificationError::NonUtf8Path)?
            .to_owned();
        Ok(Self {
            path,
            full_path,
            file_name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Named path components, root and drive prefix excluded.
    /// The last segment is the file name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.components().filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
    }

    /// Name of the directory directly containing the file.
    pub fn parent_name(&self) -> Option<&str> {
        self.path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
    }

    /// Name of the directory two levels up. `None` only when the file sits
    /// directly under the filesystem root; the root itself has an empty name.
    pub fn grandparent_name(&self) -> Option<&str> {
        self.path
            .parent()
            .and_then(Path::parent)
            .map(|gp| gp.file_name().and_then(|n| n.to_str()).unwrap_or(""))
    }
}
