//! The configured directory name that marks the root of the category tree.

use crate::error::{ClassificationError, ConfigError};
use compact_str::CompactString;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationAnchor(CompactString);

impl ClassificationAnchor {
    pub const DEFAULT: &'static str = "cls_data";

    /// Validate a configured anchor name.
    ///
    /// The anchor is matched against single path segments, so it must be one
    /// plain directory name: non-empty, no separators, not `.` or `..`.
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidAnchor(name.to_owned()));
        }
        Ok(Self(CompactString::new(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Index of the anchor among `segments`. It must occur exactly once.
    pub fn locate(&self, segments: &[&str]) -> Result<usize, ClassificationError> {
        let mut hits = segments
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == self.0.as_str())
            .map(|(i, _)| i);

        let first = hits
            .next()
            .ok_or_else(|| ClassificationError::AnchorNotFound {
                anchor: self.0.to_string(),
            })?;
        let extra = hits.count();
        if extra > 0 {
            return Err(ClassificationError::AmbiguousAnchor {
                anchor: self.0.to_string(),
                occurrences: extra + 1,
            });
        }
        Ok(first)
    }
}

impl Default for ClassificationAnchor {
    fn default() -> Self {
        Self(CompactString::new(Self::DEFAULT))
    }
}

impl fmt::Display for ClassificationAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
