//! Report layouts — which columns a record is written with.

use serde::Deserialize;

/// Column set of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Six columns, classified relative to the anchor directory.
    #[default]
    Anchored,
    /// Four columns: grandparent directory as class, parent as type.
    ParentDirs,
}

const ANCHORED_HEADER: &[&str] = &[
    "class",
    "subclass",
    "sub_subclass",
    "plt_name",
    "type",
    "plt_filepath",
];

const PARENT_DIRS_HEADER: &[&str] = &["class", "plt_name", "type", "plt_filepath"];

impl Layout {
    /// Header row, written exactly once at the top of the report.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::Anchored => ANCHORED_HEADER,
            Self::ParentDirs => PARENT_DIRS_HEADER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Anchored => "anchored",
            Self::ParentDirs => "parent-dirs",
        }
    }
}
