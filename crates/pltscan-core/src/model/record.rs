//! One output row describing a single classified file.

use super::Layout;
use compact_str::CompactString;

/// Fixed-schema description of one classified file.
///
/// `subclass` and `sub_subclass` are empty when the source path did not
/// carry that level of nesting. `name` and `full_path` always come straight
/// from the originating file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub class: CompactString,
    pub subclass: CompactString,
    pub sub_subclass: CompactString,
    pub name: CompactString,
    /// Written under the `type` column.
    pub kind: CompactString,
    pub full_path: String,
}

impl Record {
    /// Fields in the same order as `layout.header()`.
    pub fn row(&self, layout: Layout) -> Vec<&str> {
        match layout {
            Layout::Anchored => vec![
                self.class.as_str(),
                self.subclass.as_str(),
                self.sub_subclass.as_str(),
                self.name.as_str(),
                self.kind.as_str(),
                self.full_path.as_str(),
            ],
            Layout::ParentDirs => vec![
                self.class.as_str(),
                self.name.as_str(),
                self.kind.as_str(),
                self.full_path.as_str(),
            ],
        }
    }
}
