//! Path Classifier — maps a discovered file onto a fixed-schema [`Record`].
//!
//! Under [`Layout::Anchored`] the path's segments are interpreted relative to
//! the single occurrence of the [`ClassificationAnchor`]; the top directory
//! below it selects a [`Branch`] and the remaining depth selects a [`Rule`].
//! Under [`Layout::ParentDirs`] only the two directories directly above the
//! file are used.
pub mod anchor;
pub mod rule;

pub use anchor::ClassificationAnchor;
pub use rule::{categorise, Branch, Categories, Rule};

use crate::error::ClassificationError;
use crate::model::{DiscoveredFile, Layout, Record};
use compact_str::CompactString;

/// Placeholder class for files with no grandparent directory at all.
pub const NO_GRANDPARENT: &str = "N/A";

/// Stateless per-file classifier. One instance serves a whole run.
#[derive(Debug, Clone)]
pub struct Classifier {
    anchor: ClassificationAnchor,
    layout: Layout,
}

impl Classifier {
    pub fn new(anchor: ClassificationAnchor, layout: Layout) -> Self {
        Self { anchor, layout }
    }

    pub fn anchor(&self) -> &ClassificationAnchor {
        &self.anchor
    }

    pub fn classify(&self, file: &DiscoveredFile) -> Result<Record, ClassificationError> {
        let segments: Vec<&str> = file.segments().collect();
        let categories = match self.layout {
            Layout::Anchored => {
                let at = self.anchor.locate(&segments)?;
                categorise(&segments[at + 1..])?
            }
            Layout::ParentDirs => Categories {
                class: file.grandparent_name().unwrap_or(NO_GRANDPARENT),
                kind: file.parent_name().unwrap_or_default(),
                ..Categories::default()
            },
        };

        Ok(Record {
            class: CompactString::new(categories.class),
            subclass: CompactString::new(categories.subclass),
            sub_subclass: CompactString::new(categories.sub_subclass),
            name: CompactString::new(file.file_name()),
            kind: CompactString::new(categories.kind),
            full_path: file.full_path().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored() -> Classifier {
        Classifier::new(ClassificationAnchor::default(), Layout::Anchored)
    }

    fn file(path: &str) -> DiscoveredFile {
        DiscoveredFile::new(path).expect("valid test path")
    }

    #[test]
    fn sew_and_trim_five_segments() {
        let path = "/home/op/cls_data/03_sew_and_trim/typeA/subB/extra/file.plt";
        let rec = anchored().classify(&file(path)).unwrap();
        assert_eq!(rec.class, "03_sew_and_trim");
        assert_eq!(rec.subclass, "typeA");
        assert_eq!(rec.sub_subclass, "extra");
        assert_eq!(rec.name, "file.plt");
        assert_eq!(rec.kind, "subB");
        assert_eq!(rec.full_path, path);
    }

    #[test]
    fn sew_and_trim_four_segments() {
        let rec = anchored()
            .classify(&file("/d/cls_data/sew_and_trim/shirt/collar/a.plt"))
            .unwrap();
        assert_eq!(rec.subclass, "shirt");
        assert_eq!(rec.kind, "collar");
        assert_eq!(rec.sub_subclass, "");
    }

    #[test]
    fn general_three_segments() {
        let rec = anchored()
            .classify(&file("/d/cls_data/widgets/typeA/file.plt"))
            .unwrap();
        assert_eq!(
            rec,
            Record {
                class: "widgets".into(),
                subclass: "".into(),
                sub_subclass: "".into(),
                name: "file.plt".into(),
                kind: "typeA".into(),
                full_path: "/d/cls_data/widgets/typeA/file.plt".into(),
            }
        );
    }

    #[test]
    fn general_four_segments() {
        let rec = anchored()
            .classify(&file("/d/cls_data/widgets/typeA/small/file.plt"))
            .unwrap();
        assert_eq!(rec.kind, "typeA");
        assert_eq!(rec.subclass, "small");
        assert_eq!(rec.sub_subclass, "");
    }

    /// Segments above the anchor never influence the record.
    #[test]
    fn prefix_above_anchor_is_ignored() {
        let a = anchored()
            .classify(&file("/a/cls_data/widgets/typeA/file.plt"))
            .unwrap();
        let b = anchored()
            .classify(&file("/x/y/z/cls_data/widgets/typeA/file.plt"))
            .unwrap();
        assert_eq!(a.class, b.class);
        assert_eq!(a.kind, b.kind);
    }

    #[test]
    fn missing_anchor_fails() {
        let err = anchored()
            .classify(&file("/d/other/widgets/typeA/file.plt"))
            .unwrap_err();
        assert!(matches!(err, ClassificationError::AnchorNotFound { .. }));
    }

    #[test]
    fn custom_anchor_name() {
        let c = Classifier::new(ClassificationAnchor::new("dataset").unwrap(), Layout::Anchored);
        let rec = c.classify(&file("/d/dataset/widgets/typeA/f.plt")).unwrap();
        assert_eq!(rec.class, "widgets");
        assert!(c
            .classify(&file("/d/cls_data/widgets/typeA/f.plt"))
            .is_err());
    }

    #[test]
    fn unexpected_depth_fails() {
        let err = anchored()
            .classify(&file("/d/cls_data/widgets/f.plt"))
            .unwrap_err();
        assert_eq!(
            err,
            ClassificationError::UnexpectedDepth {
                branch: Branch::General,
                depth: 2
            }
        );
    }

    // ── ParentDirs layout ────────────────────────────────────────────────

    #[test]
    fn parent_dirs_uses_parent_and_grandparent() {
        let c = Classifier::new(ClassificationAnchor::default(), Layout::ParentDirs);
        let rec = c.classify(&file("/no/anchor/here/f.plt")).unwrap();
        assert_eq!(rec.class, "anchor");
        assert_eq!(rec.kind, "here");
        assert_eq!(rec.name, "f.plt");
        assert_eq!(rec.subclass, "");
        assert_eq!(rec.sub_subclass, "");
    }

    /// The filesystem root counts as a grandparent with an empty name.
    #[test]
    fn parent_dirs_grandparent_is_root() {
        let c = Classifier::new(ClassificationAnchor::default(), Layout::ParentDirs);
        let rec = c.classify(&file("/top/f.plt")).unwrap();
        assert_eq!(rec.class, "");
        assert_eq!(rec.kind, "top");
    }

    #[test]
    fn parent_dirs_file_under_root_uses_placeholder() {
        let c = Classifier::new(ClassificationAnchor::default(), Layout::ParentDirs);
        let rec = c.classify(&file("/f.plt")).unwrap();
        assert_eq!(rec.class, NO_GRANDPARENT);
        assert_eq!(rec.kind, "");
    }
}
