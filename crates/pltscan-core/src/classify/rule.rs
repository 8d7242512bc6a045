//! Branch-dependent depth rules.
//!
//! The number of segments below the anchor differs between branches of the
//! dataset tree. Each accepted `(branch, depth)` pair maps to exactly one
//! [`Rule`]; every other pair is rejected.

use crate::error::ClassificationError;
use std::fmt;

/// Which classification rule family applies, chosen by the top-level
/// directory directly under the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    SewAndTrim,
    General,
}

impl Branch {
    pub const SEW_AND_TRIM: &'static str = "sew_and_trim";

    /// Leading ASCII digits and underscores are ignored, so `03_sew_and_trim`
    /// selects [`Branch::SewAndTrim`]. Suffixes are not stripped.
    pub fn of(top_segment: &str) -> Self {
        let stripped = top_segment.trim_start_matches(|c: char| c.is_ascii_digit() || c == '_');
        if stripped == Self::SEW_AND_TRIM {
            Self::SewAndTrim
        } else {
            Self::General
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SewAndTrim => f.write_str("sew_and_trim"),
            Self::General => f.write_str("general"),
        }
    }
}

/// A named field-assignment rule for one accepted `(branch, depth)` pair.
/// Depth counts the relative segments including the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `class/subclass/type/file`
    SewAndTrimShallow,
    /// `class/subclass/type/sub_subclass/file`
    SewAndTrimDeep,
    /// `class/type/file`
    GeneralFlat,
    /// `class/type/subclass/file`
    GeneralNested,
}

impl Rule {
    pub fn select(branch: Branch, depth: usize) -> Result<Self, ClassificationError> {
        match (branch, depth) {
            (Branch::SewAndTrim, 4) => Ok(Self::SewAndTrimShallow),
            (Branch::SewAndTrim, 5) => Ok(Self::SewAndTrimDeep),
            (Branch::General, 3) => Ok(Self::GeneralFlat),
            (Branch::General, 4) => Ok(Self::GeneralNested),
            _ => Err(ClassificationError::UnexpectedDepth { branch, depth }),
        }
    }

    pub fn depth(self) -> usize {
        match self {
            Self::GeneralFlat => 3,
            Self::SewAndTrimShallow | Self::GeneralNested => 4,
            Self::SewAndTrimDeep => 5,
        }
    }

    /// `rel` must hold exactly `self.depth()` segments.
    fn assign<'a>(self, rel: &[&'a str]) -> Categories<'a> {
        debug_assert_eq!(rel.len(), self.depth());
        match self {
            Self::SewAndTrimShallow => Categories {
                class: rel[0],
                subclass: rel[1],
                sub_subclass: "",
                kind: rel[2],
            },
            Self::SewAndTrimDeep => Categories {
                class: rel[0],
                subclass: rel[1],
                sub_subclass: rel[3],
                kind: rel[2],
            },
            Self::GeneralFlat => Categories {
                class: rel[0],
                subclass: "",
                sub_subclass: "",
                kind: rel[1],
            },
            Self::GeneralNested => Categories {
                class: rel[0],
                subclass: rel[2],
                sub_subclass: "",
                kind: rel[1],
            },
        }
    }
}

/// The four category columns recovered from a relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Categories<'a> {
    pub class: &'a str,
    pub subclass: &'a str,
    pub sub_subclass: &'a str,
    pub kind: &'a str,
}

/// Map the segments strictly after the anchor (file name last) onto the
/// category columns.
pub fn categorise<'a>(rel: &[&'a str]) -> Result<Categories<'a>, ClassificationError> {
    let branch = rel.first().map_or(Branch::General, |top| Branch::of(top));
    let rule = Rule::select(branch, rel.len())?;
    Ok(rule.assign(rel))
}
