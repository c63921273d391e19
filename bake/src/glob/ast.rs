//! The parsed form of a glob pattern.

use crate::glob::SegmentMatcher;

/// Where a pattern is anchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobRoot {
    /// No root: anchored at the settings root or working directory.
    Relative,
    /// Rooted at `/`.
    Unix,
    /// Rooted at a drive, holding the drive letter.
    Windows(char),
}

/// One segment of a glob pattern.
#[derive(Debug, Clone)]
pub enum Segment {
    /// A name without wildcards.
    Literal(String),
    /// A name with `*`, `?` or `[...]` tokens.
    Wildcard(SegmentMatcher),
    /// `**`: the current directory and every directory below it.
    Recursive,
    /// `..`: the parent directory.
    Parent,
}

impl Segment {
    /// Whether this segment can match more than one entry.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(_) | Self::Recursive)
    }
}

/// A parsed glob pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    pub(crate) source: String,
    pub(crate) root: GlobRoot,
    pub(crate) segments: Vec<Segment>,
}

impl GlobPattern {
    /// The pattern text this was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The root the pattern is anchored at.
    #[must_use]
    pub fn root(&self) -> &GlobRoot {
        &self.root
    }

    /// The segments after the root.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
