//! Glob pattern parsing.

use crate::error::{Error, Result};
use crate::glob::ast::{GlobPattern, GlobRoot, Segment};
use crate::glob::matcher::{has_wildcard, SegmentMatcher};
use crate::path::normalize::has_drive_letter;

/// Parse a single (already brace-expanded) pattern.
///
/// Backslashes are treated as separators. Empty and `.` segments are
/// dropped.
///
/// # Errors
///
/// Returns [`Error::NotSupported`] for UNC roots and
/// [`Error::InvalidPattern`] for malformed wildcard segments.
///
/// # Examples
///
/// ```
/// use bake::glob::{parse, GlobRoot, Segment};
///
/// let pattern = parse("/Temp/**/*.txt", true).unwrap();
/// assert_eq!(pattern.root(), &GlobRoot::Unix);
/// assert!(matches!(pattern.segments()[0], Segment::Literal(ref name) if name == "Temp"));
/// assert!(matches!(pattern.segments()[1], Segment::Recursive));
/// assert!(matches!(pattern.segments()[2], Segment::Wildcard(_)));
///
/// assert!(parse("//server/share/*", true).unwrap_err().is_not_supported());
/// ```
pub fn parse(pattern: &str, case_sensitive: bool) -> Result<GlobPattern> {
    let trimmed = pattern.trim();
    if trimmed.starts_with("\\\\") || trimmed.starts_with("//") {
        return Err(Error::NotSupported {
            message: format!("UNC paths are not supported by the globber: '{trimmed}'"),
        });
    }

    let text = trimmed.replace('\\', "/");
    let (root, rest) = split_root(&text);

    let mut segments = Vec::new();
    for part in rest.split('/') {
        let segment = match part {
            "" | "." => continue,
            ".." => Segment::Parent,
            "**" => Segment::Recursive,
            _ if has_wildcard(part) => Segment::Wildcard(SegmentMatcher::new(part, case_sensitive)?),
            _ => Segment::Literal(part.to_string()),
        };
        segments.push(segment);
    }

    Ok(GlobPattern {
        source: pattern.to_string(),
        root,
        segments,
    })
}

fn split_root(text: &str) -> (GlobRoot, &str) {
    if let Some(rest) = text.strip_prefix('/') {
        return (GlobRoot::Unix, rest);
    }
    if has_drive_letter(text) {
        let drive = text.chars().next().unwrap_or('c');
        return (GlobRoot::Windows(drive), &text[2..]);
    }
    (GlobRoot::Relative, text)
}
