//! Collapsing of `.` and `..` segments.
//!
//! Collapsing is purely textual: it never touches the filesystem and never
//! follows symlinks. A `..` segment pops the previous segment unless only the
//! first (root) entry remains, so a collapsed path can never climb above its
//! own root token.

use crate::path::normalize::UNC_PREFIX;
use crate::path::NormalizedPath;

/// Collapse `.` and `..` segments in `path`.
///
/// An empty result becomes `"."`.
///
/// # Examples
///
/// ```
/// use bake::path::{collapse, NormalizedPath};
///
/// let path = NormalizedPath::new("/hello/../../../../../../temp").unwrap();
/// assert_eq!(collapse::collapse(&path), "/temp");
///
/// let path = NormalizedPath::new("c:/../../../../../../temp").unwrap();
/// assert_eq!(collapse::collapse(&path), "c:/temp");
///
/// let path = NormalizedPath::new("/a/./b/../c").unwrap();
/// assert_eq!(collapse::collapse(&path), "/a/c");
/// ```
#[must_use]
pub fn collapse(path: &NormalizedPath) -> String {
    if path.is_unc() {
        let body = &path.full_path()[UNC_PREFIX.len()..];
        let collapsed = collapse_str(body, '\\');
        return format!("{UNC_PREFIX}{collapsed}");
    }
    collapse_str(path.full_path(), '/')
}

/// Collapse a raw string split on `separator`.
#[must_use]
pub fn collapse_str(path: &str, separator: char) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split(separator) {
        match segment {
            "." => {}
            ".." => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            _ => stack.push(segment),
        }
    }

    let mut collapsed = stack.join(&separator.to_string());

    // Only the root token survived: keep it a root.
    if collapsed.is_empty() && path.starts_with(separator) {
        return separator.to_string();
    }
    if collapsed.len() == 2 && collapsed.ends_with(':') {
        collapsed.push(separator);
    }

    if collapsed.is_empty() {
        ".".to_string()
    } else {
        collapsed
    }
}
