//! Relative path resolution between two absolute directories.

use crate::error::{Error, Result};
use crate::path::{helpers, normalize, DirectoryPath, NormalizedPath};

/// Compute the shortest relative path leading from `from` to `to`.
///
/// Both paths must be absolute and share their first segment: the drive
/// (`c:`), the UNC server, or the top-level directory under `/` (the bare
/// root `/` is a first segment of its own). Identical paths resolve to
/// `"."`.
///
/// # Errors
///
/// Returns [`Error::InvalidOperation`] if either path is relative or the
/// first segments differ.
///
/// # Examples
///
/// ```
/// use bake::path::{relative::resolve_relative, DirectoryPath};
///
/// let from = DirectoryPath::new("/builds/gitlab-org/gitlab-ce").unwrap();
/// let to = DirectoryPath::new("/builds/gitlab-org/other").unwrap();
/// assert_eq!(resolve_relative(&from, &to).unwrap().full_path(), "../other");
///
/// assert_eq!(resolve_relative(&from, &from).unwrap().full_path(), ".");
///
/// let elsewhere = DirectoryPath::new("/srv/cache").unwrap();
/// assert!(resolve_relative(&from, &elsewhere).unwrap_err().is_invalid_operation());
/// ```
pub fn resolve_relative(from: &DirectoryPath, to: &DirectoryPath) -> Result<DirectoryPath> {
    if to.is_relative() {
        return Err(Error::invalid_operation(
            "Target path must be an absolute path.",
        ));
    }
    if from.is_relative() {
        return Err(Error::invalid_operation(
            "Source path must be an absolute path.",
        ));
    }

    let (from_first, from_segments) = split_first(from);
    let (to_first, to_segments) = split_first(to);

    if !same_first_segment(&from_first, &to_first) {
        return Err(Error::invalid_operation(
            "Paths must share a common prefix.",
        ));
    }

    if from.full_path() == to.full_path() {
        return DirectoryPath::new(".");
    }

    let shared = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative: Vec<&str> = vec![".."; from_segments.len() - shared];
    relative.extend(&to_segments[shared..]);

    let combined = helpers::combine(&relative);
    if combined.is_empty() {
        DirectoryPath::new(".")
    } else {
        DirectoryPath::new(&combined)
    }
}

/// Split an absolute path into its first segment and the segments after it.
///
/// The first segment keeps its root marker: `/a/b` gives `("/a", ["b"])`,
/// `/` gives `("/", [])`, `c:/a` gives `("c:", ["a"])` and a UNC path gives
/// the `\\\\server` prefix.
fn split_first(path: &NormalizedPath) -> (String, Vec<&str>) {
    if path.is_unc() {
        let segments = path.segments();
        let first = segments
            .first()
            .map_or_else(String::new, |server| format!("\\\\{server}"));
        let rest = segments.iter().skip(1).map(String::as_str).collect();
        return (first, rest);
    }

    let full_path = path.full_path();
    let mut parts = full_path.split('/').filter(|part| !part.is_empty());
    if full_path.starts_with('/') {
        return match parts.next() {
            Some(first) => (format!("/{first}"), parts.collect()),
            None => ("/".to_string(), Vec::new()),
        };
    }

    let first = parts.next().unwrap_or_default().to_string();
    (first, parts.collect())
}

/// Drive letters compare without case; every other segment is ordinal.
fn same_first_segment(from: &str, to: &str) -> bool {
    if normalize::has_drive_letter(from) && normalize::has_drive_letter(to) {
        from.eq_ignore_ascii_case(to)
    } else {
        from == to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(raw: &str) -> DirectoryPath {
        DirectoryPath::new(raw).unwrap()
    }

    fn resolve(from: &str, to: &str) -> Result<DirectoryPath> {
        resolve_relative(&dir(from), &dir(to))
    }

    #[test]
    fn test_sibling_directory() {
        let result = resolve("/builds/gitlab-org/gitlab-ce", "/builds/gitlab-org/other").unwrap();
        assert_eq!(result.full_path(), "../other");
    }

    #[test]
    fn test_identical_paths() {
        assert_eq!(resolve("/a/b", "/a/b").unwrap().full_path(), ".");
    }

    #[test]
    fn test_descendant() {
        assert_eq!(resolve("/a", "/a/b/c").unwrap().full_path(), "b/c");
    }

    #[test]
    fn test_ancestor() {
        assert_eq!(resolve("/a/b/c", "/a").unwrap().full_path(), "../..");
    }

    #[test]
    fn test_different_first_segment_fails() {
        let err = resolve("/a/b", "/c/d").unwrap_err();
        assert!(err.is_invalid_operation());
        assert_eq!(err.to_string(), "Paths must share a common prefix.");
    }

    #[test]
    fn test_first_segment_is_compared_ordinally() {
        assert!(resolve("/Repo/src", "/repo/src").is_err());
    }

    #[test]
    fn test_bare_root_is_its_own_first_segment() {
        assert_eq!(resolve("/", "/").unwrap().full_path(), ".");
        assert!(resolve("/", "/a").unwrap_err().is_invalid_operation());
        assert!(resolve("/a", "/").unwrap_err().is_invalid_operation());
    }

    #[test]
    fn test_shared_first_segment_only() {
        assert_eq!(resolve("/a/b/c", "/a/d").unwrap().full_path(), "../../d");
    }

    #[test]
    fn test_relative_source_fails() {
        let err = resolve("a/b", "/a/b").unwrap_err();
        assert!(err.is_invalid_operation());
        assert!(err.to_string().contains("Source path"));
    }

    #[test]
    fn test_relative_target_fails() {
        let err = resolve("/a/b", "a/b").unwrap_err();
        assert!(err.is_invalid_operation());
        assert!(err.to_string().contains("Target path"));
    }

    #[test]
    fn test_unc_different_servers_fail() {
        let err = resolve("\\\\one\\share", "\\\\two\\share").unwrap_err();
        assert!(err.to_string().contains("common prefix"));
    }

    #[test]
    #[cfg(windows)]
    fn test_same_drive_ignores_case() {
        assert_eq!(resolve("C:/a/b", "c:/a/c").unwrap().full_path(), "../c");
    }

    #[test]
    #[cfg(windows)]
    fn test_different_drives_fail() {
        let err = resolve("c:/a", "d:/a").unwrap_err();
        assert!(err.to_string().contains("common prefix"));
    }
}
