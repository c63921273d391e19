//! String-level helpers over normalized paths.
//!
//! These functions work on the last segment of a path and never touch the
//! filesystem.

/// Combine raw segments with `/`, skipping empty ones.
///
/// # Examples
///
/// ```
/// use bake::path::helpers::combine;
///
/// assert_eq!(combine(&["..", "..", "other"]), "../../other");
/// assert_eq!(combine(&["a", "", "b"]), "a/b");
/// assert_eq!(combine::<&str>(&[]), "");
/// ```
#[must_use]
pub fn combine<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// The last segment of `path`, split on either separator.
///
/// # Examples
///
/// ```
/// use bake::path::helpers::filename;
///
/// assert_eq!(filename("/temp/hello.txt"), "hello.txt");
/// assert_eq!(filename("hello.txt"), "hello.txt");
/// assert_eq!(filename("\\\\server\\share\\a.txt"), "a.txt");
/// ```
#[must_use]
pub fn filename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// The extension of the last segment of `path`, including the dot.
///
/// Returns `None` when the filename has no dot or ends with one.
///
/// # Examples
///
/// ```
/// use bake::path::helpers::extension;
///
/// assert_eq!(extension("/temp/hello.txt"), Some(".txt"));
/// assert_eq!(extension("/temp/archive.tar.gz"), Some(".gz"));
/// assert_eq!(extension("/temp.d/hello"), None);
/// assert_eq!(extension("/temp/hello."), None);
/// ```
#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    let name = filename(path);
    let index = name.rfind('.')?;
    if index == name.len() - 1 {
        return None;
    }
    Some(&name[index..])
}

/// The last segment of `path` without its extension.
///
/// # Examples
///
/// ```
/// use bake::path::helpers::filename_without_extension;
///
/// assert_eq!(filename_without_extension("/temp/hello.txt"), "hello");
/// assert_eq!(filename_without_extension("/temp/hello"), "hello");
/// assert_eq!(filename_without_extension("/temp/.gitignore"), "");
/// ```
#[must_use]
pub fn filename_without_extension(path: &str) -> &str {
    let name = filename(path);
    match extension(name) {
        Some(ext) => &name[..name.len() - ext.len()],
        None => name.strip_suffix('.').unwrap_or(name),
    }
}

/// Replace the extension of `path` with `new_extension`.
///
/// A missing leading dot is added. `None` or an empty extension removes the
/// current one.
///
/// # Examples
///
/// ```
/// use bake::path::helpers::change_extension;
///
/// assert_eq!(change_extension("/temp/a.txt", Some(".md")), "/temp/a.md");
/// assert_eq!(change_extension("/temp/a.txt", Some("md")), "/temp/a.md");
/// assert_eq!(change_extension("/temp/a", Some("md")), "/temp/a.md");
/// assert_eq!(change_extension("/temp/a.txt", None), "/temp/a");
/// ```
#[must_use]
pub fn change_extension(path: &str, new_extension: Option<&str>) -> String {
    let stem = match extension(path) {
        Some(ext) => &path[..path.len() - ext.len()],
        None => path.strip_suffix('.').unwrap_or(path),
    };
    match new_extension.filter(|ext| !ext.is_empty()) {
        Some(ext) => format!("{stem}{}", with_leading_dot(ext)),
        None => stem.to_string(),
    }
}

/// Append `new_extension` to `path`, keeping any existing extension.
///
/// # Examples
///
/// ```
/// use bake::path::helpers::append_extension;
///
/// assert_eq!(append_extension("/temp/a.tar", "gz"), "/temp/a.tar.gz");
/// assert_eq!(append_extension("/temp/a", ".txt"), "/temp/a.txt");
/// ```
#[must_use]
pub fn append_extension(path: &str, new_extension: &str) -> String {
    format!("{path}{}", with_leading_dot(new_extension))
}

fn with_leading_dot(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}
