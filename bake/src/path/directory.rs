//! Directory paths.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::path::{collapse, relative, FilePath, NormalizedPath};

/// A path to a directory.
///
/// # Examples
///
/// ```
/// use bake::path::{DirectoryPath, FilePath};
///
/// let assets = DirectoryPath::new("/project/assets").unwrap();
/// let file = assets.combine_with_file_path(&FilePath::new("logo.png").unwrap()).unwrap();
/// assert_eq!(file.full_path(), "/project/assets/logo.png");
/// assert_eq!(assets.directory_name(), "assets");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DirectoryPath(NormalizedPath);

impl DirectoryPath {
    /// Create a directory path from a raw string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the path is empty or contains
    /// illegal characters.
    pub fn new(raw: &str) -> Result<Self> {
        NormalizedPath::new(raw).map(Self)
    }

    pub(crate) fn from_normalized(full_path: String) -> Self {
        Self(NormalizedPath::from_normalized(full_path))
    }

    /// The shared normalized data.
    #[must_use]
    pub fn as_normalized(&self) -> &NormalizedPath {
        &self.0
    }

    /// The last segment of the directory path.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::path::DirectoryPath;
    ///
    /// assert_eq!(DirectoryPath::new("/a/b/c").unwrap().directory_name(), "c");
    /// assert_eq!(DirectoryPath::new("/").unwrap().directory_name(), "");
    /// ```
    #[must_use]
    pub fn directory_name(&self) -> &str {
        self.segments().last().map_or("", String::as_str)
    }

    /// The parent directory, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::path::DirectoryPath;
    ///
    /// let parent = DirectoryPath::new("/a/b").unwrap().parent().unwrap();
    /// assert_eq!(parent.full_path(), "/a");
    /// assert!(DirectoryPath::new("/").unwrap().parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<DirectoryPath> {
        parent_of(&self.0).map(Self::from_normalized)
    }

    /// Combine with a relative directory path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if `path` is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::path::DirectoryPath;
    ///
    /// let base = DirectoryPath::new("assets").unwrap();
    /// let combined = base.combine(&DirectoryPath::new("images").unwrap()).unwrap();
    /// assert_eq!(combined.full_path(), "assets/images");
    ///
    /// let absolute = DirectoryPath::new("/other/assets").unwrap();
    /// assert!(base.combine(&absolute).is_err());
    /// ```
    pub fn combine(&self, path: &DirectoryPath) -> Result<DirectoryPath> {
        if !path.is_relative() {
            return Err(Error::invalid_operation(
                "Cannot combine a directory path with an absolute directory path.",
            ));
        }
        Ok(Self::from_normalized(join(&self.0, path)))
    }

    /// Combine with a relative file path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if `path` is absolute.
    pub fn combine_with_file_path(&self, path: &FilePath) -> Result<FilePath> {
        if !path.is_relative() {
            return Err(Error::invalid_operation(
                "Cannot combine a directory path with an absolute file path.",
            ));
        }
        Ok(FilePath::from_normalized(join(&self.0, path)))
    }

    /// Anchor a relative path at the environment's working directory.
    ///
    /// Absolute paths are returned unchanged.
    #[must_use]
    pub fn make_absolute(&self, environment: &dyn Environment) -> DirectoryPath {
        if self.is_relative() {
            let joined = join(&environment.working_directory(), self);
            Self::from_normalized(joined).collapse()
        } else {
            self.clone()
        }
    }

    /// Anchor a relative path at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `base` is itself relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::path::DirectoryPath;
    ///
    /// let base = DirectoryPath::new("/work").unwrap();
    /// let path = DirectoryPath::new("src/../tests").unwrap();
    /// assert_eq!(path.make_absolute_from(&base).unwrap().full_path(), "/work/tests");
    ///
    /// let relative_base = DirectoryPath::new("work").unwrap();
    /// assert!(path.make_absolute_from(&relative_base).unwrap_err().is_domain());
    /// ```
    pub fn make_absolute_from(&self, base: &DirectoryPath) -> Result<DirectoryPath> {
        if base.is_relative() {
            return Err(Error::domain(
                "Cannot make a directory path absolute with a relative directory path.",
            ));
        }
        if self.is_relative() {
            Ok(Self::from_normalized(join(base, self)).collapse())
        } else {
            Ok(self.clone())
        }
    }

    /// Collapse `.` and `..` segments.
    #[must_use]
    pub fn collapse(&self) -> DirectoryPath {
        Self::from_normalized(collapse::collapse(&self.0))
    }

    /// The relative path from this directory to `to`.
    ///
    /// # Errors
    ///
    /// Fails if either path is relative or they have different roots.
    pub fn relative_path_to_directory(&self, to: &DirectoryPath) -> Result<DirectoryPath> {
        relative::resolve_relative(self, to)
    }

    /// The relative path from this directory to the file `to`.
    ///
    /// # Errors
    ///
    /// Fails if either path is relative or they have different roots.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::path::{DirectoryPath, FilePath};
    ///
    /// let from = DirectoryPath::new("/a/b").unwrap();
    /// let to = FilePath::new("/a/c/d.txt").unwrap();
    /// assert_eq!(from.relative_path_to_file(&to).unwrap().full_path(), "../c/d.txt");
    /// ```
    pub fn relative_path_to_file(&self, to: &FilePath) -> Result<FilePath> {
        let directory = relative::resolve_relative(self, &to.directory())?;
        let filename = to.filename();
        if directory.full_path() == "." {
            Ok(filename)
        } else {
            directory.combine_with_file_path(&filename)
        }
    }
}

/// Join two normalized paths with a single separator.
///
/// `right` is assumed relative. The empty "current directory" path on either
/// side yields the other side unchanged.
pub(crate) fn join(left: &NormalizedPath, right: &NormalizedPath) -> String {
    if left.is_current_directory() {
        return right.full_path().to_string();
    }
    if right.is_current_directory() {
        return left.full_path().to_string();
    }

    let separator = left.separator();
    let right = if left.is_unc() {
        right.full_path().replace('/', "\\")
    } else {
        right.full_path().to_string()
    };

    if left.full_path().ends_with(separator) {
        format!("{}{right}", left.full_path())
    } else {
        format!("{}{separator}{right}", left.full_path())
    }
}

/// Everything before the last separator, keeping roots intact.
pub(crate) fn parent_of(path: &NormalizedPath) -> Option<String> {
    let full = path.full_path();
    let separator = path.separator();

    if path.is_unc() {
        // \\server\share is the smallest UNC directory.
        if path.segments().len() <= 2 {
            return None;
        }
        return full.rfind(separator).map(|index| full[..index].to_string());
    }

    if full == "/" || (full.len() == 3 && full.ends_with(":/")) {
        return None;
    }

    match full.rfind(separator) {
        None => None,
        Some(0) => Some("/".to_string()),
        Some(index) => {
            let parent = &full[..index];
            if parent.len() == 2 && parent.ends_with(':') {
                Some(format!("{parent}/"))
            } else {
                Some(parent.to_string())
            }
        }
    }
}

impl Deref for DirectoryPath {
    type Target = NormalizedPath;

    fn deref(&self) -> &NormalizedPath {
        &self.0
    }
}

impl AsRef<NormalizedPath> for DirectoryPath {
    fn as_ref(&self) -> &NormalizedPath {
        &self.0
    }
}

impl FromStr for DirectoryPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<'de> Deserialize<'de> for DirectoryPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeEnvironment;

    fn dir(raw: &str) -> DirectoryPath {
        DirectoryPath::new(raw).unwrap()
    }

    #[test]
    fn test_combine_relative() {
        let combined = dir("/a/b").combine(&dir("c/d")).unwrap();
        assert_eq!(combined.full_path(), "/a/b/c/d");
    }

    #[test]
    fn test_combine_with_root() {
        let combined = dir("/").combine(&dir("a")).unwrap();
        assert_eq!(combined.full_path(), "/a");
    }

    #[test]
    fn test_combine_with_current_directory() {
        let combined = dir("./").combine(&dir("a")).unwrap();
        assert_eq!(combined.full_path(), "a");
        let combined = dir("a").combine(&dir("./")).unwrap();
        assert_eq!(combined.full_path(), "a");
    }

    #[test]
    fn test_combine_absolute_directory_fails() {
        let err = dir("assets").combine(&dir("/other/assets")).unwrap_err();
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn test_combine_absolute_file_fails() {
        let file = FilePath::new("/other/asset.txt").unwrap();
        let err = dir("assets").combine_with_file_path(&file).unwrap_err();
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn test_combine_unc_uses_backslashes() {
        let combined = dir("\\\\server\\share").combine(&dir("a/b")).unwrap();
        assert_eq!(combined.full_path(), "\\\\server\\share\\a\\b");
        assert!(combined.is_unc());
    }

    #[test]
    fn test_make_absolute_with_environment() {
        let environment = FakeEnvironment::unix();
        let path = dir("hello/../world").make_absolute(&environment);
        assert_eq!(path.full_path(), "/Working/world");
    }

    #[test]
    fn test_make_absolute_keeps_absolute_paths() {
        let environment = FakeEnvironment::unix();
        let path = dir("/other/../x").make_absolute(&environment);
        assert_eq!(path.full_path(), "/other/../x");
    }

    #[test]
    fn test_make_absolute_from_relative_base_is_domain_error() {
        let err = dir("a").make_absolute_from(&dir("b")).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_parent_of_relative_single_segment() {
        assert!(dir("a").parent().is_none());
        assert_eq!(dir("a/b").parent().unwrap().full_path(), "a");
    }

    #[test]
    fn test_parent_of_drive_child() {
        assert_eq!(dir("c:/a").parent().unwrap().full_path(), "c:/");
        assert!(dir("c:/").parent().is_none());
    }

    #[test]
    fn test_parent_of_unc() {
        assert_eq!(
            dir("\\\\server\\share\\a").parent().unwrap().full_path(),
            "\\\\server\\share"
        );
        assert!(dir("\\\\server\\share").parent().is_none());
    }

    #[test]
    fn test_from_str() {
        let path: DirectoryPath = "/a/b/".parse().unwrap();
        assert_eq!(path.full_path(), "/a/b");
        assert!("".parse::<DirectoryPath>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let path: DirectoryPath = serde_json::from_str("\"c:\\\\temp\\\\\"").unwrap();
        assert_eq!(path.full_path(), "c:/temp");
        assert!(serde_json::from_str::<DirectoryPath>("\"a*b\"").is_err());
    }

    #[test]
    fn test_relative_path_to_file_same_directory() {
        let from = dir("/a/b");
        let to = FilePath::new("/a/b/c.txt").unwrap();
        assert_eq!(from.relative_path_to_file(&to).unwrap().full_path(), "c.txt");
    }
}
