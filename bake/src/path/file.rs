//! File paths.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::path::directory::{join, parent_of};
use crate::path::{collapse, helpers, relative, DirectoryPath, NormalizedPath};

/// A path to a file.
///
/// # Examples
///
/// ```
/// use bake::path::FilePath;
///
/// let path = FilePath::new("C:\\temp\\build.log").unwrap();
/// assert_eq!(path.full_path(), "C:/temp/build.log");
/// assert_eq!(path.extension(), Some(".log"));
/// assert_eq!(path.filename().full_path(), "build.log");
/// assert_eq!(path.directory().full_path(), "C:/temp");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FilePath(NormalizedPath);

impl FilePath {
    /// Create a file path from a raw string.
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

    /// Whether the filename has an extension.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        helpers::extension(self.full_path()).is_some()
    }

    /// The extension including its leading dot.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        helpers::extension(self.full_path())
    }

    /// The directory containing this file.
    ///
    /// A bare filename lives in the current directory, `"./"`.
    #[must_use]
    pub fn directory(&self) -> DirectoryPath {
        DirectoryPath::from_normalized(parent_of(&self.0).unwrap_or_default())
    }

    /// The last segment of the path.
    #[must_use]
    pub fn filename(&self) -> FilePath {
        Self::from_normalized(helpers::filename(self.full_path()).to_string())
    }

    /// The last segment of the path without its extension.
    #[must_use]
    pub fn filename_without_extension(&self) -> FilePath {
        Self::from_normalized(helpers::filename_without_extension(self.full_path()).to_string())
    }

    /// Replace the extension; `None` removes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the extension contains illegal
    /// characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::path::FilePath;
    ///
    /// let path = FilePath::new("/temp/hello.txt").unwrap();
    /// assert_eq!(path.change_extension(Some("md")).unwrap().full_path(), "/temp/hello.md");
    /// assert_eq!(path.change_extension(None).unwrap().full_path(), "/temp/hello");
    /// ```
    pub fn change_extension(&self, extension: Option<&str>) -> Result<FilePath> {
        Self::new(&helpers::change_extension(self.full_path(), extension))
    }

    /// Append an extension, keeping the current one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the extension is empty or
    /// contains illegal characters.
    pub fn append_extension(&self, extension: &str) -> Result<FilePath> {
        if extension.trim().is_empty() {
            return Err(Error::invalid_argument(
                "extension",
                "extension cannot be empty",
            ));
        }
        Self::new(&helpers::append_extension(self.full_path(), extension))
    }

    /// Anchor a relative path at the environment's working directory.
    #[must_use]
    pub fn make_absolute(&self, environment: &dyn Environment) -> FilePath {
        if self.is_relative() {
            Self::from_normalized(join(&environment.working_directory(), self)).collapse()
        } else {
            self.clone()
        }
    }

    /// Anchor a relative path at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if `base` is itself relative.
    pub fn make_absolute_from(&self, base: &DirectoryPath) -> Result<FilePath> {
        if base.is_relative() {
            return Err(Error::invalid_operation(
                "Cannot make a file path absolute with a relative directory path.",
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
    pub fn collapse(&self) -> FilePath {
        Self::from_normalized(collapse::collapse(&self.0))
    }

    /// The relative path from this file's directory to `to`.
    ///
    /// # Errors
    ///
    /// Fails if either path is relative or they have different roots.
    pub fn relative_path_to_directory(&self, to: &DirectoryPath) -> Result<DirectoryPath> {
        relative::resolve_relative(&self.directory(), to)
    }

    /// The relative path from this file's directory to the file `to`.
    ///
    /// # Errors
    ///
    /// Fails if either path is relative or they have different roots.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::path::FilePath;
    ///
    /// let from = FilePath::new("/src/lib/a.rs").unwrap();
    /// let to = FilePath::new("/src/bin/main.rs").unwrap();
    /// assert_eq!(from.relative_path_to_file(&to).unwrap().full_path(), "../bin/main.rs");
    /// ```
    pub fn relative_path_to_file(&self, to: &FilePath) -> Result<FilePath> {
        self.directory().relative_path_to_file(to)
    }
}

impl Deref for FilePath {
    type Target = NormalizedPath;

    fn deref(&self) -> &NormalizedPath {
        &self.0
    }
}

impl AsRef<NormalizedPath> for FilePath {
    fn as_ref(&self) -> &NormalizedPath {
        &self.0
    }
}

impl FromStr for FilePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<'de> Deserialize<'de> for FilePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeEnvironment;

    fn file(raw: &str) -> FilePath {
        FilePath::new(raw).unwrap()
    }

    #[test]
    fn test_has_extension() {
        assert!(file("a.txt").has_extension());
        assert!(!file("a").has_extension());
        assert!(!file("dir.d/a").has_extension());
    }

    #[test]
    fn test_directory_of_bare_filename_is_current_directory() {
        let directory = file("a.txt").directory();
        assert!(directory.is_current_directory());
        assert!(directory.is_relative());
    }

    #[test]
    fn test_directory_of_rooted_file() {
        assert_eq!(file("/a.txt").directory().full_path(), "/");
        assert_eq!(file("/a/b.txt").directory().full_path(), "/a");
    }

    #[test]
    fn test_filename_without_extension() {
        assert_eq!(
            file("/temp/hello.world.txt")
                .filename_without_extension()
                .full_path(),
            "hello.world"
        );
    }

    #[test]
    fn test_append_extension() {
        let path = file("/temp/a.tar").append_extension("gz").unwrap();
        assert_eq!(path.full_path(), "/temp/a.tar.gz");
        assert!(file("a").append_extension(" ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_change_extension_rejects_illegal_characters() {
        let err = file("a.txt").change_extension(Some("*")).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_make_absolute_with_environment() {
        let environment = FakeEnvironment::unix();
        let path = file("./build/../out.txt").make_absolute(&environment);
        assert_eq!(path.full_path(), "/Working/out.txt");
    }

    #[test]
    fn test_make_absolute_from_relative_base_fails() {
        let base = DirectoryPath::new("relative").unwrap();
        let err = file("a.txt").make_absolute_from(&base).unwrap_err();
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn test_make_absolute_from_absolute_base() {
        let base = DirectoryPath::new("/base").unwrap();
        let path = file("a/../b.txt").make_absolute_from(&base).unwrap();
        assert_eq!(path.full_path(), "/base/b.txt");
    }

    #[test]
    fn test_relative_path_to_directory() {
        let from = file("/a/b/c.txt");
        let to = DirectoryPath::new("/a/d").unwrap();
        assert_eq!(from.relative_path_to_directory(&to).unwrap().full_path(), "../d");
    }

    #[test]
    fn test_serialize_as_string() {
        let path = file("/temp/a.txt");
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"/temp/a.txt\"");
    }
}
