//! Core types for path handling.
//!
//! [`NormalizedPath`] holds the data shared by every path kind: the
//! normalized string, whether it is relative, and its segments. The concrete
//! kinds [`FilePath`] and [`DirectoryPath`] wrap it, and [`Path`] is the
//! closed sum over both used wherever either kind may appear (glob results,
//! mixed collections).

use std::fmt;

use serde::{Serialize, Serializer};

use crate::environment::PlatformFamily;
use crate::error::Result;
use crate::path::normalize::{self, UNC_PREFIX};
use crate::path::{DirectoryPath, FilePath};

/// A normalized, immutable path string with derived metadata.
///
/// There is deliberately no `PartialEq` implementation: whether two paths
/// are equal depends on the case sensitivity of the target platform, so
/// comparisons go through [`PathComparer`](crate::path::PathComparer).
///
/// # Examples
///
/// ```
/// use bake::path::NormalizedPath;
///
/// let path = NormalizedPath::new("/a//b/").unwrap();
/// assert_eq!(path.full_path(), "/a//b");
/// assert_eq!(path.segments(), ["a", "b"]);
/// assert!(!path.is_relative());
/// ```
#[derive(Debug, Clone)]
pub struct NormalizedPath {
    full_path: String,
    is_relative: bool,
    is_unc: bool,
    segments: Vec<String>,
}

impl NormalizedPath {
    /// Validate and normalize `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `raw` is empty, whitespace, or contains an illegal character.
    pub fn new(raw: &str) -> Result<Self> {
        let full_path = normalize::normalize(raw)?;
        Ok(Self::from_normalized(full_path))
    }

    /// Build from a string that is already in normalized form.
    ///
    /// Used by operations that derive new paths from existing ones (collapse,
    /// combine, parent lookup), where the empty string is a legitimate
    /// result meaning "current directory".
    pub(crate) fn from_normalized(full_path: String) -> Self {
        let is_unc = full_path.starts_with(UNC_PREFIX);
        let separator = if is_unc { '\\' } else { '/' };
        let is_relative = !normalize::is_rooted(&full_path, PlatformFamily::current());
        let segments = normalize::segments(&full_path, separator);
        Self {
            full_path,
            is_relative,
            is_unc,
            segments,
        }
    }

    /// The normalized path string.
    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Whether the path is relative (not rooted).
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.is_relative
    }

    /// Whether the path is a UNC path (`\\server\share`).
    #[must_use]
    pub fn is_unc(&self) -> bool {
        self.is_unc
    }

    /// The separator used by this path.
    #[must_use]
    pub fn separator(&self) -> char {
        if self.is_unc {
            '\\'
        } else {
            '/'
        }
    }

    /// The non-empty segments of the path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this is the empty "current directory" path produced by `./`.
    #[must_use]
    pub fn is_current_directory(&self) -> bool {
        self.full_path.is_empty()
    }
}

impl AsRef<NormalizedPath> for NormalizedPath {
    fn as_ref(&self) -> &NormalizedPath {
        self
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path)
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full_path)
    }
}

/// Either a file or a directory path.
///
/// # Examples
///
/// ```
/// use bake::path::{DirectoryPath, FilePath, Path};
///
/// let file: Path = FilePath::new("/temp/a.txt").unwrap().into();
/// let dir: Path = DirectoryPath::new("/temp").unwrap().into();
///
/// assert!(file.is_file());
/// assert!(dir.is_directory());
/// assert_eq!(file.full_path(), "/temp/a.txt");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Path {
    /// A path to a file.
    File(FilePath),
    /// A path to a directory.
    Directory(DirectoryPath),
}

impl Path {
    /// The shared normalized data.
    #[must_use]
    pub fn as_normalized(&self) -> &NormalizedPath {
        match self {
            Self::File(file) => file.as_normalized(),
            Self::Directory(directory) => directory.as_normalized(),
        }
    }

    /// The normalized path string.
    #[must_use]
    pub fn full_path(&self) -> &str {
        self.as_normalized().full_path()
    }

    /// Whether the path is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.as_normalized().is_relative()
    }

    /// The non-empty segments of the path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        self.as_normalized().segments()
    }

    /// Whether this is a file path.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Whether this is a directory path.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// The file path, if this is one.
    #[must_use]
    pub fn as_file(&self) -> Option<&FilePath> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }

    /// The directory path, if this is one.
    #[must_use]
    pub fn as_directory(&self) -> Option<&DirectoryPath> {
        match self {
            Self::Directory(directory) => Some(directory),
            Self::File(_) => None,
        }
    }
}

impl AsRef<NormalizedPath> for Path {
    fn as_ref(&self) -> &NormalizedPath {
        self.as_normalized()
    }
}

impl From<FilePath> for Path {
    fn from(path: FilePath) -> Self {
        Self::File(path)
    }
}

impl From<DirectoryPath> for Path {
    fn from(path: DirectoryPath) -> Self {
        Self::Directory(path)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_path())
    }
}
