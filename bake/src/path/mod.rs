//! Immutable, cross-platform paths.
//!
//! This module provides the path model used throughout bake: validation and
//! normalization of raw strings, combination and absolutization, collapsing
//! of `.` and `..`, relative path resolution, platform-aware comparison, and
//! path collections with set semantics.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every path is normalized once, on construction:
//! - Backslashes become forward slashes (UNC paths keep backslashes)
//! - Outer whitespace is trimmed
//! - A leading `./` is stripped and trailing separators are removed
//!
//! Paths containing `*`, `?` or control characters are rejected.
//!
//! ## Rootedness
//!
//! A path is rooted when it starts with `/`, is a UNC path, or (on Windows
//! hosts only) starts with a drive letter.
//!
//! ## Equality
//!
//! Path types do not implement `PartialEq`. Use a [`PathComparer`], which
//! decides case sensitivity from the platform family.
//!
//! # Examples
//!
//! ```
//! use bake::path::{DirectoryPath, FilePath, PathComparer};
//!
//! let root = DirectoryPath::new("/work/project").unwrap();
//! let file = FilePath::new("src/../Cargo.toml").unwrap();
//!
//! let absolute = file.make_absolute_from(&root).unwrap();
//! assert_eq!(absolute.full_path(), "/work/project/Cargo.toml");
//!
//! let comparer = PathComparer::new(false);
//! let other = FilePath::new("/WORK/project/cargo.toml").unwrap();
//! assert!(comparer.equals(Some(&absolute), Some(&other)));
//! ```

pub mod collapse;
mod collection;
mod comparer;
mod directory;
mod file;
pub mod helpers;
pub mod normalize;
pub mod relative;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use collection::{DirectoryPathCollection, FilePathCollection, PathCollection, PathSet};
pub use comparer::PathComparer;
pub use directory::DirectoryPath;
pub use file::FilePath;
pub use types::{NormalizedPath, Path};
