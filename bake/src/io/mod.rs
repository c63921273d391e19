//! Filesystem abstraction.
//!
//! Everything that touches the disk goes through [`FileSystem`], so globbing
//! and the other operations can run against the in-memory
//! [`FakeFileSystem`](crate::testing::FakeFileSystem) in tests.
//!
//! # Examples
//!
//! ```
//! use bake::io::{FileSystem, SearchScope};
//! use bake::path::DirectoryPath;
//! use bake::testing::FakeFileSystem;
//!
//! let fs = FakeFileSystem::unix();
//! fs.create_file("/project/src/main.rs").unwrap();
//! fs.create_file("/project/README.md").unwrap();
//!
//! let root = fs.directory(&DirectoryPath::new("/project").unwrap());
//! let sources = root.files("*.rs", SearchScope::Recursive).unwrap();
//! assert_eq!(sources.len(), 1);
//! assert_eq!(sources[0].path().full_path(), "/project/src/main.rs");
//! ```

mod physical;
pub(crate) mod walk;

use std::io::{Read, Seek, Write};

use crate::error::Result;
use crate::path::{DirectoryPath, FilePath, Path};

pub use physical::PhysicalFileSystem;

/// Whether an enumeration looks at direct children only or descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Direct children only.
    #[default]
    Current,
    /// All descendants, depth-first in name order.
    Recursive,
}

/// How [`File::open`] treats an existing or missing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Create a new file; fail if it exists.
    CreateNew,
    /// Create a new file, truncating an existing one.
    Create,
    /// Open an existing file; fail if it is missing.
    Open,
    /// Open the file, creating it if it is missing.
    OpenOrCreate,
    /// Open an existing file and truncate it.
    Truncate,
    /// Open or create the file and seek to its end.
    Append,
}

/// The access requested by [`File::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    /// Read only.
    Read,
    /// Write only.
    Write,
    /// Read and write.
    ReadWrite,
}

impl FileAccess {
    /// Whether reading is allowed.
    #[must_use]
    pub const fn can_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Whether writing is allowed.
    #[must_use]
    pub const fn can_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// An open file.
pub trait FileStream: Read + Write + Seek + Send {}

impl<T: Read + Write + Seek + Send> FileStream for T {}

/// The properties shared by files and directories.
pub trait FileSystemInfo {
    /// The entry's path.
    fn entry_path(&self) -> Path;

    /// Whether the entry exists.
    fn exists(&self) -> bool;

    /// Whether the entry is hidden.
    fn is_hidden(&self) -> bool;
}

/// Predicate deciding whether an enumerated entry is kept.
pub type EntryPredicate<'a> = &'a dyn Fn(&dyn FileSystemInfo) -> bool;

/// Callback invoked for each entry an [`EntryPredicate`] rejected.
pub type FilteredCallback<'a> = &'a dyn Fn(&dyn FileSystemInfo);

/// A file on some filesystem.
pub trait File: FileSystemInfo + Send {
    /// The file's path.
    fn path(&self) -> &FilePath;

    /// The file's size in bytes.
    ///
    /// # Errors
    ///
    /// Fails if the file does not exist.
    fn length(&self) -> Result<u64>;

    /// Copy the file to `destination`.
    ///
    /// # Errors
    ///
    /// Fails if the source is missing, or the destination exists and
    /// `overwrite` is `false`.
    fn copy_to(&self, destination: &FilePath, overwrite: bool) -> Result<()>;

    /// Move the file to `destination`.
    ///
    /// # Errors
    ///
    /// Fails if the source is missing or the destination exists.
    fn move_to(&self, destination: &FilePath) -> Result<()>;

    /// Delete the file.
    ///
    /// # Errors
    ///
    /// Fails if the file does not exist.
    fn delete(&self) -> Result<()>;

    /// Open the file.
    ///
    /// # Errors
    ///
    /// Fails when `mode` requires the file to exist and it does not, or to
    /// be missing and it exists.
    fn open(&self, mode: FileMode, access: FileAccess) -> Result<Box<dyn FileStream>>;
}

/// A directory on some filesystem.
///
/// Only [`directories_where`](Directory::directories_where) and
/// [`files_where`](Directory::files_where) need implementing.
pub trait Directory: FileSystemInfo + Send {
    /// The directory's path.
    fn path(&self) -> &DirectoryPath;

    /// Create the directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Fails if a file is in the way.
    fn create(&self) -> Result<()>;

    /// Move the directory to `destination`.
    ///
    /// # Errors
    ///
    /// Fails if the source is missing or the destination exists.
    fn move_to(&self, destination: &DirectoryPath) -> Result<()>;

    /// Delete the directory.
    ///
    /// # Errors
    ///
    /// Fails if the directory is missing, or is not empty and `recursive`
    /// is `false`.
    fn delete(&self, recursive: bool) -> Result<()>;

    /// Child directories whose names match `filter`.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be listed.
    fn directories(&self, filter: &str, scope: SearchScope) -> Result<Vec<Box<dyn Directory>>> {
        self.directories_where(filter, scope, &|_| true, None)
    }

    /// Child files whose names match `filter`.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be listed.
    fn files(&self, filter: &str, scope: SearchScope) -> Result<Vec<Box<dyn File>>> {
        self.files_where(filter, scope, &|_| true, None)
    }

    /// Child directories whose names match `filter` and that `predicate`
    /// accepts.
    ///
    /// A rejected directory is reported to `on_filtered` and not descended
    /// into.
    ///
    /// # Errors
    ///
    /// Fails if a directory cannot be listed.
    fn directories_where(
        &self,
        filter: &str,
        scope: SearchScope,
        predicate: EntryPredicate<'_>,
        on_filtered: Option<FilteredCallback<'_>>,
    ) -> Result<Vec<Box<dyn Directory>>>;

    /// Child files whose names match `filter` and that `predicate` accepts.
    ///
    /// The predicate also applies to the directories walked on the way; a
    /// rejected directory is reported to `on_filtered` and not descended
    /// into.
    ///
    /// # Errors
    ///
    /// Fails if a directory cannot be listed.
    fn files_where(
        &self,
        filter: &str,
        scope: SearchScope,
        predicate: EntryPredicate<'_>,
        on_filtered: Option<FilteredCallback<'_>>,
    ) -> Result<Vec<Box<dyn File>>>;
}

/// A filesystem: the entry point for files and directories.
pub trait FileSystem: Send + Sync {
    /// A handle to the file at `path`, which need not exist.
    fn file(&self, path: &FilePath) -> Box<dyn File>;

    /// A handle to the directory at `path`, which need not exist.
    fn directory(&self, path: &DirectoryPath) -> Box<dyn Directory>;

    /// Whether something exists at `path`.
    fn exists(&self, path: &Path) -> bool {
        match path {
            Path::File(file) => self.file(file).exists(),
            Path::Directory(directory) => self.directory(directory).exists(),
        }
    }
}

/// Whether an entry name is hidden by convention (leading dot).
pub(crate) fn is_dot_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}
