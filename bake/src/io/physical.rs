//! The real filesystem, via `std::fs`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;

use crate::environment::PlatformFamily;
use crate::error::{Error, Result};
use crate::glob::SegmentMatcher;
use crate::io::walk::{Listing, Walk};
use crate::io::{
    is_dot_hidden, Directory, EntryPredicate, File, FileAccess, FileMode, FileStream,
    FileSystem, FileSystemInfo, FilteredCallback, SearchScope,
};
use crate::path::{DirectoryPath, FilePath, NormalizedPath, Path};

/// The host filesystem.
///
/// Directory listings are sorted by name so traversal order does not depend
/// on the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicalFileSystem;

impl PhysicalFileSystem {
    /// Create a handle to the host filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for PhysicalFileSystem {
    fn file(&self, path: &FilePath) -> Box<dyn File> {
        Box::new(PhysicalFile { path: path.clone() })
    }

    fn directory(&self, path: &DirectoryPath) -> Box<dyn Directory> {
        Box::new(PhysicalDirectory { path: path.clone() })
    }
}

fn to_std(path: &NormalizedPath) -> PathBuf {
    if path.is_current_directory() {
        PathBuf::from(".")
    } else {
        PathBuf::from(path.full_path())
    }
}

fn already_exists(path: &NormalizedPath) -> Error {
    Error::Io(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("'{path}' already exists"),
    ))
}

struct PhysicalFile {
    path: FilePath,
}

impl FileSystemInfo for PhysicalFile {
    fn entry_path(&self) -> Path {
        self.path.clone().into()
    }

    fn exists(&self) -> bool {
        to_std(&self.path).is_file()
    }

    fn is_hidden(&self) -> bool {
        is_dot_hidden(self.path.filename().full_path())
    }
}

impl File for PhysicalFile {
    fn path(&self) -> &FilePath {
        &self.path
    }

    fn length(&self) -> Result<u64> {
        Ok(fs::metadata(to_std(&self.path))?.len())
    }

    fn copy_to(&self, destination: &FilePath, overwrite: bool) -> Result<()> {
        let target = to_std(destination);
        if !overwrite && target.exists() {
            return Err(already_exists(destination));
        }
        fs::copy(to_std(&self.path), target)?;
        Ok(())
    }

    fn move_to(&self, destination: &FilePath) -> Result<()> {
        let target = to_std(destination);
        if target.exists() {
            return Err(already_exists(destination));
        }
        fs::rename(to_std(&self.path), target)?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        fs::remove_file(to_std(&self.path))?;
        Ok(())
    }

    fn open(&self, mode: FileMode, access: FileAccess) -> Result<Box<dyn FileStream>> {
        let mut options = fs::OpenOptions::new();
        options.read(access.can_read()).write(access.can_write());
        match mode {
            FileMode::CreateNew => {
                options.create_new(true);
            }
            FileMode::Create => {
                options.create(true).truncate(true);
            }
            FileMode::Open => {}
            FileMode::OpenOrCreate => {
                options.create(true);
            }
            FileMode::Truncate => {
                options.truncate(true);
            }
            FileMode::Append => {
                options.append(true).create(true);
            }
        }
        Ok(Box::new(options.open(to_std(&self.path))?))
    }
}

struct PhysicalDirectory {
    path: DirectoryPath,
}

impl PhysicalDirectory {
    fn walk<'a>(
        matcher: &'a SegmentMatcher,
        scope: SearchScope,
        predicate: EntryPredicate<'a>,
        on_filtered: Option<FilteredCallback<'a>>,
    ) -> Walk<'a> {
        Walk {
            matcher,
            scope,
            predicate,
            on_filtered,
        }
    }
}

impl FileSystemInfo for PhysicalDirectory {
    fn entry_path(&self) -> Path {
        self.path.clone().into()
    }

    fn exists(&self) -> bool {
        to_std(&self.path).is_dir()
    }

    fn is_hidden(&self) -> bool {
        is_dot_hidden(self.path.directory_name())
    }
}

impl PhysicalDirectory {
    /// Whether `entry` lists as a directory, or `None` to leave it out.
    ///
    /// Symbolic links are followed. A link to a directory on the current
    /// chain of ancestors is left out so recursive walks terminate.
    fn entry_is_directory(&self, entry: &fs::DirEntry) -> Result<Option<bool>> {
        let file_type = entry.file_type()?;
        if !file_type.is_symlink() {
            return Ok(Some(file_type.is_dir()));
        }

        let link = entry.path();
        if !fs::metadata(&link).is_ok_and(|metadata| metadata.is_dir()) {
            return Ok(Some(false));
        }
        if self.links_to_ancestor(&link) {
            debug!("Skipping symbolic link loop '{}'", link.display());
            return Ok(None);
        }
        Ok(Some(true))
    }

    fn links_to_ancestor(&self, link: &std::path::Path) -> bool {
        let Ok(target) = fs::canonicalize(link) else {
            return false;
        };
        to_std(&self.path)
            .ancestors()
            .filter(|ancestor| !ancestor.as_os_str().is_empty())
            .any(|ancestor| fs::canonicalize(ancestor).is_ok_and(|resolved| resolved == target))
    }
}

impl Listing for PhysicalDirectory {
    type Entry = PhysicalFile;

    fn list(&self) -> Result<(Vec<Self>, Vec<PhysicalFile>)> {
        let mut entries = fs::read_dir(to_std(&self.path))?.collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(fs::DirEntry::file_name);

        let mut directories = Vec::new();
        let mut files = Vec::new();
        for entry in entries {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                debug!("Skipping non UTF-8 entry in '{}'", self.path);
                continue;
            };
            let Some(is_directory) = self.entry_is_directory(&entry)? else {
                continue;
            };
            if is_directory {
                match DirectoryPath::new(name).and_then(|child| self.path.combine(&child)) {
                    Ok(path) => directories.push(Self { path }),
                    Err(e) => debug!("Skipping directory '{name}': {e}"),
                }
            } else {
                match FilePath::new(name).and_then(|child| self.path.combine_with_file_path(&child)) {
                    Ok(path) => files.push(PhysicalFile { path }),
                    Err(e) => debug!("Skipping file '{name}': {e}"),
                }
            }
        }
        Ok((directories, files))
    }
}

impl Directory for PhysicalDirectory {
    fn path(&self) -> &DirectoryPath {
        &self.path
    }

    fn create(&self) -> Result<()> {
        fs::create_dir_all(to_std(&self.path))?;
        Ok(())
    }

    fn move_to(&self, destination: &DirectoryPath) -> Result<()> {
        let target = to_std(destination);
        if target.exists() {
            return Err(already_exists(destination));
        }
        fs::rename(to_std(&self.path), target)?;
        Ok(())
    }

    fn delete(&self, recursive: bool) -> Result<()> {
        if recursive {
            fs::remove_dir_all(to_std(&self.path))?;
        } else {
            fs::remove_dir(to_std(&self.path))?;
        }
        Ok(())
    }

    fn directories_where(
        &self,
        filter: &str,
        scope: SearchScope,
        predicate: EntryPredicate<'_>,
        on_filtered: Option<FilteredCallback<'_>>,
    ) -> Result<Vec<Box<dyn Directory>>> {
        let matcher = SegmentMatcher::new(filter, PlatformFamily::current().is_case_sensitive())?;
        let mut found = Vec::new();
        Self::walk(&matcher, scope, predicate, on_filtered).directories(self, &mut found)?;
        Ok(found)
    }

    fn files_where(
        &self,
        filter: &str,
        scope: SearchScope,
        predicate: EntryPredicate<'_>,
        on_filtered: Option<FilteredCallback<'_>>,
    ) -> Result<Vec<Box<dyn File>>> {
        let matcher = SegmentMatcher::new(filter, PlatformFamily::current().is_case_sensitive())?;
        let mut found = Vec::new();
        Self::walk(&matcher, scope, predicate, on_filtered).files(self, &mut found)?;
        Ok(found)
    }
}
