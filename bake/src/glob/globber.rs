//! The glob entry point.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::environment::Environment;
use crate::error::Result;
use crate::glob::ast::{GlobPattern, GlobRoot};
use crate::glob::visitor::GlobVisitor;
use crate::glob::{brace, parser};
use crate::io::{Directory, File, FileSystem};
use crate::path::normalize::has_drive_letter;
use crate::path::{DirectoryPath, FilePath, Path, PathComparer, PathSet};

/// Decides whether the walk enters a directory.
pub type DirectoryPredicate = Arc<dyn Fn(&dyn Directory) -> bool + Send + Sync>;

/// Decides whether a file is part of the result.
pub type FilePredicate = Arc<dyn Fn(&dyn File) -> bool + Send + Sync>;

/// Options for [`Globber::match_pattern`].
///
/// # Examples
///
/// ```
/// use bake::glob::GlobberSettings;
///
/// let settings = GlobberSettings::new()
///     .with_predicate(|directory| !directory.is_hidden())
///     .with_case_sensitivity(false);
/// assert_eq!(settings.is_case_sensitive, Some(false));
/// ```
#[derive(Clone, Default)]
pub struct GlobberSettings {
    /// Directory filter. A rejected directory is not descended into.
    pub predicate: Option<DirectoryPredicate>,
    /// File filter.
    pub file_predicate: Option<FilePredicate>,
    /// Anchor for relative patterns. Defaults to the working directory.
    pub root: Option<DirectoryPath>,
    /// Overrides the platform's case sensitivity.
    pub is_case_sensitive: Option<bool>,
}

impl GlobberSettings {
    /// Default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory predicate.
    #[must_use]
    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn Directory) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Set the file predicate.
    #[must_use]
    pub fn with_file_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn File) -> bool + Send + Sync + 'static,
    {
        self.file_predicate = Some(Arc::new(predicate));
        self
    }

    /// Set the root for relative patterns.
    #[must_use]
    pub fn with_root(mut self, root: DirectoryPath) -> Self {
        self.root = Some(root);
        self
    }

    /// Force case-sensitive or case-insensitive matching.
    #[must_use]
    pub fn with_case_sensitivity(mut self, case_sensitive: bool) -> Self {
        self.is_case_sensitive = Some(case_sensitive);
        self
    }
}

impl fmt::Debug for GlobberSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobberSettings")
            .field("predicate", &self.predicate.is_some())
            .field("file_predicate", &self.file_predicate.is_some())
            .field("root", &self.root)
            .field("is_case_sensitive", &self.is_case_sensitive)
            .finish()
    }
}

/// Matches glob patterns against a filesystem.
///
/// Supported syntax: `*`, `?`, `[set]`, `[!set]` within a segment, `**`
/// across directories, `..`, and `{a,b}` alternatives.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use bake::glob::{Globber, GlobberSettings};
/// use bake::testing::{FakeEnvironment, FakeFileSystem};
///
/// let fs = FakeFileSystem::unix();
/// fs.create_file("/Temp/Hello/World/Text.txt").unwrap();
/// fs.create_file("/Temp/Goodbye/OtherText.txt").unwrap();
///
/// let globber = Globber::new(Arc::new(fs), Arc::new(FakeEnvironment::unix()));
/// let paths = globber.match_pattern("/Temp/**/*.txt", &GlobberSettings::new()).unwrap();
/// let paths: Vec<_> = paths.iter().map(|p| p.full_path()).collect();
/// assert_eq!(paths, ["/Temp/Hello/World/Text.txt", "/Temp/Goodbye/OtherText.txt"]);
/// ```
pub struct Globber {
    file_system: Arc<dyn FileSystem>,
    environment: Arc<dyn Environment>,
}

impl Globber {
    /// Create a globber over a filesystem and environment.
    pub fn new(file_system: Arc<dyn FileSystem>, environment: Arc<dyn Environment>) -> Self {
        Self {
            file_system,
            environment,
        }
    }

    /// All files and directories matching `pattern`, in depth-first order
    /// and without duplicates.
    ///
    /// A blank pattern matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`](crate::Error::NotSupported) for UNC
    /// patterns, [`Error::InvalidPattern`](crate::Error::InvalidPattern) for
    /// malformed wildcards, and I/O errors from the walk.
    pub fn match_pattern(&self, pattern: &str, settings: &GlobberSettings) -> Result<Vec<Path>> {
        if pattern.trim().is_empty() {
            return Ok(Vec::new());
        }

        let case_sensitive = settings
            .is_case_sensitive
            .unwrap_or_else(|| self.environment.platform().is_case_sensitive());
        let comparer = PathComparer::new(case_sensitive);
        let visitor = GlobVisitor {
            file_system: self.file_system.as_ref(),
            settings,
            comparer,
        };

        let mut results = Vec::new();
        for expanded in brace::expand(pattern) {
            let parsed = parser::parse(&expanded, case_sensitive)?;
            let root = self.root_directory(&parsed, settings);
            debug!("Globbing '{expanded}' from '{root}'");
            visitor.visit(parsed.segments(), &root, &mut results)?;
        }

        let unique = PathSet::from_paths(results, comparer).into_vec();
        debug!("Glob '{pattern}' matched {} path(s)", unique.len());
        Ok(unique)
    }

    /// Files matching `pattern`.
    ///
    /// # Errors
    ///
    /// Same as [`match_pattern`](Self::match_pattern).
    pub fn match_files(&self, pattern: &str, settings: &GlobberSettings) -> Result<Vec<FilePath>> {
        Ok(self
            .match_pattern(pattern, settings)?
            .into_iter()
            .filter_map(|path| match path {
                Path::File(file) => Some(file),
                Path::Directory(_) => None,
            })
            .collect())
    }

    /// Directories matching `pattern`.
    ///
    /// # Errors
    ///
    /// Same as [`match_pattern`](Self::match_pattern).
    pub fn match_directories(
        &self,
        pattern: &str,
        settings: &GlobberSettings,
    ) -> Result<Vec<DirectoryPath>> {
        Ok(self
            .match_pattern(pattern, settings)?
            .into_iter()
            .filter_map(|path| match path {
                Path::Directory(directory) => Some(directory),
                Path::File(_) => None,
            })
            .collect())
    }

    fn root_directory(&self, pattern: &GlobPattern, settings: &GlobberSettings) -> DirectoryPath {
        let working_directory = self.environment.working_directory();
        match pattern.root() {
            GlobRoot::Unix => {
                // Windows patterns rooted at `/` take the working directory's drive.
                if self.environment.platform().is_windows()
                    && has_drive_letter(working_directory.full_path())
                {
                    let drive = &working_directory.full_path()[..2];
                    DirectoryPath::from_normalized(format!("{drive}/"))
                } else {
                    DirectoryPath::from_normalized("/".to_string())
                }
            }
            GlobRoot::Windows(drive) => DirectoryPath::from_normalized(format!("{drive}:/")),
            GlobRoot::Relative => match &settings.root {
                Some(root) => root.make_absolute(self.environment.as_ref()),
                None => working_directory,
            },
        }
    }
}

impl fmt::Debug for Globber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Globber")
            .field("platform", &self.environment.platform())
            .finish_non_exhaustive()
    }
}
