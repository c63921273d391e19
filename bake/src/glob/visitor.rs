//! Walks a parsed pattern against a filesystem.

use log::trace;

use crate::error::Result;
use crate::glob::ast::Segment;
use crate::glob::GlobberSettings;
use crate::io::{Directory, File, FileSystem, SearchScope};
use crate::path::{DirectoryPath, FilePath, Path, PathComparer};

/// Matching context for one pattern. Holds no per-walk state; matches are
/// pushed into the accumulator passed to [`visit`](Self::visit).
pub(crate) struct GlobVisitor<'a> {
    pub file_system: &'a dyn FileSystem,
    pub settings: &'a GlobberSettings,
    pub comparer: PathComparer,
}

impl GlobVisitor<'_> {
    /// Match `segments` starting at `directory`.
    pub(crate) fn visit(
        &self,
        segments: &[Segment],
        directory: &DirectoryPath,
        results: &mut Vec<Path>,
    ) -> Result<()> {
        let Some((segment, rest)) = segments.split_first() else {
            results.push(directory.clone().into());
            return Ok(());
        };
        let is_last = rest.is_empty();

        match segment {
            Segment::Parent => {
                let parent = directory.parent().unwrap_or_else(|| directory.clone());
                self.visit(rest, &parent, results)
            }
            Segment::Literal(name) => self.visit_literal(name, rest, directory, results),
            Segment::Wildcard(matcher) => {
                for child in self.child_directories(directory)? {
                    if matcher.is_match(child.path().directory_name()) {
                        self.visit(rest, child.path(), results)?;
                    }
                }
                if is_last {
                    for file in self.child_files(directory)? {
                        if matcher.is_match(file.path().filename().full_path()) {
                            results.push(file.path().clone().into());
                        }
                    }
                }
                Ok(())
            }
            Segment::Recursive => {
                self.visit(rest, directory, results)?;
                for child in self.child_directories(directory)? {
                    self.visit(segments, child.path(), results)?;
                }
                Ok(())
            }
        }
    }

    fn visit_literal(
        &self,
        name: &str,
        rest: &[Segment],
        directory: &DirectoryPath,
        results: &mut Vec<Path>,
    ) -> Result<()> {
        if rest.is_empty() {
            if let Some(file) = self.find_file(directory, name)? {
                if self.accepts_file(file.as_ref()) {
                    results.push(file.path().clone().into());
                }
            }
        }
        if let Some(child) = self.find_directory(directory, name)? {
            if self.accepts_directory(child.as_ref()) {
                self.visit(rest, child.path(), results)?;
            } else {
                trace!("Glob pruned directory '{}'", child.path());
            }
        }
        Ok(())
    }

    fn find_directory(&self, directory: &DirectoryPath, name: &str) -> Result<Option<Box<dyn Directory>>> {
        if self.comparer.is_case_sensitive() {
            let Ok(candidate) = DirectoryPath::new(name).and_then(|child| directory.combine(&child)) else {
                return Ok(None);
            };
            let child = self.file_system.directory(&candidate);
            return Ok(child.exists().then_some(child));
        }
        Ok(self
            .list_directories(directory)?
            .into_iter()
            .find(|child| self.comparer.equals_str(child.path().directory_name(), name)))
    }

    fn find_file(&self, directory: &DirectoryPath, name: &str) -> Result<Option<Box<dyn File>>> {
        if self.comparer.is_case_sensitive() {
            let Ok(candidate) = FilePath::new(name).and_then(|child| directory.combine_with_file_path(&child)) else {
                return Ok(None);
            };
            let file = self.file_system.file(&candidate);
            return Ok(file.exists().then_some(file));
        }
        Ok(self
            .list_files(directory)?
            .into_iter()
            .find(|file| self.comparer.equals_str(file.path().filename().full_path(), name)))
    }

    /// Children accepted by the directory predicate.
    fn child_directories(&self, directory: &DirectoryPath) -> Result<Vec<Box<dyn Directory>>> {
        Ok(self
            .list_directories(directory)?
            .into_iter()
            .filter(|child| {
                let accepted = self.accepts_directory(child.as_ref());
                if !accepted {
                    trace!("Glob pruned directory '{}'", child.path());
                }
                accepted
            })
            .collect())
    }

    /// Children accepted by the file predicate.
    fn child_files(&self, directory: &DirectoryPath) -> Result<Vec<Box<dyn File>>> {
        Ok(self
            .list_files(directory)?
            .into_iter()
            .filter(|file| self.accepts_file(file.as_ref()))
            .collect())
    }

    fn list_directories(&self, directory: &DirectoryPath) -> Result<Vec<Box<dyn Directory>>> {
        let handle = self.file_system.directory(directory);
        if !handle.exists() {
            return Ok(Vec::new());
        }
        handle.directories("*", SearchScope::Current)
    }

    fn list_files(&self, directory: &DirectoryPath) -> Result<Vec<Box<dyn File>>> {
        let handle = self.file_system.directory(directory);
        if !handle.exists() {
            return Ok(Vec::new());
        }
        handle.files("*", SearchScope::Current)
    }

    fn accepts_directory(&self, directory: &dyn Directory) -> bool {
        self.settings
            .predicate
            .as_ref()
            .map_or(true, |predicate| predicate(directory))
    }

    fn accepts_file(&self, file: &dyn File) -> bool {
        self.settings
            .file_predicate
            .as_ref()
            .map_or(true, |predicate| predicate(file))
    }
}
