//! Depth-first enumeration shared by the filesystem implementations.

use crate::error::Result;
use crate::glob::SegmentMatcher;
use crate::io::{Directory, EntryPredicate, File, FilteredCallback, SearchScope};

/// A directory that can list its direct children.
pub(crate) trait Listing: Directory + Sized + 'static {
    type Entry: File + 'static;

    /// Direct children, directories first, each group in listing order.
    fn list(&self) -> Result<(Vec<Self>, Vec<Self::Entry>)>;
}

pub(crate) struct Walk<'a> {
    pub matcher: &'a SegmentMatcher,
    pub scope: SearchScope,
    pub predicate: EntryPredicate<'a>,
    pub on_filtered: Option<FilteredCallback<'a>>,
}

impl Walk<'_> {
    pub(crate) fn directories<D: Listing>(
        &self,
        directory: &D,
        found: &mut Vec<Box<dyn Directory>>,
    ) -> Result<()> {
        let (directories, _) = directory.list()?;
        for child in directories {
            if !(self.predicate)(&child) {
                self.filtered(&child);
                continue;
            }
            if self.scope == SearchScope::Recursive {
                let matched = self.matcher.is_match(child.path().directory_name());
                // Keep pre-order: the child precedes its descendants.
                let position = found.len();
                self.directories(&child, found)?;
                if matched {
                    found.insert(position, Box::new(child));
                }
            } else if self.matcher.is_match(child.path().directory_name()) {
                found.push(Box::new(child));
            }
        }
        Ok(())
    }

    pub(crate) fn files<D: Listing>(
        &self,
        directory: &D,
        found: &mut Vec<Box<dyn File>>,
    ) -> Result<()> {
        let (directories, files) = directory.list()?;
        for file in files {
            if !(self.predicate)(&file) {
                self.filtered(&file);
                continue;
            }
            if self.matcher.is_match(file.path().filename().full_path()) {
                found.push(Box::new(file));
            }
        }
        if self.scope == SearchScope::Recursive {
            for child in directories {
                if !(self.predicate)(&child) {
                    self.filtered(&child);
                    continue;
                }
                self.files(&child, found)?;
            }
        }
        Ok(())
    }

    fn filtered(&self, entry: &dyn crate::io::FileSystemInfo) {
        if let Some(callback) = self.on_filtered {
            callback(entry);
        }
    }
}
