//! Path collections with set semantics.
//!
//! A [`PathSet`] never holds two paths that its [`PathComparer`] considers
//! equal. Iteration follows insertion order. The copy-returning methods
//! (`with`, `without`, `union`, `difference`, ...) never alias the source
//! collection.

use std::collections::HashSet;

use crate::path::{DirectoryPath, FilePath, NormalizedPath, Path, PathComparer};

/// A set of file paths.
pub type FilePathCollection = PathSet<FilePath>;

/// A set of directory paths.
pub type DirectoryPathCollection = PathSet<DirectoryPath>;

/// A set of file or directory paths.
pub type PathCollection = PathSet<Path>;

/// An insertion-ordered set of paths keyed by a [`PathComparer`].
///
/// # Examples
///
/// ```
/// use bake::path::{FilePath, FilePathCollection, PathComparer};
///
/// let mut files = FilePathCollection::with_comparer(PathComparer::new(false));
/// assert!(files.add(FilePath::new("/A.txt").unwrap()));
/// assert!(!files.add(FilePath::new("/a.TXT").unwrap()));
/// assert_eq!(files.len(), 1);
///
/// let more = files.with(FilePath::new("/b.txt").unwrap());
/// assert_eq!(files.len(), 1);
/// assert_eq!(more.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PathSet<P> {
    comparer: PathComparer,
    items: Vec<P>,
    keys: HashSet<String>,
}

impl<P> PathSet<P>
where
    P: AsRef<NormalizedPath> + Clone,
{
    /// An empty set using the host platform's comparer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparer(PathComparer::default())
    }

    /// An empty set using `comparer`.
    #[must_use]
    pub fn with_comparer(comparer: PathComparer) -> Self {
        Self {
            comparer,
            items: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// A set seeded from `paths`; duplicates under `comparer` are dropped.
    pub fn from_paths<I: IntoIterator<Item = P>>(paths: I, comparer: PathComparer) -> Self {
        let mut set = Self::with_comparer(comparer);
        set.add_all(paths);
        set
    }

    /// The comparer defining equality for this set.
    #[must_use]
    pub fn comparer(&self) -> PathComparer {
        self.comparer
    }

    /// Number of paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.items.iter()
    }

    /// Whether an equal path is present.
    #[must_use]
    pub fn contains(&self, path: &P) -> bool {
        self.keys.contains(&*self.comparer.key(path))
    }

    /// Add a path. Returns `false` if an equal path was already present.
    pub fn add(&mut self, path: P) -> bool {
        let key = self.comparer.key(&path).into_owned();
        if self.keys.insert(key) {
            self.items.push(path);
            true
        } else {
            false
        }
    }

    /// Add every path, returning how many were new.
    pub fn add_all<I: IntoIterator<Item = P>>(&mut self, paths: I) -> usize {
        let mut added = 0;
        for path in paths {
            if self.add(path) {
                added += 1;
            }
        }
        added
    }

    /// Remove an equal path. Returns `false` if none was present.
    pub fn remove(&mut self, path: &P) -> bool {
        let key = self.comparer.key(path).into_owned();
        if !self.keys.remove(&key) {
            return false;
        }
        let comparer = self.comparer;
        self.items.retain(|item| comparer.key(item) != key.as_str());
        true
    }

    /// Remove every path, returning how many were present.
    pub fn remove_all<'a, I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = &'a P>,
        P: 'a,
    {
        let mut removed = 0;
        for path in paths {
            if self.remove(path) {
                removed += 1;
            }
        }
        removed
    }

    /// A copy of this set with `path` added.
    #[must_use]
    pub fn with(&self, path: P) -> Self {
        let mut copy = self.clone();
        copy.add(path);
        copy
    }

    /// A copy of this set with every path in `paths` added.
    #[must_use]
    pub fn with_all<I: IntoIterator<Item = P>>(&self, paths: I) -> Self {
        let mut copy = self.clone();
        copy.add_all(paths);
        copy
    }

    /// A copy of this set with `path` removed.
    #[must_use]
    pub fn without(&self, path: &P) -> Self {
        let mut copy = self.clone();
        copy.remove(path);
        copy
    }

    /// A copy of this set with every path in `paths` removed.
    #[must_use]
    pub fn without_all<'a, I>(&self, paths: I) -> Self
    where
        I: IntoIterator<Item = &'a P>,
        P: 'a,
    {
        let mut copy = self.clone();
        copy.remove_all(paths);
        copy
    }

    /// A new set holding the paths of both sets, `self` first.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.with_all(other.iter().cloned())
    }

    /// A new set holding the paths of `self` not present in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.without_all(other.iter())
    }

    /// Consume the set, returning the paths in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<P> {
        self.items
    }
}

impl<P> Default for PathSet<P>
where
    P: AsRef<NormalizedPath> + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FromIterator<P> for PathSet<P>
where
    P: AsRef<NormalizedPath> + Clone,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_paths(iter, PathComparer::default())
    }
}

impl<P> Extend<P> for PathSet<P>
where
    P: AsRef<NormalizedPath> + Clone,
{
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<P> IntoIterator for PathSet<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a PathSet<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
