use std::io::{self, Cursor, ErrorKind, Read, Seek, SeekFrom, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::environment::PlatformFamily;
use crate::error::{Error, Result};
use crate::glob::SegmentMatcher;
use crate::io::walk::{Listing, Walk};
use crate::io::{
    is_dot_hidden, Directory, EntryPredicate, File, FileAccess, FileMode, FileStream,
    FileSystem, FileSystemInfo, FilteredCallback, SearchScope,
};
use crate::path::{DirectoryPath, FilePath, Path, PathComparer};

/// An in-memory [`FileSystem`].
///
/// Children are listed in the order they were created. Paths are compared
/// with the platform's [`PathComparer`], so a Windows fake is
/// case-insensitive. Creating a file or directory creates its missing
/// parents. Clones share the same tree.
///
/// # Examples
///
/// ```
/// use bake::io::FileSystem;
/// use bake::path::{FilePath, Path};
/// use bake::testing::FakeFileSystem;
///
/// let fs = FakeFileSystem::windows();
/// fs.create_file("C:/Temp/a.txt").unwrap();
///
/// let path: Path = FilePath::new("c:/temp/A.TXT").unwrap().into();
/// assert!(fs.exists(&path));
/// ```
#[derive(Debug, Clone)]
pub struct FakeFileSystem {
    state: Arc<Mutex<State>>,
}

#[derive(Debug)]
struct State {
    comparer: PathComparer,
    nodes: Vec<Node>,
}

#[derive(Debug)]
struct Node {
    full_path: String,
    key: String,
    parent: Option<String>,
    kind: NodeKind,
    hidden: bool,
}

#[derive(Debug)]
enum NodeKind {
    Directory,
    File(Vec<u8>),
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn io_error(kind: ErrorKind, message: String) -> Error {
    Error::Io(io::Error::new(kind, message))
}

fn parent_of(full_path: &str) -> Option<String> {
    DirectoryPath::from_normalized(full_path.to_string())
        .parent()
        .map(|parent| parent.full_path().to_string())
}

fn is_root(full_path: &str) -> bool {
    full_path == "/" || (full_path.len() == 3 && full_path.ends_with(":/"))
}

impl State {
    fn key(&self, full_path: &str) -> String {
        self.comparer.key_str(full_path).into_owned()
    }

    fn position(&self, full_path: &str) -> Option<usize> {
        let key = self.key(full_path);
        self.nodes.iter().position(|node| node.key == key)
    }

    fn node(&self, full_path: &str) -> Option<&Node> {
        self.position(full_path).map(|index| &self.nodes[index])
    }

    fn is_directory(&self, full_path: &str) -> bool {
        is_root(full_path)
            || matches!(self.node(full_path), Some(node) if matches!(node.kind, NodeKind::Directory))
    }

    fn is_file(&self, full_path: &str) -> bool {
        matches!(self.node(full_path), Some(node) if matches!(node.kind, NodeKind::File(_)))
    }

    fn is_descendant(&self, key: &str, ancestor: &str) -> bool {
        key.strip_prefix(ancestor).is_some_and(|rest| {
            ancestor.ends_with(['/', '\\']) || rest.starts_with(['/', '\\'])
        }) && key != ancestor
    }

    fn insert(&mut self, full_path: &str, kind: NodeKind) {
        let key = self.key(full_path);
        let parent = parent_of(full_path).map(|parent| self.key(&parent));
        self.nodes.push(Node {
            full_path: full_path.to_string(),
            key,
            parent,
            kind,
            hidden: false,
        });
    }

    fn ensure_directory(&mut self, full_path: &str) -> Result<()> {
        if full_path.is_empty() || self.is_directory(full_path) {
            return Ok(());
        }
        if self.is_file(full_path) {
            return Err(io_error(
                ErrorKind::AlreadyExists,
                format!("A file exists at '{full_path}'"),
            ));
        }
        if let Some(parent) = parent_of(full_path) {
            self.ensure_directory(&parent)?;
        }
        self.insert(full_path, NodeKind::Directory);
        Ok(())
    }

    fn ensure_parent(&mut self, full_path: &str) -> Result<()> {
        match parent_of(full_path) {
            Some(parent) => self.ensure_directory(&parent),
            None => Ok(()),
        }
    }

    fn require_parent(&self, full_path: &str) -> Result<()> {
        match parent_of(full_path) {
            Some(parent) if !self.is_directory(&parent) => Err(io_error(
                ErrorKind::NotFound,
                format!("Directory '{parent}' does not exist"),
            )),
            _ => Ok(()),
        }
    }

    fn content_mut(&mut self, full_path: &str) -> Option<&mut Vec<u8>> {
        let index = self.position(full_path)?;
        match &mut self.nodes[index].kind {
            NodeKind::File(content) => Some(content),
            NodeKind::Directory => None,
        }
    }

    /// Rewrite the node at `from` and everything below it to live at `to`.
    fn relocate(&mut self, from: &str, to: &str) {
        let from_key = self.key(from);
        let moved: Vec<usize> = (0..self.nodes.len())
            .filter(|&index| {
                let key = &self.nodes[index].key;
                *key == from_key || self.is_descendant(key, &from_key)
            })
            .collect();
        for index in moved {
            let full_path = format!("{to}{}", &self.nodes[index].full_path[from.len()..]);
            let key = self.key(&full_path);
            let parent = parent_of(&full_path).map(|parent| self.key(&parent));
            let node = &mut self.nodes[index];
            node.full_path = full_path;
            node.key = key;
            node.parent = parent;
        }
    }

    fn remove_tree(&mut self, full_path: &str) {
        let key = self.key(full_path);
        let mut index = 0;
        while index < self.nodes.len() {
            let node_key = &self.nodes[index].key;
            if *node_key == key || self.is_descendant(node_key, &key) {
                self.nodes.remove(index);
            } else {
                index += 1;
            }
        }
    }

    fn has_children(&self, full_path: &str) -> bool {
        let key = self.key(full_path);
        self.nodes
            .iter()
            .any(|node| node.parent.as_deref() == Some(key.as_str()))
    }
}

impl FakeFileSystem {
    /// An empty filesystem following `platform`'s case sensitivity.
    #[must_use]
    pub fn new(platform: PlatformFamily) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                comparer: PathComparer::for_platform(platform),
                nodes: Vec::new(),
            })),
        }
    }

    /// An empty case-sensitive filesystem.
    #[must_use]
    pub fn unix() -> Self {
        Self::new(PlatformFamily::Unix)
    }

    /// An empty case-insensitive filesystem.
    #[must_use]
    pub fn windows() -> Self {
        Self::new(PlatformFamily::Windows)
    }

    /// Create an empty file and its missing parents.
    ///
    /// # Errors
    ///
    /// Fails if `path` is invalid or a file is in the way of a parent.
    pub fn create_file(&self, path: &str) -> Result<FilePath> {
        self.create_file_with_content(path, [])
    }

    /// Create a file with `content` and its missing parents. An existing
    /// file is overwritten.
    ///
    /// # Errors
    ///
    /// Fails if `path` is invalid or a file is in the way of a parent.
    pub fn create_file_with_content(&self, path: &str, content: impl AsRef<[u8]>) -> Result<FilePath> {
        let path = FilePath::new(path)?;
        let mut state = lock(&self.state);
        state.ensure_parent(path.full_path())?;
        if let Some(existing) = state.content_mut(path.full_path()) {
            *existing = content.as_ref().to_vec();
        } else {
            state.insert(path.full_path(), NodeKind::File(content.as_ref().to_vec()));
        }
        Ok(path)
    }

    /// Create a directory and its missing parents.
    ///
    /// # Errors
    ///
    /// Fails if `path` is invalid or a file is in the way.
    pub fn create_directory(&self, path: &str) -> Result<DirectoryPath> {
        let path = DirectoryPath::new(path)?;
        lock(&self.state).ensure_directory(path.full_path())?;
        Ok(path)
    }

    /// Mark an existing entry as hidden or visible.
    ///
    /// # Errors
    ///
    /// Fails if nothing exists at `path`.
    pub fn set_hidden(&self, path: &Path, hidden: bool) -> Result<()> {
        let mut state = lock(&self.state);
        let index = state.position(path.full_path()).ok_or_else(|| {
            io_error(ErrorKind::NotFound, format!("'{path}' does not exist"))
        })?;
        state.nodes[index].hidden = hidden;
        Ok(())
    }

    /// The content of a file, if it exists.
    #[must_use]
    pub fn content(&self, path: &FilePath) -> Option<Vec<u8>> {
        lock(&self.state).content_mut(path.full_path()).cloned()
    }
}

impl FileSystem for FakeFileSystem {
    fn file(&self, path: &FilePath) -> Box<dyn File> {
        Box::new(FakeFile {
            path: path.clone(),
            state: Arc::clone(&self.state),
        })
    }

    fn directory(&self, path: &DirectoryPath) -> Box<dyn Directory> {
        Box::new(FakeDirectory {
            path: path.clone(),
            state: Arc::clone(&self.state),
        })
    }
}

struct FakeFile {
    path: FilePath,
    state: Arc<Mutex<State>>,
}

impl FileSystemInfo for FakeFile {
    fn entry_path(&self) -> Path {
        self.path.clone().into()
    }

    fn exists(&self) -> bool {
        lock(&self.state).is_file(self.path.full_path())
    }

    fn is_hidden(&self) -> bool {
        let flagged = lock(&self.state)
            .node(self.path.full_path())
            .is_some_and(|node| node.hidden);
        flagged || is_dot_hidden(self.path.filename().full_path())
    }
}

impl File for FakeFile {
    fn path(&self) -> &FilePath {
        &self.path
    }

    fn length(&self) -> Result<u64> {
        let mut state = lock(&self.state);
        let content = state.content_mut(self.path.full_path()).ok_or_else(|| {
            io_error(ErrorKind::NotFound, format!("File '{}' does not exist", self.path))
        })?;
        Ok(content.len() as u64)
    }

    fn copy_to(&self, destination: &FilePath, overwrite: bool) -> Result<()> {
        let mut state = lock(&self.state);
        let content = state
            .content_mut(self.path.full_path())
            .cloned()
            .ok_or_else(|| {
                io_error(ErrorKind::NotFound, format!("File '{}' does not exist", self.path))
            })?;
        if state.is_directory(destination.full_path()) {
            return Err(io_error(
                ErrorKind::AlreadyExists,
                format!("A directory exists at '{destination}'"),
            ));
        }
        if let Some(existing) = state.content_mut(destination.full_path()) {
            if !overwrite {
                return Err(io_error(
                    ErrorKind::AlreadyExists,
                    format!("'{destination}' already exists"),
                ));
            }
            *existing = content;
            return Ok(());
        }
        state.require_parent(destination.full_path())?;
        state.insert(destination.full_path(), NodeKind::File(content));
        Ok(())
    }

    fn move_to(&self, destination: &FilePath) -> Result<()> {
        let mut state = lock(&self.state);
        if !state.is_file(self.path.full_path()) {
            return Err(io_error(
                ErrorKind::NotFound,
                format!("File '{}' does not exist", self.path),
            ));
        }
        if state.position(destination.full_path()).is_some() {
            return Err(io_error(
                ErrorKind::AlreadyExists,
                format!("'{destination}' already exists"),
            ));
        }
        state.require_parent(destination.full_path())?;
        state.relocate(self.path.full_path(), destination.full_path());
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        let mut state = lock(&self.state);
        if !state.is_file(self.path.full_path()) {
            return Err(io_error(
                ErrorKind::NotFound,
                format!("File '{}' does not exist", self.path),
            ));
        }
        state.remove_tree(self.path.full_path());
        Ok(())
    }

    fn open(&self, mode: FileMode, access: FileAccess) -> Result<Box<dyn FileStream>> {
        let mut state = lock(&self.state);
        let full_path = self.path.full_path();
        let exists = state.is_file(full_path);

        match mode {
            FileMode::CreateNew if exists => {
                return Err(io_error(
                    ErrorKind::AlreadyExists,
                    format!("File '{}' already exists", self.path),
                ));
            }
            FileMode::Open | FileMode::Truncate if !exists => {
                return Err(io_error(
                    ErrorKind::NotFound,
                    format!("File '{}' does not exist", self.path),
                ));
            }
            _ => {}
        }

        if !exists {
            state.require_parent(full_path)?;
            state.insert(full_path, NodeKind::File(Vec::new()));
        }

        let content = state.content_mut(full_path).ok_or_else(|| {
            io_error(ErrorKind::NotFound, format!("File '{}' does not exist", self.path))
        })?;
        if matches!(mode, FileMode::Create | FileMode::Truncate) {
            content.clear();
        }

        let mut cursor = Cursor::new(content.clone());
        if mode == FileMode::Append {
            cursor.seek(SeekFrom::End(0))?;
        }

        Ok(Box::new(FakeFileStream {
            cursor,
            path: full_path.to_string(),
            state: Arc::clone(&self.state),
            access,
        }))
    }
}

/// An open fake file. Writes are committed to the tree on flush and drop.
struct FakeFileStream {
    cursor: Cursor<Vec<u8>>,
    path: String,
    state: Arc<Mutex<State>>,
    access: FileAccess,
}

impl FakeFileStream {
    fn commit(&self) {
        if let Some(content) = lock(&self.state).content_mut(&self.path) {
            content.clone_from(self.cursor.get_ref());
        }
    }
}

impl Read for FakeFileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.access.can_read() {
            return Err(io::Error::new(ErrorKind::PermissionDenied, "stream is write-only"));
        }
        self.cursor.read(buf)
    }
}

impl Write for FakeFileStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.access.can_write() {
            return Err(io::Error::new(ErrorKind::PermissionDenied, "stream is read-only"));
        }
        self.cursor.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.access.can_write() {
            self.commit();
        }
        Ok(())
    }
}

impl Seek for FakeFileStream {
    fn seek(&mut self, position: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(position)
    }
}

impl Drop for FakeFileStream {
    fn drop(&mut self) {
        if self.access.can_write() {
            self.commit();
        }
    }
}

struct FakeDirectory {
    path: DirectoryPath,
    state: Arc<Mutex<State>>,
}

impl FakeDirectory {
    fn missing(&self) -> Error {
        io_error(
            ErrorKind::NotFound,
            format!("Directory '{}' does not exist", self.path),
        )
    }

    fn matcher(&self, filter: &str) -> Result<SegmentMatcher> {
        let case_sensitive = lock(&self.state).comparer.is_case_sensitive();
        SegmentMatcher::new(filter, case_sensitive)
    }
}

impl FileSystemInfo for FakeDirectory {
    fn entry_path(&self) -> Path {
        self.path.clone().into()
    }

    fn exists(&self) -> bool {
        lock(&self.state).is_directory(self.path.full_path())
    }

    fn is_hidden(&self) -> bool {
        let flagged = lock(&self.state)
            .node(self.path.full_path())
            .is_some_and(|node| node.hidden);
        flagged || is_dot_hidden(self.path.directory_name())
    }
}

impl Listing for FakeDirectory {
    type Entry = FakeFile;

    fn list(&self) -> Result<(Vec<Self>, Vec<FakeFile>)> {
        let state = lock(&self.state);
        if !state.is_directory(self.path.full_path()) {
            return Err(self.missing());
        }
        let key = state.key(self.path.full_path());

        let mut directories = Vec::new();
        let mut files = Vec::new();
        for node in state.nodes.iter().filter(|node| node.parent.as_deref() == Some(key.as_str())) {
            match node.kind {
                NodeKind::Directory => directories.push(FakeDirectory {
                    path: DirectoryPath::from_normalized(node.full_path.clone()),
                    state: Arc::clone(&self.state),
                }),
                NodeKind::File(_) => files.push(FakeFile {
                    path: FilePath::from_normalized(node.full_path.clone()),
                    state: Arc::clone(&self.state),
                }),
            }
        }
        Ok((directories, files))
    }
}

impl Directory for FakeDirectory {
    fn path(&self) -> &DirectoryPath {
        &self.path
    }

    fn create(&self) -> Result<()> {
        lock(&self.state).ensure_directory(self.path.full_path())
    }

    fn move_to(&self, destination: &DirectoryPath) -> Result<()> {
        let mut state = lock(&self.state);
        if is_root(self.path.full_path()) || !state.is_directory(self.path.full_path()) {
            return Err(self.missing());
        }
        if state.is_directory(destination.full_path()) || state.is_file(destination.full_path()) {
            return Err(io_error(
                ErrorKind::AlreadyExists,
                format!("'{destination}' already exists"),
            ));
        }
        state.require_parent(destination.full_path())?;
        state.relocate(self.path.full_path(), destination.full_path());
        Ok(())
    }

    fn delete(&self, recursive: bool) -> Result<()> {
        let mut state = lock(&self.state);
        if !state.is_directory(self.path.full_path()) {
            return Err(self.missing());
        }
        if !recursive && state.has_children(self.path.full_path()) {
            return Err(io_error(
                ErrorKind::Other,
                format!("Directory '{}' is not empty", self.path),
            ));
        }
        state.remove_tree(self.path.full_path());
        Ok(())
    }

    fn directories_where(
        &self,
        filter: &str,
        scope: SearchScope,
        predicate: EntryPredicate<'_>,
        on_filtered: Option<FilteredCallback<'_>>,
    ) -> Result<Vec<Box<dyn Directory>>> {
        let matcher = self.matcher(filter)?;
        let walk = Walk {
            matcher: &matcher,
            scope,
            predicate,
            on_filtered,
        };
        let mut found = Vec::new();
        walk.directories(self, &mut found)?;
        Ok(found)
    }

    fn files_where(
        &self,
        filter: &str,
        scope: SearchScope,
        predicate: EntryPredicate<'_>,
        on_filtered: Option<FilteredCallback<'_>>,
    ) -> Result<Vec<Box<dyn File>>> {
        let matcher = self.matcher(filter)?;
        let walk = Walk {
            matcher: &matcher,
            scope,
            predicate,
            on_filtered,
        };
        let mut found = Vec::new();
        walk.files(self, &mut found)?;
        Ok(found)
    }
}
