//! Common test utilities for integration tests.
//!
//! Builds in-memory filesystems and globbers over them.

use std::sync::Arc;

use bake::testing::{FakeEnvironment, FakeFileSystem};
use bake::{FilePath, Globber};

/// A Unix filesystem holding `files`, created in order.
#[allow(dead_code)]
pub fn unix_tree(files: &[&str]) -> FakeFileSystem {
    let fs = FakeFileSystem::unix();
    for file in files {
        fs.create_file(file).unwrap();
    }
    fs
}

/// A Windows filesystem holding `files`, created in order.
#[allow(dead_code)]
pub fn windows_tree(files: &[&str]) -> FakeFileSystem {
    let fs = FakeFileSystem::windows();
    for file in files {
        fs.create_file(file).unwrap();
    }
    fs
}

/// A globber over `fs` working in `/Working` on Unix.
#[allow(dead_code)]
pub fn unix_globber(fs: &FakeFileSystem) -> Globber {
    Globber::new(Arc::new(fs.clone()), Arc::new(FakeEnvironment::unix()))
}

/// A globber over `fs` working in `C:/Working` on Windows.
#[allow(dead_code)]
pub fn windows_globber(fs: &FakeFileSystem) -> Globber {
    Globber::new(Arc::new(fs.clone()), Arc::new(FakeEnvironment::windows()))
}

/// Full paths of `files`, for order-sensitive assertions.
#[allow(dead_code)]
pub fn full_paths(files: &[FilePath]) -> Vec<&str> {
    files.iter().map(|file| file.full_path()).collect()
}
