#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bake
//!
//! Cross-platform path, glob and process primitives for build automation.
//!
//! ## Core Types
//!
//! - [`FilePath`], [`DirectoryPath`] and [`Path`]: immutable normalized paths
//! - [`PathComparer`] and [`PathCollection`]: platform-aware equality and sets
//! - [`FileSystem`](io::FileSystem): the filesystem seam, with
//!   [`PhysicalFileSystem`](io::PhysicalFileSystem) and an in-memory
//!   [`FakeFileSystem`](testing::FakeFileSystem)
//! - [`Globber`]: glob pattern matching against a filesystem
//! - [`ProcessArgumentBuilder`] and [`ProcessRunner`]: process execution
//!   with secrets redacted from logs
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: a stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use bake::{DirectoryPath, Globber, GlobberSettings};
//! use bake::testing::{FakeEnvironment, FakeFileSystem};
//!
//! let fs = FakeFileSystem::unix();
//! fs.create_file("/Working/src/lib.rs").unwrap();
//! fs.create_file("/Working/src/main.rs").unwrap();
//!
//! let globber = Globber::new(Arc::new(fs), Arc::new(FakeEnvironment::unix()));
//! let found = globber.match_files("src/*.rs", &GlobberSettings::new()).unwrap();
//! assert_eq!(found.len(), 2);
//!
//! let collapsed = DirectoryPath::new("/a/b/../c").unwrap().collapse();
//! assert_eq!(collapsed.full_path(), "/a/c");
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod glob;
pub mod io;
pub mod logging;
pub mod path;
pub mod process;
pub mod testing;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use environment::{Environment, PlatformFamily, SystemEnvironment};
pub use error::{Error, Result};
pub use glob::{Globber, GlobberSettings};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    DirectoryPath, DirectoryPathCollection, FilePath, FilePathCollection, Path, PathCollection,
    PathComparer,
};
pub use process::{
    Process, ProcessArgumentBuilder, ProcessRunner, ProcessSettings, ProcessWrapper,
};
