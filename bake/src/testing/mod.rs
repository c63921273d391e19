//! In-memory stand-ins for the environment and the filesystem.
//!
//! These are part of the public API so code built on bake can test against
//! them too.

mod environment;
mod file_system;

pub use environment::FakeEnvironment;
pub use file_system::FakeFileSystem;
