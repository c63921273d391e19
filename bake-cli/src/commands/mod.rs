//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `glob`: Find paths matching a glob pattern
//! - `collapse`: Collapse `.` and `..` segments
//! - `relative`: Relative path between two absolute paths
//! - `run`: Run a program through the process runner
//! - `completions`: Generate shell completion scripts

pub mod collapse;
pub mod completions;
pub mod glob;
pub mod relative;
pub mod run;

pub use collapse::CollapseCommand;
pub use completions::CompletionsCommand;
pub use glob::GlobCommand;
pub use relative::RelativeCommand;
pub use run::RunCommand;
