//! Library exports for bake-cli.
//!
//! This module exports the CLI structure so that documentation tooling can
//! render it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for documentation tooling
pub use cli::Cli;
