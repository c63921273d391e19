//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CollapseCommand, CompletionsCommand, GlobCommand, RelativeCommand, RunCommand,
};
use clap::{Parser, Subcommand};

/// Cross-platform path, glob and process tool for build automation.
#[derive(Parser)]
#[command(name = "bake")]
#[command(version, about = "Path, glob and process tools for build automation", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Ignore configuration files and BAKE_* environment variables
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Find files and directories matching a glob pattern
    Glob(GlobCommand),

    /// Collapse `.` and `..` segments of a path
    Collapse(CollapseCommand),

    /// Show the relative path between two absolute paths
    Relative(RelativeCommand),

    /// Run a program, forwarding its output and exit code
    Run(RunCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
