//! Build script for bake-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("bake")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Path, glob and process tools for build automation")
        .long_about(
            "Command-line front end for cross-platform path handling, glob matching and \
             process execution with secret redaction",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Ignore configuration files and BAKE_* environment variables")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("glob")
                .about("Find files and directories matching a glob pattern")
                .long_about(
                    "Match a glob pattern against the filesystem and print one path per line",
                ),
            Command::new("collapse")
                .about("Collapse `.` and `..` segments of a path")
                .long_about("Remove `.` and `..` segments without touching the filesystem"),
            Command::new("relative")
                .about("Show the relative path between two absolute paths")
                .long_about("Print the path of a directory or file relative to a directory"),
            Command::new("run")
                .about("Run a program, forwarding its output and exit code")
                .long_about(
                    "Run a program with secrets redacted from logs, an optional timeout \
                     and extra environment variables",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("bake.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
