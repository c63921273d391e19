//! Main entry point for the bake CLI.
//!
//! This is the command-line front end for the bake path, glob and process
//! primitives. It provides commands for:
//! - `glob`: Find paths matching a glob pattern
//! - `collapse`: Collapse `.` and `..` segments of a path
//! - `relative`: Show the relative path between two paths
//! - `run`: Run a program with redacted logging and a timeout
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = bake::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_config: cli.no_config,
    };

    // Execute the command; only `run` reports a non-zero success code
    let result = match cli.command {
        cli::Command::Glob(cmd) => cmd.execute(&global).map(|()| 0),
        cli::Command::Collapse(cmd) => cmd.execute(&global).map(|()| 0),
        cli::Command::Relative(cmd) => cmd.execute(&global).map(|()| 0),
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global).map(|()| 0),
    };

    // Handle errors and set exit code
    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
