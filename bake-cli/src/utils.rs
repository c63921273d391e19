//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, argument parsing and environment setup.

use crate::error::CliError;
use bake::{Config, ConfigBuilder, DirectoryPath, SystemEnvironment};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Skip configuration files and environment overrides.
    pub no_config: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project `bake.yaml`
/// 3. User `~/.bake/config.yaml`
/// 4. Built-in defaults (lowest priority)
///
/// With `--no-config` only the defaults are used.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if global.no_config {
        builder = builder.skip_files().skip_env();
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The host environment, optionally with a different working directory.
///
/// A relative `working_directory` is resolved against the process
/// working directory.
pub fn system_environment(
    working_directory: Option<&str>,
) -> Result<SystemEnvironment, CliError> {
    let environment = SystemEnvironment::new()?;
    match working_directory {
        Some(raw) => {
            let directory = DirectoryPath::new(raw)?.make_absolute(&environment);
            Ok(SystemEnvironment::with_working_directory(directory))
        }
        None => Ok(environment),
    }
}

/// Parse a `KEY=VALUE` pair.
///
/// The value may be empty and may itself contain `=`; the key may not be
/// empty.
pub fn parse_env_pair(pair: &str) -> Result<(String, String), CliError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(CliError::InvalidArguments(format!(
            "Expected KEY=VALUE, got '{pair}'"
        ))),
    }
}
