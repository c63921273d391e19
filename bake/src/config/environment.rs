//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `BAKE_VERBOSITY` | `verbosity` |
//! | `BAKE_CASE_SENSITIVE` | `glob.case_sensitive` |
//! | `BAKE_INCLUDE_HIDDEN` | `glob.include_hidden` |
//! | `BAKE_PROCESS_TIMEOUT_MS` | `process.timeout_ms` |
//! | `BAKE_PROCESS_SILENT` | `process.silent` |

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, VERBOSITY_ENV};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use bake::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `BAKE_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(VERBOSITY_ENV) {
            let level = LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: VERBOSITY_ENV.into(),
                message,
            })?;
            config.verbosity = Some(level);
        }

        if let Ok(val) = env::var("BAKE_CASE_SENSITIVE") {
            let glob = config.glob.get_or_insert_with(Default::default);
            glob.case_sensitive = Some(Self::parse_bool("BAKE_CASE_SENSITIVE", &val)?);
        }

        if let Ok(val) = env::var("BAKE_INCLUDE_HIDDEN") {
            let glob = config.glob.get_or_insert_with(Default::default);
            glob.include_hidden = Some(Self::parse_bool("BAKE_INCLUDE_HIDDEN", &val)?);
        }

        if let Ok(val) = env::var("BAKE_PROCESS_TIMEOUT_MS") {
            let timeout = val.trim().parse().map_err(|_| Error::Validation {
                field: "BAKE_PROCESS_TIMEOUT_MS".into(),
                message: "Must be a positive integer".into(),
            })?;
            let process = config.process.get_or_insert_with(Default::default);
            process.timeout_ms = Some(timeout);
        }

        if let Ok(val) = env::var("BAKE_PROCESS_SILENT") {
            let process = config.process.get_or_insert_with(Default::default);
            process.silent = Some(Self::parse_bool("BAKE_PROCESS_SILENT", &val)?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
