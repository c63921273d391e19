//! Configuration schema definitions.
//!
//! Every field is optional so that sources can be layered: a missing field
//! leaves the lower-precedence value alone.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::glob::GlobberSettings;
use crate::logging::LogLevel;
use crate::process::ProcessSettings;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use bake::config::{Config, GlobConfig};
///
/// let config: Config = serde_yaml::from_str(
///     "verbosity: verbose\nglob:\n  include_hidden: false\n",
/// )
/// .unwrap();
/// assert_eq!(
///     config.glob,
///     Some(GlobConfig { case_sensitive: None, include_hidden: Some(false) })
/// );
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How much the front end logs.
    pub verbosity: Option<LogLevel>,

    /// Glob matching settings.
    pub glob: Option<GlobConfig>,

    /// Process execution settings.
    pub process: Option<ProcessConfig>,
}

/// Glob matching configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobConfig {
    /// Force case-sensitive (or insensitive) matching instead of following
    /// the platform.
    pub case_sensitive: Option<bool>,

    /// Whether hidden files and directories take part in matching.
    /// Defaults to true.
    pub include_hidden: Option<bool>,
}

/// Process execution configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProcessConfig {
    /// Kill processes that run longer than this many milliseconds.
    pub timeout_ms: Option<u64>,

    /// Suppress the launch log line.
    pub silent: Option<bool>,

    /// Extra environment variables for started processes.
    pub environment: Option<BTreeMap<String, String>>,
}

impl Config {
    /// The configured verbosity, or [`LogLevel::Normal`].
    #[must_use]
    pub fn verbosity(&self) -> LogLevel {
        self.verbosity.unwrap_or_default()
    }

    /// Whether hidden entries take part in globbing.
    #[must_use]
    pub fn include_hidden(&self) -> bool {
        self.glob
            .as_ref()
            .and_then(|glob| glob.include_hidden)
            .unwrap_or(true)
    }

    /// The process timeout, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.process
            .as_ref()
            .and_then(|process| process.timeout_ms)
            .map(Duration::from_millis)
    }

    /// Globber settings carrying this configuration.
    ///
    /// When hidden entries are excluded, both directories and files are
    /// filtered, so hidden directories are never descended into.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::config::{Config, GlobConfig};
    ///
    /// let config = Config {
    ///     glob: Some(GlobConfig { case_sensitive: Some(true), include_hidden: Some(false) }),
    ///     ..Default::default()
    /// };
    /// let settings = config.globber_settings();
    /// assert_eq!(settings.is_case_sensitive, Some(true));
    /// assert!(settings.predicate.is_some());
    /// ```
    #[must_use]
    pub fn globber_settings(&self) -> GlobberSettings {
        let mut settings = GlobberSettings::new();
        if let Some(case_sensitive) = self.glob.as_ref().and_then(|glob| glob.case_sensitive) {
            settings = settings.with_case_sensitivity(case_sensitive);
        }
        if !self.include_hidden() {
            settings = settings
                .with_predicate(|directory| !directory.is_hidden())
                .with_file_predicate(|file| !file.is_hidden());
        }
        settings
    }

    /// Process settings carrying this configuration.
    #[must_use]
    pub fn process_settings(&self) -> ProcessSettings {
        let mut settings = ProcessSettings::new();
        if let Some(timeout) = self.timeout() {
            settings = settings.with_timeout(timeout);
        }
        let Some(process) = &self.process else {
            return settings;
        };
        if let Some(silent) = process.silent {
            settings = settings.with_silent(silent);
        }
        for (key, value) in process.environment.iter().flatten() {
            settings = settings.with_environment_variable(key, value);
        }
        settings
    }
}
