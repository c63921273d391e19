//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, GlobConfig, ProcessConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use bake::config::{Config, ConfigMerger};
/// use bake::LogLevel;
///
/// let low = Config { verbosity: Some(LogLevel::Quiet), ..Default::default() };
/// let high = Config { verbosity: Some(LogLevel::Verbose), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.verbosity, Some(LogLevel::Verbose));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; values present in `source` win.
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Nested configs: field-by-field merge
    /// - Process environment: keys accumulate, source wins per key
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.verbosity.is_some() {
            target.verbosity = source.verbosity;
        }

        if let Some(ref source_glob) = source.glob {
            let glob = target.glob.get_or_insert_with(GlobConfig::default);
            Self::merge_glob(glob, source_glob);
        }

        if let Some(ref source_process) = source.process {
            let process = target.process.get_or_insert_with(ProcessConfig::default);
            Self::merge_process(process, source_process);
        }
    }

    fn merge_glob(target: &mut GlobConfig, source: &GlobConfig) {
        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }
        if source.include_hidden.is_some() {
            target.include_hidden = source.include_hidden;
        }
    }

    fn merge_process(target: &mut ProcessConfig, source: &ProcessConfig) {
        if source.timeout_ms.is_some() {
            target.timeout_ms = source.timeout_ms;
        }
        if source.silent.is_some() {
            target.silent = source.silent;
        }
        if let Some(ref source_environment) = source.environment {
            target
                .environment
                .get_or_insert_with(Default::default)
                .extend(source_environment.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
}
