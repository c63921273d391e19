//! Settings for starting a process.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::path::DirectoryPath;
use crate::process::ProcessArgumentBuilder;

/// How a process is started.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use bake::process::{ProcessArgumentBuilder, ProcessSettings};
///
/// let settings = ProcessSettings::new()
///     .with_arguments(ProcessArgumentBuilder::from("--version"))
///     .with_redirected_standard_output(true)
///     .with_timeout(Duration::from_secs(30))
///     .with_environment_variable("RUST_LOG", "debug");
///
/// assert_eq!(settings.arguments.render(), "--version");
/// assert_eq!(settings.environment_variables["RUST_LOG"], "debug");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessSettings {
    /// Working directory; relative paths are anchored at the environment's
    /// working directory. Defaults to the working directory itself.
    pub working_directory: Option<DirectoryPath>,
    /// The command-line arguments.
    pub arguments: ProcessArgumentBuilder,
    /// Capture standard output instead of inheriting it.
    pub redirect_standard_output: bool,
    /// Capture standard error instead of inheriting it.
    pub redirect_standard_error: bool,
    /// How long callers should wait before killing the process.
    pub timeout: Option<Duration>,
    /// Variables set on top of the inherited environment.
    pub environment_variables: BTreeMap<String, String>,
    /// Suppress the launch log line.
    pub silent: bool,
}

impl ProcessSettings {
    /// Default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: impl Into<ProcessArgumentBuilder>) -> Self {
        self.arguments = arguments.into();
        self
    }

    /// Set the working directory.
    #[must_use]
    pub fn with_working_directory(mut self, working_directory: DirectoryPath) -> Self {
        self.working_directory = Some(working_directory);
        self
    }

    /// Capture standard output.
    #[must_use]
    pub fn with_redirected_standard_output(mut self, redirect: bool) -> Self {
        self.redirect_standard_output = redirect;
        self
    }

    /// Capture standard error.
    #[must_use]
    pub fn with_redirected_standard_error(mut self, redirect: bool) -> Self {
        self.redirect_standard_error = redirect;
        self
    }

    /// Set the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set an environment variable. A later value for the same key wins.
    #[must_use]
    pub fn with_environment_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment_variables.insert(key.into(), value.into());
        self
    }

    /// Suppress or allow the launch log line.
    #[must_use]
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}
