//! The process runner.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::environment::{Environment, SystemEnvironment};
use crate::error::{Error, Result};
use crate::path::FilePath;
use crate::process::{Process, ProcessLauncher, ProcessSettings, ProcessStartInfo, SystemProcessLauncher};

/// Starts processes from [`ProcessSettings`].
///
/// The runner resolves the working directory and logs the command line;
/// the [`ProcessLauncher`] does the actual start. A launcher returning no
/// process is passed through as `Ok(None)`.
pub struct ProcessRunner {
    environment: Arc<dyn Environment>,
    launcher: Arc<dyn ProcessLauncher>,
}

impl ProcessRunner {
    /// Create a runner.
    pub fn new(environment: Arc<dyn Environment>, launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self {
            environment,
            launcher,
        }
    }

    /// A runner over the host environment and [`SystemProcessLauncher`].
    ///
    /// # Errors
    ///
    /// Fails if the current directory cannot be determined.
    pub fn system() -> Result<Self> {
        Ok(Self::new(
            Arc::new(SystemEnvironment::new()?),
            Arc::new(SystemProcessLauncher::new()),
        ))
    }

    /// Start `file_path` with `settings`.
    ///
    /// The full, unredacted command line is logged at trace level unless
    /// `settings.silent` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] when `file_path` is `None`, and whatever
    /// the launcher fails with.
    pub fn start(
        &self,
        file_path: Option<&FilePath>,
        settings: &ProcessSettings,
    ) -> Result<Option<Box<dyn Process>>> {
        let file_path = file_path
            .ok_or_else(|| Error::domain("Cannot start process since no filename has been set."))?;

        let working_directory = match &settings.working_directory {
            Some(directory) => directory.make_absolute(self.environment.as_ref()),
            None => self.environment.working_directory(),
        };

        if !settings.silent {
            trace!("Executing: \"{}\" {}", file_path, settings.arguments.render());
        }

        let info = ProcessStartInfo {
            file_name: file_path.clone(),
            arguments: settings.arguments.clone(),
            working_directory,
            redirect_standard_output: settings.redirect_standard_output,
            redirect_standard_error: settings.redirect_standard_error,
            environment_variables: settings.environment_variables.clone(),
        };

        let process = self.launcher.launch(&info)?;
        if process.is_none() {
            debug!("No process was started for '{file_path}'");
        }
        Ok(process)
    }
}

impl fmt::Debug for ProcessRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessRunner")
            .field("working_directory", &self.environment.working_directory())
            .finish_non_exhaustive()
    }
}
