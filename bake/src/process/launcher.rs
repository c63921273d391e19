//! Starting OS processes.

use std::collections::BTreeMap;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::Result;
use crate::path::{DirectoryPath, FilePath};
use crate::process::{split_command_line, Process, ProcessArgumentBuilder, ProcessWrapper};

/// Everything needed to start a process, fully resolved.
#[derive(Debug, Clone)]
pub struct ProcessStartInfo {
    /// The executable.
    pub file_name: FilePath,
    /// The arguments.
    pub arguments: ProcessArgumentBuilder,
    /// The absolute working directory.
    pub working_directory: DirectoryPath,
    /// Capture standard output.
    pub redirect_standard_output: bool,
    /// Capture standard error.
    pub redirect_standard_error: bool,
    /// Variables set on top of the inherited environment.
    pub environment_variables: BTreeMap<String, String>,
}

/// Starts processes. The seam between the runner and the OS.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessLauncher: Send + Sync {
    /// Start a process.
    ///
    /// `Ok(None)` means the OS started nothing; callers decide whether
    /// that is an error.
    ///
    /// # Errors
    ///
    /// Fails if the OS refuses to start the process.
    fn launch(&self, info: &ProcessStartInfo) -> Result<Option<Box<dyn Process>>>;
}

/// Launches processes with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessLauncher;

impl SystemProcessLauncher {
    /// Create a launcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for SystemProcessLauncher {
    fn launch(&self, info: &ProcessStartInfo) -> Result<Option<Box<dyn Process>>> {
        let arguments = split_command_line(&info.arguments.render());

        let mut command = Command::new(info.file_name.full_path());
        command
            .args(&arguments)
            .envs(&info.environment_variables)
            .stdout(if info.redirect_standard_output {
                Stdio::piped()
            } else {
                Stdio::inherit()
            })
            .stderr(if info.redirect_standard_error {
                Stdio::piped()
            } else {
                Stdio::inherit()
            });
        if !info.working_directory.is_current_directory() {
            command.current_dir(info.working_directory.full_path());
        }

        let child = command.spawn()?;
        debug!("Started process {} for '{}'", child.id(), info.file_name);
        Ok(Some(Box::new(ProcessWrapper::new(
            child,
            info.arguments.clone(),
        ))))
    }
}
