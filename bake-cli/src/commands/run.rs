//! Command to run a program through the process runner.

use crate::error::CliError;
use crate::utils::{load_configuration, parse_env_pair, system_environment, GlobalOptions};
use bake::process::SystemProcessLauncher;
use bake::{FilePath, ProcessArgumentBuilder, ProcessRunner};
use clap::Args;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// Run a program with inherited output and exit with its exit code.
///
/// Values passed with `--secret` are appended after the plain arguments and
/// are redacted from every log line.
#[derive(Args)]
pub struct RunCommand {
    /// Program to run
    #[arg(value_name = "PROGRAM")]
    pub program: String,

    /// Arguments passed to the program
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Secret argument, redacted from logs (repeatable)
    #[arg(long = "secret", value_name = "VALUE")]
    pub secrets: Vec<String>,

    /// Kill the program if it runs longer than this (milliseconds)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Working directory for the program
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Environment variable for the program (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,
}

impl RunCommand {
    /// Execute the command, returning the program's exit code.
    pub fn execute(self, global: &GlobalOptions) -> Result<i32, CliError> {
        let config = load_configuration(global)?;

        let mut arguments = ProcessArgumentBuilder::new();
        for arg in &self.args {
            arguments.append_quoted(arg.as_str());
        }
        for secret in &self.secrets {
            arguments.append_quoted_secret(secret.as_str());
        }

        let mut settings = config.process_settings().with_arguments(arguments);
        for pair in &self.env {
            let (key, value) = parse_env_pair(pair)?;
            settings = settings.with_environment_variable(key, value);
        }
        if let Some(millis) = self.timeout {
            settings = settings.with_timeout(Duration::from_millis(millis));
        }

        let environment = system_environment(self.cwd.as_deref())?;
        let runner = ProcessRunner::new(Arc::new(environment), Arc::new(SystemProcessLauncher::new()));

        let program = FilePath::new(&self.program)?;
        info!(
            "Running \"{}\" {}",
            program,
            settings.arguments.render_safe()
        );
        let mut process = runner
            .start(Some(&program), &settings)?
            .ok_or_else(|| CliError::SemanticFailure("Could not start process.".to_string()))?;

        match settings.timeout {
            Some(timeout) => {
                if !process.wait_for_exit_timeout(timeout)? {
                    let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                    return Err(CliError::Timeout { millis });
                }
            }
            None => process.wait_for_exit()?,
        }

        Ok(process.exit_code()?)
    }
}
