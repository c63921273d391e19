//! Integration tests for process execution.
//!
//! Redaction and start failures run everywhere through a stub launcher; the
//! tests that start real processes use `sh` and only run on Unix.

use std::sync::{Arc, Mutex};

use bake::process::{
    split_command_line, ProcessArgument, ProcessLauncher, ProcessStartInfo, REDACTED,
};
use bake::testing::FakeEnvironment;
use bake::{FilePath, Process, ProcessArgumentBuilder, ProcessRunner, ProcessSettings, Result};

/// A launcher that records what it was asked to start and starts nothing.
#[derive(Default)]
struct RecordingLauncher {
    launched: Mutex<Vec<ProcessStartInfo>>,
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&self, info: &ProcessStartInfo) -> Result<Option<Box<dyn Process>>> {
        self.launched.lock().unwrap().push(info.clone());
        Ok(None)
    }
}

fn recording_runner() -> (ProcessRunner, Arc<RecordingLauncher>) {
    let launcher = Arc::new(RecordingLauncher::default());
    let runner = ProcessRunner::new(Arc::new(FakeEnvironment::unix()), launcher.clone());
    (runner, launcher)
}

// =============================================================================
// Redaction
// =============================================================================

#[test]
fn test_secret_is_redacted_in_safe_rendering_only() {
    let mut arguments = ProcessArgumentBuilder::new();
    arguments.append_text("--token").append_secret("s3cr3t");

    assert_eq!(arguments.render(), "--token s3cr3t");
    assert_eq!(arguments.render_safe(), "--token [REDACTED]");
    assert_eq!(
        arguments.filter_unsafe("log contains s3cr3t here"),
        "log contains [REDACTED] here"
    );
}

#[test]
fn test_named_and_quoted_secrets() {
    let mut arguments = ProcessArgumentBuilder::new();
    arguments
        .append_switch_quoted("--output", " ", "out dir")
        .append_switch_quoted_secret("--password", "=", "p@ss word");

    assert_eq!(
        arguments.render(),
        "--output \"out dir\" --password=\"p@ss word\""
    );
    assert_eq!(
        arguments.render_safe(),
        format!("--output \"out dir\" --password=\"{REDACTED}\"")
    );
    assert_eq!(
        arguments.filter_unsafe("running --password=\"p@ss word\" now"),
        format!("running --password=\"{REDACTED}\" now")
    );
}

#[test]
fn test_rendered_arguments_split_back_into_tokens() {
    let mut arguments = ProcessArgumentBuilder::new();
    arguments
        .append_text("build")
        .append_quoted("My Project.sln")
        .append(ProcessArgument::quoted_text("say \"hi\""));

    assert_eq!(
        split_command_line(&arguments.render()),
        ["build", "My Project.sln", "say \"hi\""]
    );
}

// =============================================================================
// Start failures
// =============================================================================

#[test]
fn test_start_without_filename_is_a_domain_error() {
    let (runner, launcher) = recording_runner();

    let err = runner.start(None, &ProcessSettings::new()).err().unwrap();

    assert!(err.is_domain());
    assert_eq!(
        err.to_string(),
        "Cannot start process since no filename has been set."
    );
    assert!(launcher.launched.lock().unwrap().is_empty());
}

#[test]
fn test_start_returns_none_when_nothing_was_started() {
    let (runner, launcher) = recording_runner();
    let tool = FilePath::new("tools/dotnet").unwrap();

    let process = runner.start(Some(&tool), &ProcessSettings::new()).unwrap();

    assert!(process.is_none());
    let launched = launcher.launched.lock().unwrap();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].working_directory.full_path(), "/Working");
}

#[test]
fn test_launcher_receives_secrets_unredacted() {
    let (runner, launcher) = recording_runner();
    let mut arguments = ProcessArgumentBuilder::new();
    arguments.append_switch_secret("--api-key", " ", "abc123");
    let settings = ProcessSettings::new().with_arguments(arguments);

    runner
        .start(Some(&FilePath::new("/usr/bin/nuget").unwrap()), &settings)
        .unwrap();

    let launched = launcher.launched.lock().unwrap();
    assert_eq!(launched[0].arguments.render(), "--api-key abc123");
}

// =============================================================================
// Real processes
// =============================================================================

#[cfg(unix)]
mod real {
    use super::*;
    use std::time::Duration;

    fn sh(script: &str) -> (FilePath, ProcessSettings) {
        let mut arguments = ProcessArgumentBuilder::new();
        arguments.append_text("-c").append_quoted(script);
        (
            FilePath::new("/bin/sh").unwrap(),
            ProcessSettings::new()
                .with_arguments(arguments)
                .with_redirected_standard_output(true)
                .with_redirected_standard_error(true),
        )
    }

    #[test]
    fn test_captures_output_and_exit_code() {
        let (file, settings) = sh("echo one; echo two; echo oops 1>&2; exit 3");
        let runner = ProcessRunner::system().unwrap();

        let mut process = runner.start(Some(&file), &settings).unwrap().unwrap();
        let output: Vec<String> = process.standard_output().collect();
        let errors: Vec<String> = process.standard_error().collect();
        process.wait_for_exit().unwrap();

        assert_eq!(output, ["one", "two"]);
        assert_eq!(errors, ["oops"]);
        assert_eq!(process.exit_code().unwrap(), 3);
    }

    #[test]
    fn test_environment_variables_reach_the_process() {
        let (file, settings) = sh("echo \"$BAKE_TEST_VALUE\"");
        let settings = settings.with_environment_variable("BAKE_TEST_VALUE", "from-settings");
        let runner = ProcessRunner::system().unwrap();

        let mut process = runner.start(Some(&file), &settings).unwrap().unwrap();
        let output: Vec<String> = process.standard_output().collect();
        process.wait_for_exit().unwrap();

        assert_eq!(output, ["from-settings"]);
    }

    #[test]
    fn test_working_directory_is_applied() {
        let temp = tempfile::tempdir().unwrap();
        let canonical = temp.path().canonicalize().unwrap();
        let directory = bake::DirectoryPath::new(canonical.to_str().unwrap()).unwrap();
        let (file, settings) = sh("pwd");
        let settings = settings.with_working_directory(directory.clone());
        let runner = ProcessRunner::system().unwrap();

        let mut process = runner.start(Some(&file), &settings).unwrap().unwrap();
        let output: Vec<String> = process.standard_output().collect();
        process.wait_for_exit().unwrap();

        assert_eq!(output, [directory.full_path()]);
    }

    #[test]
    fn test_timeout_kills_long_running_process() {
        let (file, settings) = sh("sleep 5");
        let runner = ProcessRunner::system().unwrap();

        let mut process = runner.start(Some(&file), &settings).unwrap().unwrap();
        let exited = process
            .wait_for_exit_timeout(Duration::from_millis(100))
            .unwrap();

        assert!(!exited);
    }

    #[test]
    fn test_missing_executable_is_an_io_error() {
        let runner = ProcessRunner::system().unwrap();
        let file = FilePath::new("/definitely/not/here").unwrap();

        let result = runner.start(Some(&file), &ProcessSettings::new());

        assert!(matches!(result, Err(bake::Error::Io(_))));
    }
}
