//! Running processes.

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, ExitStatus};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::process::ProcessArgumentBuilder;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A started process.
pub trait Process: Send {
    /// Block until the process exits.
    ///
    /// # Errors
    ///
    /// Fails if waiting on the OS process fails.
    fn wait_for_exit(&mut self) -> Result<()>;

    /// Block until the process exits or `timeout` elapses.
    ///
    /// On timeout the process is killed and `false` is returned.
    ///
    /// # Errors
    ///
    /// Fails if waiting on or killing the OS process fails.
    fn wait_for_exit_timeout(&mut self, timeout: Duration) -> Result<bool>;

    /// The exit code; `-1` when the process was terminated by a signal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the process has not exited.
    fn exit_code(&mut self) -> Result<i32>;

    /// Standard output, line by line, if it was redirected.
    ///
    /// Lines are read as the iterator is consumed. A process writing more
    /// than the pipe buffer blocks until the lines are read, so waiting for
    /// exit before consuming the iterator can deadlock.
    fn standard_output(&mut self) -> Box<dyn Iterator<Item = String> + Send>;

    /// Standard error, line by line, if it was redirected.
    ///
    /// The same pipe caveat as [`standard_output`](Self::standard_output)
    /// applies.
    fn standard_error(&mut self) -> Box<dyn Iterator<Item = String> + Send>;

    /// Kill the process.
    ///
    /// # Errors
    ///
    /// Fails if the OS refuses to kill the process.
    fn kill(&mut self) -> Result<()>;

    /// The OS process id.
    fn id(&self) -> u32;
}

/// A [`Process`] over [`std::process::Child`].
///
/// Dropping the handle reaps a child that has already exited. A running
/// child is not killed.
#[derive(Debug)]
pub struct ProcessWrapper {
    child: Child,
    status: Option<ExitStatus>,
    filter: ProcessArgumentBuilder,
}

impl ProcessWrapper {
    /// Wrap a child. `filter` redacts secrets from logged output lines.
    #[must_use]
    pub fn new(child: Child, filter: ProcessArgumentBuilder) -> Self {
        Self {
            child,
            status: None,
            filter,
        }
    }

    fn poll(&mut self) -> Result<Option<ExitStatus>> {
        if self.status.is_none() {
            self.status = self.child.try_wait()?;
        }
        Ok(self.status)
    }

    fn lines<R: Read + Send + 'static>(&self, pipe: Option<R>) -> Box<dyn Iterator<Item = String> + Send> {
        let Some(pipe) = pipe else {
            return Box::new(std::iter::empty());
        };
        let filter = self.filter.clone();
        Box::new(BufReader::new(pipe).lines().map_while(move |line| match line {
            Ok(line) => {
                debug!("{}", filter.filter_unsafe(&line));
                Some(line)
            }
            Err(e) => {
                debug!("Stopped reading process output: {e}");
                None
            }
        }))
    }
}

impl Process for ProcessWrapper {
    fn wait_for_exit(&mut self) -> Result<()> {
        if self.status.is_none() {
            self.status = Some(self.child.wait()?);
        }
        Ok(())
    }

    fn wait_for_exit_timeout(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.poll()?.is_some() {
                return Ok(true);
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }

        warn!(
            "Process {} did not exit within {} ms and was killed",
            self.child.id(),
            timeout.as_millis()
        );
        self.kill()?;
        Ok(false)
    }

    fn exit_code(&mut self) -> Result<i32> {
        match self.poll()? {
            Some(status) => Ok(status.code().unwrap_or(-1)),
            None => Err(Error::invalid_operation("Process has not exited.")),
        }
    }

    fn standard_output(&mut self) -> Box<dyn Iterator<Item = String> + Send> {
        let pipe = self.child.stdout.take();
        self.lines(pipe)
    }

    fn standard_error(&mut self) -> Box<dyn Iterator<Item = String> + Send> {
        let pipe = self.child.stderr.take();
        self.lines(pipe)
    }

    fn kill(&mut self) -> Result<()> {
        if self.poll()?.is_some() {
            return Ok(());
        }
        self.child.kill()?;
        self.status = Some(self.child.wait()?);
        Ok(())
    }

    fn id(&self) -> u32 {
        self.child.id()
    }
}

impl Drop for ProcessWrapper {
    /// Reap the child if it has already exited. A child that is still
    /// running is left running.
    fn drop(&mut self) {
        match self.poll() {
            Ok(Some(_)) => {}
            Ok(None) => debug!(
                "Process {} still running when its handle was dropped",
                self.child.id()
            ),
            Err(e) => debug!("Could not reap process {}: {e}", self.child.id()),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::{Command, Stdio};

    fn spawn(script: &str) -> ProcessWrapper {
        let child = Command::new("sh")
            .arg("-c")
            .arg(script)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        ProcessWrapper::new(child, ProcessArgumentBuilder::new())
    }

    #[test]
    fn test_exit_code() {
        let mut process = spawn("exit 3");
        process.wait_for_exit().unwrap();
        assert_eq!(process.exit_code().unwrap(), 3);
    }

    #[test]
    fn test_exit_code_before_exit_is_invalid_operation() {
        let mut process = spawn("sleep 5");
        let err = process.exit_code().unwrap_err();
        assert!(err.is_invalid_operation());
        process.kill().unwrap();
    }

    #[test]
    fn test_standard_output_lines() {
        let mut process = spawn("echo one; echo two");
        let lines: Vec<_> = process.standard_output().collect();
        process.wait_for_exit().unwrap();
        assert_eq!(lines, ["one", "two"]);
    }

    #[test]
    fn test_output_outlives_process_handle() {
        let child = Command::new("sh")
            .arg("-c")
            .arg("echo token=hunter2; echo done")
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();
        let mut filter = ProcessArgumentBuilder::new();
        filter.append_secret("hunter2");
        let mut process = ProcessWrapper::new(child, filter);

        let output = process.standard_output();
        drop(process);
        let lines: Vec<_> = output.collect();
        assert_eq!(lines, ["token=hunter2", "done"]);
    }

    #[test]
    fn test_standard_error_lines() {
        let mut process = spawn("echo oops >&2");
        let lines: Vec<_> = process.standard_error().collect();
        assert_eq!(lines, ["oops"]);
    }

    #[test]
    fn test_output_can_only_be_taken_once() {
        let mut process = spawn("echo once");
        assert_eq!(process.standard_output().count(), 1);
        assert_eq!(process.standard_output().count(), 0);
    }

    #[test]
    fn test_timeout_kills_process() {
        let mut process = spawn("sleep 5");
        let exited = process
            .wait_for_exit_timeout(Duration::from_millis(50))
            .unwrap();
        assert!(!exited);
        assert_eq!(process.exit_code().unwrap(), -1);
    }

    #[test]
    fn test_timeout_returns_true_on_natural_exit() {
        let mut process = spawn("exit 0");
        assert!(process.wait_for_exit_timeout(Duration::from_secs(5)).unwrap());
        assert_eq!(process.exit_code().unwrap(), 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_drop_reaps_exited_process() {
        let process = spawn("exit 0");
        let proc_entry = std::path::PathBuf::from(format!("/proc/{}", process.id()));
        let stat = proc_entry.join("stat");

        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            let state = std::fs::read_to_string(&stat).unwrap_or_default();
            if state.rsplit(')').next().is_some_and(|rest| rest.trim_start().starts_with('Z')) {
                break;
            }
            thread::sleep(POLL_INTERVAL);
        }

        drop(process);
        assert!(!proc_entry.exists());
    }
}
