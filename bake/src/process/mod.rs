//! Process execution with redacted logging.
//!
//! Arguments are built with [`ProcessArgumentBuilder`], which keeps two
//! renderings of every argument: the real one handed to the OS and a safe
//! one for logs, where secrets become `[REDACTED]`. [`ProcessRunner`]
//! resolves [`ProcessSettings`] and hands the result to a
//! [`ProcessLauncher`].
//!
//! # Examples
//!
//! ```no_run
//! use bake::path::FilePath;
//! use bake::process::{ProcessArgumentBuilder, ProcessRunner, ProcessSettings};
//!
//! let mut arguments = ProcessArgumentBuilder::new();
//! arguments.append_text("build").append_switch_secret("--token", "=", "s3cr3t");
//!
//! let settings = ProcessSettings::new()
//!     .with_arguments(arguments)
//!     .with_redirected_standard_output(true);
//!
//! let runner = ProcessRunner::system().unwrap();
//! let tool = FilePath::new("/usr/bin/tool").unwrap();
//! if let Some(mut process) = runner.start(Some(&tool), &settings).unwrap() {
//!     for line in process.standard_output() {
//!         println!("{line}");
//!     }
//!     process.wait_for_exit().unwrap();
//! }
//! ```

mod argument;
mod builder;
mod command_line;
pub(crate) mod launcher;
mod runner;
mod settings;
mod wrapper;

pub use argument::{ProcessArgument, REDACTED};
pub use builder::ProcessArgumentBuilder;
pub use command_line::split_command_line;
pub use launcher::{ProcessLauncher, ProcessStartInfo, SystemProcessLauncher};
pub use runner::ProcessRunner;
pub use settings::ProcessSettings;
pub use wrapper::{Process, ProcessWrapper};
