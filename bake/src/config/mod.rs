//! Configuration system for bake.
//!
//! Configuration is layered from several sources. From highest to lowest
//! precedence:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`BAKE_*`)
//! 3. Project config (the nearest `bake.yaml`)
//! 4. User config (`~/.bake/config.yaml`)
//! 5. Built-in defaults
//!
//! The merged [`Config`] feeds the core through
//! [`Config::globber_settings`] and [`Config::process_settings`].
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use bake::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("Verbosity: {}", config.verbosity());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use std::time::Duration;
//! use bake::config::{Config, ConfigBuilder, ProcessConfig};
//!
//! let custom = Config {
//!     process: Some(ProcessConfig { timeout_ms: Some(5_000), ..Default::default() }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.process_settings().timeout, Some(Duration::from_secs(5)));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, GlobConfig, ProcessConfig};
pub use validator::ConfigValidator;
