//! Logging infrastructure for bake.
//!
//! The library itself only talks to the [`log`] facade. This module provides
//! a simple stderr-based [`Logger`] that front ends can install, with five
//! verbosity levels.

use std::env;
use std::fmt;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable read by [`init_logger`] when no flag is given.
pub const VERBOSITY_ENV: &str = "BAKE_VERBOSITY";

/// Logging level for controlling output verbosity.
///
/// Levels are ordered from least verbose (Quiet) to most verbose
/// (Diagnostic).
///
/// # Examples
///
/// ```
/// use bake::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Verbose < LogLevel::Diagnostic);
/// assert_eq!(LogLevel::Diagnostic.filter(), log::LevelFilter::Trace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    Minimal,
    /// Errors, warnings and informational messages.
    #[default]
    Normal,
    /// Adds debug messages, including captured process output.
    Verbose,
    /// Everything, including the full unredacted command lines.
    Diagnostic,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Minimal => write!(f, "minimal"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
            Self::Diagnostic => write!(f, "diagnostic"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of the five level names.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("minimal").unwrap(), LogLevel::Minimal);
    /// assert_eq!(LogLevel::parse("DIAGNOSTIC").unwrap(), LogLevel::Diagnostic);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "minimal" => Ok(Self::Minimal),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            "diagnostic" => Ok(Self::Diagnostic),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter this level lets through.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Minimal => LevelFilter::Warn,
            Self::Normal => LevelFilter::Info,
            Self::Verbose => LevelFilter::Debug,
            Self::Diagnostic => LevelFilter::Trace,
        }
    }
}

impl serde::Serialize for LogLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for LogLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A stderr logger for the `log` facade.
///
/// Records above the configured level are dropped.
///
/// # Examples
///
/// ```
/// use bake::{LogLevel, Logger};
/// use log::Log;
///
/// let logger = Logger::new(LogLevel::Minimal);
/// assert!(logger.enabled(&log::Metadata::builder().level(log::Level::Warn).build()));
/// assert!(!logger.enabled(&log::Metadata::builder().level(log::Level::Info).build()));
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Install this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Fails if a logger has already been installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        // Nowhere left to report a failed write to stderr.
        let _ = writeln!(stderr, "{}: {}", record.level(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Picks a log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet`)
/// 2. `BAKE_VERBOSITY`
/// 3. Default (Normal)
///
/// An unrecognized `BAKE_VERBOSITY` value is ignored.
///
/// # Examples
///
/// ```
/// use bake::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(VERBOSITY_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
