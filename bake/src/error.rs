//! Error types for the bake library.
//!
//! This module provides the error hierarchy shared by the path, glob and
//! process layers, using `thiserror` for ergonomic error handling.
//!
//! The variants follow a small taxonomy:
//! - argument errors are raised at construction or call time and name the
//!   offending parameter,
//! - invalid-operation errors are raised by APIs that would otherwise build
//!   a nonsensical path,
//! - domain errors signal a policy violation (absolutizing against a
//!   relative base, starting a process without a filename),
//! - not-supported errors mark inputs the core refuses outright (UNC glob
//!   roots).

use thiserror::Error;

/// Result type alias for operations that may fail with a bake error.
///
/// # Examples
///
/// ```
/// use bake::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bake library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was empty, malformed or otherwise unusable.
    #[error("invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// The name of the offending parameter.
        parameter: String,
        /// The reason the argument was rejected.
        reason: String,
    },

    /// The requested operation makes no sense for the given inputs.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// A description of the rejected operation.
        message: String,
    },

    /// A policy violation that callers are expected to surface to users.
    #[error("{message}")]
    Domain {
        /// Human-readable description of the violation.
        message: String,
    },

    /// The input is recognized but deliberately unsupported.
    #[error("not supported: {message}")]
    NotSupported {
        /// A description of the unsupported input.
        message: String,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub(crate) fn invalid_argument(parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for building an [`Error::InvalidOperation`].
    pub(crate) fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Shorthand for building an [`Error::Domain`].
    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Check if error was raised for a malformed argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::path::FilePath;
    ///
    /// let err = FilePath::new("   ").unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error was raised for an invalid operation.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }

    /// Check if error is a domain (policy) error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bake::Error;
    ///
    /// let err = Error::Domain { message: "Could not start process.".to_string() };
    /// assert!(err.is_domain());
    /// assert_eq!(err.to_string(), "Could not start process.");
    /// ```
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// Check if error marks an unsupported input.
    #[must_use]
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::invalid_argument("path", "Path cannot be empty.");
        let display = format!("{err}");
        assert!(display.contains("invalid argument"));
        assert!(display.contains("'path'"));
        assert!(display.contains("Path cannot be empty."));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_operation_error() {
        let err = Error::invalid_operation("Cannot combine a directory path with an absolute file path.");
        let display = format!("{err}");
        assert!(display.starts_with("invalid operation"));
        assert!(err.is_invalid_operation());
        assert!(!err.is_domain());
    }

    #[test]
    fn test_domain_error_displays_message_only() {
        let err = Error::domain("Cannot start process since no filename has been set.");
        assert_eq!(
            err.to_string(),
            "Cannot start process since no filename has been set."
        );
        assert!(err.is_domain());
    }

    #[test]
    fn test_not_supported_error() {
        let err = Error::NotSupported {
            message: "UNC paths are not supported.".to_string(),
        };
        assert!(err.to_string().contains("not supported"));
        assert!(err.is_not_supported());
    }

    #[test]
    fn test_invalid_pattern_error() {
        let err = Error::InvalidPattern {
            pattern: "/a/[b".to_string(),
            reason: "unterminated character set".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("/a/[b"));
        assert!(display.contains("unterminated"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "process.timeout_ms".to_string(),
            message: "must be greater than zero".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("process.timeout_ms"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u16> {
            Err(Error::domain("nope"))
        }

        assert!(returns_result().is_err());
    }
}
