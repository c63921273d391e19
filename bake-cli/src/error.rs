//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use bake::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// The child process did not exit in time and was killed.
    Timeout {
        /// The timeout that elapsed, in milliseconds.
        millis: u64,
    },

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., no process was started) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., no process was started)
    /// - 2: Child process timed out
    /// - 4: Invalid arguments, paths or patterns
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    ///
    /// `run` exits with the child's own exit code when the child runs to
    /// completion.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Timeout { .. } => 2,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
            CliError::Library(lib_err) => match lib_err {
                LibError::InvalidArgument { .. }
                | LibError::InvalidPattern { .. }
                | LibError::NotSupported { .. } => 4,
                LibError::Io(_) => 5,
                LibError::Configuration(_) | LibError::Validation { .. } => 7,
                _ => 6,
            },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout { millis } => {
                write!(f, "Process did not exit within {millis} ms and was killed")
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_errors_map_to_stable_codes() {
        let invalid = LibError::InvalidArgument {
            parameter: "path".into(),
            reason: "Illegal characters in path.".into(),
        };
        assert_eq!(CliError::from(invalid).exit_code(), 4);

        let unsupported = LibError::NotSupported {
            message: "UNC paths are not supported.".into(),
        };
        assert_eq!(CliError::from(unsupported).exit_code(), 4);

        let io = LibError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(CliError::from(io).exit_code(), 5);

        let validation = LibError::Validation {
            field: "process.timeout_ms".into(),
            message: "must be greater than zero".into(),
        };
        assert_eq!(CliError::from(validation).exit_code(), 7);

        let domain = LibError::Domain {
            message: "Cannot start process since no filename has been set.".into(),
        };
        assert_eq!(CliError::from(domain).exit_code(), 6);
    }

    #[test]
    fn test_cli_errors_map_to_stable_codes() {
        assert_eq!(CliError::SemanticFailure(String::new()).exit_code(), 1);
        assert_eq!(CliError::Timeout { millis: 10 }.exit_code(), 2);
        assert_eq!(CliError::InvalidArguments(String::new()).exit_code(), 4);
        assert_eq!(CliError::Config(String::new()).exit_code(), 7);
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            CliError::Timeout { millis: 250 }.to_string(),
            "Process did not exit within 250 ms and was killed"
        );
    }
}
