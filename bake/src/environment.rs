//! Platform capability and environment queries.
//!
//! The core only needs two facts from its surroundings: the current working
//! directory (to anchor relative paths and glob patterns) and the platform
//! family (to decide case sensitivity and drive-letter handling). Both are
//! supplied through the [`Environment`] trait so tests can substitute them.

use std::env;
use std::fmt;

use crate::error::{Error, Result};
use crate::path::DirectoryPath;

/// The family of operating system a build is running on.
///
/// # Examples
///
/// ```
/// use bake::PlatformFamily;
///
/// assert!(PlatformFamily::Unix.is_unix());
/// assert!(!PlatformFamily::Windows.is_unix());
/// assert!(PlatformFamily::Windows.is_windows());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// Windows and its derivatives (drive letters, case-insensitive paths).
    Windows,
    /// Linux, macOS, the BSDs (rooted at `/`, case-sensitive paths).
    Unix,
    /// Anything else.
    Other,
}

impl PlatformFamily {
    /// Returns the family of the host the library was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(unix) {
            Self::Unix
        } else {
            Self::Other
        }
    }

    /// Whether this is a Unix family platform.
    #[must_use]
    pub const fn is_unix(self) -> bool {
        matches!(self, Self::Unix)
    }

    /// Whether this is a Windows family platform.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Whether paths on this platform compare case-sensitively by default.
    #[must_use]
    pub const fn is_case_sensitive(self) -> bool {
        self.is_unix()
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Unix => write!(f, "unix"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Ambient facts about the process the build runs in.
pub trait Environment: Send + Sync {
    /// The directory relative paths and patterns are anchored to.
    fn working_directory(&self) -> DirectoryPath;

    /// The platform family of the build host.
    fn platform(&self) -> PlatformFamily;
}

/// [`Environment`] backed by the real process state.
///
/// # Examples
///
/// ```
/// use bake::{Environment, SystemEnvironment};
///
/// let environment = SystemEnvironment::new().unwrap();
/// assert!(!environment.working_directory().is_relative());
/// ```
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    working_directory: DirectoryPath,
}

impl SystemEnvironment {
    /// Captures the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let cwd = env::current_dir()?;
        let cwd = cwd.to_str().ok_or_else(|| {
            Error::invalid_argument("working_directory", "Path contains invalid UTF-8")
        })?;
        Ok(Self {
            working_directory: DirectoryPath::new(cwd)?,
        })
    }

    /// Uses `working_directory` instead of the process working directory.
    #[must_use]
    pub fn with_working_directory(working_directory: DirectoryPath) -> Self {
        Self { working_directory }
    }
}

impl Environment for SystemEnvironment {
    fn working_directory(&self) -> DirectoryPath {
        self.working_directory.clone()
    }

    fn platform(&self) -> PlatformFamily {
        PlatformFamily::current()
    }
}
