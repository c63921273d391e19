use crate::environment::{Environment, PlatformFamily};
use crate::path::DirectoryPath;

/// An [`Environment`] with a fixed working directory and platform.
///
/// # Examples
///
/// ```
/// use bake::{Environment, PlatformFamily};
/// use bake::testing::FakeEnvironment;
///
/// let environment = FakeEnvironment::windows();
/// assert_eq!(environment.working_directory().full_path(), "C:/Working");
/// assert_eq!(environment.platform(), PlatformFamily::Windows);
/// ```
#[derive(Debug, Clone)]
pub struct FakeEnvironment {
    working_directory: DirectoryPath,
    platform: PlatformFamily,
}

impl FakeEnvironment {
    /// An environment on `platform` working in `working_directory`.
    #[must_use]
    pub fn new(platform: PlatformFamily, working_directory: DirectoryPath) -> Self {
        Self {
            working_directory,
            platform,
        }
    }

    /// A Unix environment working in `/Working`.
    #[must_use]
    pub fn unix() -> Self {
        Self::new(
            PlatformFamily::Unix,
            DirectoryPath::from_normalized("/Working".to_string()),
        )
    }

    /// A Windows environment working in `C:/Working`.
    #[must_use]
    pub fn windows() -> Self {
        Self::new(
            PlatformFamily::Windows,
            DirectoryPath::from_normalized("C:/Working".to_string()),
        )
    }

    /// Change the working directory.
    pub fn set_working_directory(&mut self, working_directory: DirectoryPath) {
        self.working_directory = working_directory;
    }
}

impl Environment for FakeEnvironment {
    fn working_directory(&self) -> DirectoryPath {
        self.working_directory.clone()
    }

    fn platform(&self) -> PlatformFamily {
        self.platform
    }
}
