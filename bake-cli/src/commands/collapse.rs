//! Command to collapse a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use bake::DirectoryPath;
use clap::Args;

/// Collapse `.` and `..` segments without touching the filesystem.
#[derive(Args)]
pub struct CollapseCommand {
    /// Path to collapse
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl CollapseCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let collapsed = DirectoryPath::new(&self.path)?.collapse();
        println!("{collapsed}");
        Ok(())
    }
}
