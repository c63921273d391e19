//! Command to show the relative path between two paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use bake::{DirectoryPath, FilePath};
use clap::Args;

/// Show the path of `to` relative to the directory `from`.
#[derive(Args)]
pub struct RelativeCommand {
    /// Absolute directory to start from
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Absolute path to reach
    #[arg(value_name = "TO")]
    pub to: String,

    /// Treat TO as a file rather than a directory
    #[arg(long)]
    pub file: bool,
}

impl RelativeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let from = DirectoryPath::new(&self.from)?;

        let relative = if self.file {
            from.relative_path_to_file(&FilePath::new(&self.to)?)?
                .to_string()
        } else {
            from.relative_path_to_directory(&DirectoryPath::new(&self.to)?)?
                .to_string()
        };

        println!("{relative}");
        Ok(())
    }
}
