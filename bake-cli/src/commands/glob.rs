//! Command to match a glob pattern against the filesystem.

use crate::error::CliError;
use crate::utils::{load_configuration, system_environment, GlobalOptions};
use bake::io::PhysicalFileSystem;
use bake::{DirectoryPath, Globber, Path};
use clap::Args;
use log::debug;
use serde::Serialize;
use std::sync::Arc;

/// Print every path matching a glob pattern, one per line.
#[derive(Args)]
pub struct GlobCommand {
    /// Glob pattern (supports `*`, `?`, `[...]`, `{a,b}` and `**`)
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Directory that relative patterns are anchored at
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,

    /// Match case-sensitively regardless of platform
    #[arg(long)]
    pub case_sensitive: bool,

    /// Only print files
    #[arg(long, conflicts_with = "directories")]
    pub files: bool,

    /// Only print directories
    #[arg(long)]
    pub directories: bool,

    /// Print a JSON array of `{path, kind}` objects instead of plain lines
    #[arg(long)]
    pub json: bool,
}

/// One match in `--json` output.
#[derive(Serialize)]
struct GlobMatch {
    path: String,
    kind: &'static str,
}

impl From<&Path> for GlobMatch {
    fn from(path: &Path) -> Self {
        Self {
            path: path.to_string(),
            kind: if path.is_file() { "file" } else { "directory" },
        }
    }
}

impl GlobCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let environment = system_environment(None)?;

        let mut settings = config.globber_settings();
        if let Some(root) = &self.root {
            settings = settings.with_root(DirectoryPath::new(root)?);
        }
        if self.case_sensitive {
            settings = settings.with_case_sensitivity(true);
        }

        let globber = Globber::new(Arc::new(PhysicalFileSystem::new()), Arc::new(environment));

        let found: Vec<Path> = if self.files {
            globber
                .match_files(&self.pattern, &settings)?
                .into_iter()
                .map(Path::from)
                .collect()
        } else if self.directories {
            globber
                .match_directories(&self.pattern, &settings)?
                .into_iter()
                .map(Path::from)
                .collect()
        } else {
            globber.match_pattern(&self.pattern, &settings)?
        };

        debug!("Pattern '{}' matched {} paths", self.pattern, found.len());

        if self.json {
            let matches: Vec<GlobMatch> = found.iter().map(GlobMatch::from).collect();
            let json = serde_json::to_string_pretty(&matches)
                .map_err(std::io::Error::from)?;
            println!("{json}");
        } else {
            for path in &found {
                println!("{path}");
            }
        }
        Ok(())
    }
}
