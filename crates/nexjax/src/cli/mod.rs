//! CLI definition and command handling

mod discover;
pub mod output;
mod summary;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use nexjax_core::{ConfigureOptions, ConfigureWorkflow};

pub use discover::find_project_root;

/// Sync app.json / package.json settings into the native iOS project
#[derive(Debug, Parser)]
#[command(name = "nexjax")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Apple development team ID; saved to ios.config.json and applied
    #[arg(env = "NEXJAX_TEAM_ID")]
    pub team_id: Option<String>,

    /// Project root (skips searching parent directories)
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        let root = match &self.directory {
            Some(dir) => dir.clone(),
            None => find_project_root(&std::env::current_dir()?),
        };
        info!(root = %root.display(), team_id = ?self.team_id, "configuring iOS project");

        let text = self.format == OutputFormat::Text && !self.quiet;
        if text {
            output::info("Configuring iOS project settings...");
            println!();
        }

        let options = ConfigureOptions {
            team_id: self.team_id.clone(),
        };
        let report = ConfigureWorkflow::new(&root, options).execute()?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text if !self.quiet => summary::print(&report),
            OutputFormat::Text => {}
        }

        Ok(())
    }
}
