use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Classify images with a hosted vision model.
#[derive(Debug, Parser)]
#[command(name = "visionary", version, about)]
pub struct Cli {
    /// TOML configuration file (defaults to the per-user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Upload each image in order and show the session after every change
    Classify {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Print the final session state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate a descriptive caption for one image
    Describe {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Read image paths from stdin (the default)
    Interactive,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
