//! Command-line front end.
//!
//! Without a subcommand the interactive shell starts. The subcommands run a
//! single task operation against the same file and exit.

pub mod add;
pub mod complete;
pub mod list;
pub mod shell;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "List all tasks")]
    List,
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file to use instead of ./tasks.json
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let config = Config::load(self.file);
        tracing::debug!(file = %config.tasks_file.display(), "using task file");

        match self.command {
            None => shell::cmd(&config).await,
            Some(Commands::List) => list::cmd(&config).await,
            Some(Commands::Add(args)) => add::cmd(args, &config).await,
            Some(Commands::Complete(args)) => complete::cmd(args, &config).await,
        }
    }
}
