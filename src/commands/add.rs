//! `add` command: appends a new task to the end of the file.
//!
//! The title is validated before anything is read or written. Elements of
//! the existing file that are not well-formed tasks are written back as they
//! were.

use crate::db::tasks::TaskStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskError};
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for `taskfile add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title of the new task
    title: String,

    /// Optional longer description
    #[arg(short, long, default_value = "")]
    description: String,
}

/// A task that was added, and whether the file held nothing before it.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub task: Task,
    /// The file held no tasks (or could not be used) before this one.
    pub started_empty: bool,
}

impl AddOutcome {
    pub fn title(&self) -> &str {
        self.task.title.as_deref().unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<Message> {
        let mut messages = Vec::with_capacity(2);
        if self.started_empty {
            messages.push(Message::TasksResetToEmpty);
        }
        messages.push(Message::TaskAdded(self.title().to_string()));
        messages
    }
}

/// Appends a new, not yet completed task and rewrites the file.
///
/// The title is checked before the file is touched; an empty title writes
/// nothing. Duplicate titles are allowed.
pub async fn run(store: &TaskStore, title: &str, description: &str) -> Result<AddOutcome, TaskError> {
    let task = Task::new(title, description)?;

    let mut tasks = store.load_all().await.into_tasks();
    let started_empty = tasks.is_empty();
    tasks.push(task.clone().into());
    store.save_all(&tasks).await?;

    tracing::debug!(title, count = tasks.len(), "task added");
    Ok(AddOutcome { task, started_empty })
}

/// Entry point for `taskfile add`.
///
/// Prints the same lines as the shell; a rejected title or a failed save is
/// returned as an error.
pub async fn cmd(args: AddArgs, config: &Config) -> Result<()> {
    let outcome = run(&config.store(), &args.title, &args.description)
        .await
        .map_err(|e| msg_error_anyhow!(Message::TaskAddFailed(e.to_string())))?;

    for message in outcome.messages() {
        msg_print!(message);
    }
    Ok(())
}
