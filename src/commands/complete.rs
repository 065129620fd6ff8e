//! `complete` command: marks the first task with a given title as completed.
//!
//! Matching is exact and case-sensitive. The file is rewritten only when a
//! task matched.

use crate::db::tasks::TaskStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{validate_title, TaskError};
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for `taskfile complete`.
#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Exact, case-sensitive title of the task to complete
    title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteOutcome {
    NoTasks,
    NotFound(String),
    Completed(String),
}

impl CompleteOutcome {
    pub fn message(&self) -> Message {
        match self {
            CompleteOutcome::NoTasks => Message::TasksNotFound,
            CompleteOutcome::NotFound(title) => Message::TaskNotFound(title.clone()),
            CompleteOutcome::Completed(title) => Message::TaskCompleted(title.clone()),
        }
    }
}

/// Marks the first task titled exactly `title` as completed.
///
/// The file is only rewritten when a matching task exists. Completing an
/// already completed task rewrites the same content.
pub async fn run(store: &TaskStore, title: &str) -> Result<CompleteOutcome, TaskError> {
    let title = validate_title(title)?;

    let mut tasks = store.load_all().await.into_tasks();
    if tasks.is_empty() {
        return Ok(CompleteOutcome::NoTasks);
    }

    let Some(task) = tasks.iter_mut().find(|task| task.has_title(title)) else {
        return Ok(CompleteOutcome::NotFound(title.to_string()));
    };
    task.complete();
    store.save_all(&tasks).await?;

    tracing::debug!(title, "task completed");
    Ok(CompleteOutcome::Completed(title.to_string()))
}

/// Entry point for `taskfile complete`.
pub async fn cmd(args: CompleteArgs, config: &Config) -> Result<()> {
    let outcome = run(&config.store(), &args.title)
        .await
        .map_err(|e| msg_error_anyhow!(Message::TaskCompleteFailed(e.to_string())))?;

    msg_print!(outcome.message());
    Ok(())
}
