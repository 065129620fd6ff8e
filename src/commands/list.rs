//! `list` command: prints every task as `title : status`.
//!
//! Read-only. An empty, missing or unusable file is reported as
//! `No tasks found.`.

use crate::db::tasks::TaskStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::TaskEntry;
use crate::msg_print;
use anyhow::Result;

/// What a listing found.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    Empty,
    Tasks(Vec<TaskEntry>),
}

impl ListOutcome {
    /// Lines to print, in file order.
    pub fn messages(&self) -> Vec<Message> {
        match self {
            ListOutcome::Empty => vec![Message::TasksNotFound],
            ListOutcome::Tasks(tasks) => tasks.iter().map(TaskEntry::summary).collect(),
        }
    }
}

/// Reads the task file and reports every task. Never writes.
pub async fn run(store: &TaskStore) -> ListOutcome {
    let tasks = store.load_all().await.into_tasks();
    if tasks.is_empty() {
        ListOutcome::Empty
    } else {
        ListOutcome::Tasks(tasks)
    }
}

/// Entry point for `taskfile list`.
pub async fn cmd(config: &Config) -> Result<()> {
    for message in run(&config.store()).await.messages() {
        msg_print!(message);
    }
    Ok(())
}
