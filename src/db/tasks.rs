//! Whole-file JSON storage for the task list.
//!
//! The file holds one JSON array. Loading accepts any array: elements that
//! fit a [`Task`] are typed, the rest are carried as raw JSON in a
//! [`TaskEntry`] so a later save writes them back as they were. Only content
//! that is not JSON, or JSON that is not an array, is rejected.

use crate::libs::messages::Message;
use crate::libs::task::TaskEntry;
use crate::{msg_debug, msg_error, msg_warning};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Default name of the task file.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Failure to persist the task list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write task file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of reading the task file.
///
/// Only [`LoadOutcome::Loaded`] carries tasks. Every other variant has
/// already been reported to the user by [`TaskStore::load_all`]; callers that
/// just want a list use [`LoadOutcome::into_tasks`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<TaskEntry>),
    /// The file does not exist.
    Missing,
    /// The file exists but is not a JSON array.
    Invalid(String),
    /// The file could not be read at all.
    Unreadable(String),
}

impl LoadOutcome {
    /// Treats anything but a successfully parsed file as an empty list.
    pub fn into_tasks(self) -> Vec<TaskEntry> {
        match self {
            LoadOutcome::Loaded(tasks) => tasks,
            LoadOutcome::Missing | LoadOutcome::Invalid(_) | LoadOutcome::Unreadable(_) => Vec::new(),
        }
    }
}

/// Whole-file JSON store for the task list.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used in messages, without the directory it was resolved in.
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// What to tell the user about a load outcome, `None` when it loaded.
    pub fn diagnostic(&self, outcome: &LoadOutcome) -> Option<Message> {
        match outcome {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Missing => Some(Message::StoreFileNotFound(self.label())),
            LoadOutcome::Invalid(_) => Some(Message::StoreFileCorrupted(self.label())),
            LoadOutcome::Unreadable(reason) => Some(Message::StoreReadFailed(reason.clone())),
        }
    }

    /// Reads and parses the task file.
    ///
    /// Never fails: a missing file is reported as a warning, a corrupted or
    /// unreadable file as an error, and the caller gets a tagged outcome. A
    /// corrupted file is left on disk as it is.
    pub async fn load_all(&self) -> LoadOutcome {
        msg_debug!("Loading tasks from {}", self.path.display());

        let outcome = match fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str::<Vec<TaskEntry>>(&content) {
                Ok(tasks) => LoadOutcome::Loaded(tasks),
                Err(e) => {
                    tracing::debug!(error = %e, path = %self.path.display(), "task file rejected");
                    LoadOutcome::Invalid(e.to_string())
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => LoadOutcome::Missing,
            Err(e) => LoadOutcome::Unreadable(e.to_string()),
        };

        match (&outcome, self.diagnostic(&outcome)) {
            (LoadOutcome::Loaded(tasks), _) => msg_debug!("Loaded {} task(s)", tasks.len()),
            (LoadOutcome::Missing, Some(message)) => msg_warning!(message),
            (_, Some(message)) => msg_error!(message),
            (_, None) => {}
        }
        outcome
    }

    /// Overwrites the task file with the full list, pretty-printed with a
    /// two-space indent.
    pub async fn save_all(&self, tasks: &[TaskEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json.as_bytes()).await?;
        msg_debug!("Saved {} task(s), {} bytes", tasks.len(), json.len());
        Ok(())
    }
}
