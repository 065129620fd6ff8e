use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use crate::db::tasks::StoreError;
use crate::libs::messages::Message;

/// Completion state of a task.
///
/// Stored as the plain strings `"not completed"` and `"completed"`. Any other
/// string found in the file is kept verbatim in [`TaskStatus::Other`] so a
/// load/save cycle writes it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    NotCompleted,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::NotCompleted => "not completed",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(status) => status,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "not completed" => TaskStatus::NotCompleted,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(value),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the task file.
///
/// `title` and `status` are optional because the file is user-editable and
/// may lack them; tasks created through [`Task::new`] always carry both.
/// Members this type does not know about are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Builds a new, not yet completed task.
    ///
    /// Fails with [`TaskError::TitleRequired`] when `title` is empty.
    pub fn new(title: &str, description: &str) -> Result<Self, TaskError> {
        let title = validate_title(title)?;
        Ok(Task {
            title: Some(title.to_string()),
            description: description.to_string(),
            status: Some(TaskStatus::NotCompleted),
            extra: Map::new(),
        })
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.title.as_deref() == Some(title)
    }

    pub fn complete(&mut self) {
        self.status = Some(TaskStatus::Completed);
    }
}

/// One element of the task array as found on disk.
///
/// Elements that fit [`Task`] are typed. Anything else (a `null`
/// description, a numeric status, a bare string) is kept as raw JSON so the
/// file is written back without losing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskEntry {
    Task(Task),
    Unrecognized(Value),
}

impl TaskEntry {
    pub fn as_task(&self) -> Option<&Task> {
        match self {
            TaskEntry::Task(task) => Some(task),
            TaskEntry::Unrecognized(_) => None,
        }
    }

    /// Title as shown when listing, `None` when absent or `null`.
    pub fn title(&self) -> Option<String> {
        match self {
            TaskEntry::Task(task) => task.title.clone(),
            TaskEntry::Unrecognized(value) => raw_field(value, "title"),
        }
    }

    /// Status as shown when listing, `None` when absent or `null`.
    pub fn status(&self) -> Option<String> {
        match self {
            TaskEntry::Task(task) => task.status.as_ref().map(|status| status.to_string()),
            TaskEntry::Unrecognized(value) => raw_field(value, "status"),
        }
    }

    /// Exact, case-sensitive match against a string title.
    pub fn has_title(&self, title: &str) -> bool {
        match self {
            TaskEntry::Task(task) => task.has_title(title),
            TaskEntry::Unrecognized(value) => value.get("title").and_then(Value::as_str) == Some(title),
        }
    }

    /// Sets the status to completed, leaving every other member untouched.
    pub fn complete(&mut self) {
        match self {
            TaskEntry::Task(task) => task.complete(),
            TaskEntry::Unrecognized(Value::Object(object)) => {
                object.insert("status".to_string(), Value::from(TaskStatus::Completed.as_str()));
            }
            TaskEntry::Unrecognized(_) => {}
        }
    }

    /// The `title : status` line shown when listing.
    pub fn summary(&self) -> Message {
        Message::TaskLine {
            title: self.title(),
            status: self.status(),
        }
    }
}

impl From<Task> for TaskEntry {
    fn from(task: Task) -> Self {
        TaskEntry::Task(task)
    }
}

fn raw_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Checks that a title given by the user is usable as a lookup key.
pub fn validate_title(title: &str) -> Result<&str, TaskError> {
    if title.is_empty() {
        return Err(TaskError::TitleRequired);
    }
    Ok(title)
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{}", Message::TaskTitleRequired)]
    TitleRequired,
    #[error(transparent)]
    Store(#[from] StoreError),
}
