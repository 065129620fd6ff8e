//! Display implementation for taskfile messages.
//!
//! All console text is defined here so the shell, the subcommands and the
//! tests agree on a single wording. Prompts carry their trailing space and no
//! newline; the shell writes them as-is.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

/// Menu shown every time the shell returns to the top-level selection.
pub const MENU_PROMPT: &str = "\nEnter 1 to List all tasks.\nEnter 2 to Add a new task.\nEnter 3 to Mark a task as completed.\nEnter \"exit\" to leave.\nEnter Selection: ";

/// Placeholder printed when a stored task has no title.
pub const NO_TITLE: &str = "(no title)";

/// Placeholder printed when a stored task has no status.
pub const NO_STATUS: &str = "(no status)";

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SHELL MESSAGES ===
            Message::Welcome => "Welcome to the task manager. Please select from the following:".to_string(),
            Message::MenuPrompt => MENU_PROMPT.to_string(),
            Message::PromptTitle => "Enter a title: ".to_string(),
            Message::PromptDescription => "Enter a Description: ".to_string(),
            Message::NoOptionDetected => "No option detected. Please enter an option.".to_string(),
            Message::UnrecognizedCommand => "Your command is unrecognized. Please try again from the following options.".to_string(),
            Message::ListingTasks => "\nListing all tasks:".to_string(),
            Message::AddTaskIntro => "\nAdding a Task requires task Title and Description".to_string(),
            Message::CompleteTaskIntro => "\nMarking a Task completed requires a task Title".to_string(),
            Message::Goodbye => "Goodbye!".to_string(),
            Message::UnexpectedError(error) => format!("Unexpected Error: {}", error),

            // === TASK MESSAGES ===
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TasksResetToEmpty => "No tasks found. Resetting to Empty List".to_string(),
            Message::TaskLine { title, status } => format!(
                "\t{} : {}",
                title.as_deref().unwrap_or(NO_TITLE),
                status.as_deref().unwrap_or(NO_STATUS)
            ),
            Message::TaskAdded(title) => format!("Task {} has been added", title),
            Message::TaskNotFound(title) => format!("Task {} not found", title),
            Message::TaskCompleted(title) => format!("Task \"{}\" marked as completed", title),
            Message::TaskTitleRequired => "A valid task title is required".to_string(),
            Message::TaskAddFailed(error) => format!("Error encountered while adding task: {}", error),
            Message::TaskCompleteFailed(error) => format!("Error completing task: {}", error),

            // === STORE MESSAGES ===
            Message::StoreFileNotFound(path) => format!("{} file not found, starting with an empty list.", path),
            Message::StoreFileCorrupted(path) => format!("Error parsing {}, file may be corrupted.", path),
            Message::StoreReadFailed(error) => format!("Error getting tasks: {}", error),
        };

        write!(f, "{}", text)
    }
}
