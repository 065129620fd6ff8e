//! State machine behind the interactive menu.
//!
//! The shell consumes one line of input per step. [`transition`] maps the
//! current [`ShellState`] and that line to the next state plus at most one
//! [`Effect`] for the driver to perform; it does no I/O itself.
//!
//! ```text
//!                  "1" / hint / unknown
//!                 ┌──────────────┐
//!                 ▼              │
//!   ┌──────────────────────────────┐  "exit"   ┌────────┐
//!   │    AwaitingMenuSelection     │──────────▶│ Closed │
//!   └──────────────────────────────┘           └────────┘
//!      │ "2"      ▲           ▲   │ "3"
//!      ▼          │           │   ▼
//!   AwaitingAddTitle          │  AwaitingCompleteTitle
//!      │ title    │           │   │ title
//!      ▼          │ desc      └───┘ (complete)
//!   AwaitingAddDescription ───┘ (add)
//! ```

use crate::libs::messages::Message;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    AwaitingMenuSelection,
    AwaitingAddTitle,
    AwaitingAddDescription {
        title: String,
    },
    AwaitingCompleteTitle,
    Closed,
}

impl ShellState {
    /// Prompt to show on entering this state, `None` once closed.
    pub fn prompt(&self) -> Option<Message> {
        match self {
            ShellState::AwaitingMenuSelection => Some(Message::MenuPrompt),
            ShellState::AwaitingAddTitle | ShellState::AwaitingCompleteTitle => Some(Message::PromptTitle),
            ShellState::AwaitingAddDescription { .. } => Some(Message::PromptDescription),
            ShellState::Closed => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ShellState::Closed)
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Print(Message),
    ListTasks,
    AddTask { title: String, description: String },
    CompleteTask { title: String },
    Close,
}

/// Advances the shell by one input line.
///
/// Menu selections are trimmed; follow-up answers (titles, descriptions) are
/// taken verbatim and validated later by the task operations.
pub fn transition(state: ShellState, line: &str) -> (ShellState, Option<Effect>) {
    match state {
        ShellState::AwaitingMenuSelection => select(line.trim()),
        ShellState::AwaitingAddTitle => (
            ShellState::AwaitingAddDescription { title: line.to_string() },
            None,
        ),
        ShellState::AwaitingAddDescription { title } => (
            ShellState::AwaitingMenuSelection,
            Some(Effect::AddTask {
                title,
                description: line.to_string(),
            }),
        ),
        ShellState::AwaitingCompleteTitle => (
            ShellState::AwaitingMenuSelection,
            Some(Effect::CompleteTask { title: line.to_string() }),
        ),
        ShellState::Closed => (ShellState::Closed, None),
    }
}

fn select(input: &str) -> (ShellState, Option<Effect>) {
    match input {
        "" => (ShellState::AwaitingMenuSelection, Some(Effect::Print(Message::NoOptionDetected))),
        "1" => (ShellState::AwaitingMenuSelection, Some(Effect::ListTasks)),
        "2" => (ShellState::AwaitingAddTitle, Some(Effect::Print(Message::AddTaskIntro))),
        "3" => (ShellState::AwaitingCompleteTitle, Some(Effect::Print(Message::CompleteTaskIntro))),
        exit if exit.eq_ignore_ascii_case("exit") => (ShellState::Closed, Some(Effect::Close)),
        _ => (ShellState::AwaitingMenuSelection, Some(Effect::Print(Message::UnrecognizedCommand))),
    }
}
