//! Core library modules for taskfile.
//!
//! - [`task`]: the task record and its validation
//! - [`shell`]: the menu state machine driven by the interactive shell
//! - [`config`] and [`data_storage`]: where the task file lives
//! - [`messages`]: all user-facing text and the macros that print it

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod shell;
pub mod task;
