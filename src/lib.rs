//! # taskfile
//!
//! An interactive command-line task manager. Tasks are kept in a single
//! JSON file that is read in full and rewritten in full on every operation.
//!
//! ## Features
//!
//! - **Interactive shell**: a numbered menu to list, add and complete tasks
//! - **One-shot subcommands**: `list`, `add` and `complete` for scripting
//! - **Forgiving storage**: a missing or corrupted file reads as an empty list
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskfile::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
