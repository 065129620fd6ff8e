//! User-facing text for the taskfile application.
//!
//! Every string the shell, the subcommands and the store print is a
//! [`Message`] variant. The text lives in [`display`], the routing macros in
//! [`macros`].

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
