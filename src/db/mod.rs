//! Persistence layer for taskfile.
//!
//! The whole task list lives in one JSON document. [`tasks::TaskStore`] reads
//! it in full on every load and rewrites it in full on every save; nothing is
//! cached between calls.
//!
//! ```rust,no_run
//! use taskfile::db::tasks::TaskStore;
//! use taskfile::libs::task::Task;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let store = TaskStore::new("tasks.json");
//! let mut tasks = store.load_all().await.into_tasks();
//! tasks.push(Task::new("Review code", "Check PR #123")?.into());
//! store.save_all(&tasks).await?;
//! # Ok(())
//! # }
//! ```

pub mod tasks;
