//! Runtime configuration for taskfile.
//!
//! The only setting is where the task file lives. It is resolved, highest
//! priority first, from:
//!
//! - the `--file` command-line flag,
//! - the `TASKFILE_PATH` environment variable (also read from a `.env` file in
//!   the working directory),
//! - `tasks.json` in the working directory.
//!
//! Relative paths are resolved against the working directory through
//! [`DataStorage`].

use super::data_storage::DataStorage;
use crate::db::tasks::{TaskStore, TASKS_FILE_NAME};
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the task file location.
pub const TASKS_PATH_ENV: &str = "TASKFILE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tasks_file: PathBuf,
}

impl Config {
    /// Loads `.env` if present and resolves the configuration from the
    /// process environment.
    pub fn load(file_override: Option<PathBuf>) -> Self {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        let from_env = env::var(TASKS_PATH_ENV).ok();
        Self::resolve(&DataStorage::new(), file_override, from_env)
    }

    /// Picks the task file from the flag, then the environment value, then
    /// the default name. Empty environment values are ignored.
    pub fn resolve(storage: &DataStorage, file_override: Option<PathBuf>, from_env: Option<String>) -> Self {
        let file = file_override
            .or_else(|| from_env.filter(|value| !value.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(TASKS_FILE_NAME));

        Config {
            tasks_file: storage.get_path(file),
        }
    }

    pub fn store(&self) -> TaskStore {
        TaskStore::new(self.tasks_file.clone())
    }
}
