use std::env;
use std::path::{Path, PathBuf};

/// Resolves data file locations against a base directory.
///
/// The base is the process's working directory unless one is given
/// explicitly. Absolute paths are returned untouched.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { base_path }
    }

    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn get_path(&self, file: impl AsRef<Path>) -> PathBuf {
        let file = file.as_ref();
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.base_path.join(file)
        }
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
