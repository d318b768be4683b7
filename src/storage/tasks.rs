use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::task::TaskStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Task store file name inside the application data directory.
pub const TASKS_FILE_NAME: &str = "exercise.json";

/// File-backed handle to the task store.
///
/// Loading an absent file yields an empty store; a malformed file is an
/// error rather than a silent reset.
pub struct Tasks {
    path: PathBuf,
}

impl Tasks {
    /// Resolves the store location from configuration, falling back to
    /// the platform data directory.
    pub fn new() -> Result<Tasks> {
        let config = Config::read()?;
        let path = match config.data_file {
            Some(path) => path,
            None => DataStorage::new().get_path(TASKS_FILE_NAME)?,
        };
        Ok(Tasks { path })
    }

    /// Store handle bound to an explicit file path.
    pub fn with_path(path: PathBuf) -> Tasks {
        Tasks { path }
    }

    pub fn load(&self) -> Result<TaskStore> {
        if !self.path.exists() {
            return Ok(TaskStore::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read task store at {}", self.path.display()))?;
        let store: TaskStore = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse task store at {}", self.path.display()))?;
        Ok(store)
    }

    pub fn save(&self, store: &TaskStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write task store at {}", self.path.display()))?;
        Ok(())
    }
}
