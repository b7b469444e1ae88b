use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::task::{Task, TaskError};
use crate::msg_debug;
use std::collections::HashSet;
use std::fs::{self, File};
use std::path::PathBuf;

/// Store file name under the application data directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Persistence slot holding the whole task collection as one JSON document.
///
/// The slot is written wholesale after every mutation and read once at
/// store construction. A missing file is a normal first run, not an error.
#[derive(Debug)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    /// Resolves the slot path: the configured storage directory when set,
    /// the default application data directory otherwise.
    pub fn new() -> Result<Db, TaskError> {
        let path = match Config::read().unwrap_or_default().storage {
            Some(storage) => {
                fs::create_dir_all(&storage.dir)?;
                storage.dir.join(TASKS_FILE_NAME)
            }
            None => DataStorage::new().get_path(TASKS_FILE_NAME)?,
        };

        Ok(Db { path })
    }

    /// Reads the stored collection.
    ///
    /// Returns an empty collection when the slot does not exist yet.
    /// Malformed content, wrong field types, and duplicate IDs are all
    /// rejected as [`TaskError::CorruptStore`]; nothing is repaired.
    pub fn load(&self) -> Result<Vec<Task>, TaskError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(|err| TaskError::CorruptStore(err.to_string()))?;

        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(TaskError::CorruptStore(format!("duplicate task ID {}", task.id)));
            }
        }

        msg_debug!("loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Overwrites the slot with the full collection.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, tasks)?;

        msg_debug!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
