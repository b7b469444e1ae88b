//! Task record, error taxonomy, and the pure query operations.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single task as it exists in memory and in the persisted store.
///
/// The serialized shape is exactly these three fields; the store file is a
/// JSON array of such objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the collection for its whole lifetime.
    pub id: u64,
    /// Never empty or whitespace-only after create/edit.
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Creates a new active task with the given id.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Errors produced by the task store and its persistence slot.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task text cannot be empty")]
    EmptyText,
    #[error("task with ID {0} not found")]
    NotFound(u64),
    #[error("task store is corrupted: {0}")]
    CorruptStore(String),
    #[error("failed to encode task store: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Completion-status filter applied to a collection snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskStatusFilter {
    /// Every task, unchanged.
    All,
    /// Only tasks not yet completed.
    Active,
    /// Only completed tasks.
    Completed,
}

impl TaskStatusFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            TaskStatusFilter::All => true,
            TaskStatusFilter::Active => !task.completed,
            TaskStatusFilter::Completed => task.completed,
        }
    }
}

/// Case-insensitive substring search over task text.
///
/// Preserves the snapshot order. An empty term matches every task.
pub fn search(tasks: &[Task], term: &str) -> Vec<Task> {
    let term = term.to_lowercase();
    tasks.iter().filter(|t| t.text.to_lowercase().contains(&term)).cloned().collect()
}

/// Keeps the tasks matching `filter`, in the snapshot order.
pub fn filter_by_status(tasks: &[Task], filter: TaskStatusFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}
