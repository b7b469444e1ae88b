//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one place, so wording stays
//! consistent and the rest of the code deals only in typed variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' created successfully", text),
            Message::TaskCompleted(id) => format!("Task {} marked as completed.", id),
            Message::TaskReopened(id) => format!("Task {} marked as active.", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully.", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully.", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskTextEmpty => "Task text cannot be empty.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::ConfirmDeleteTask(text) => format!("Are you sure you want to delete '{}'?", text),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::EditingTask(text) => format!("Editing task: {}", text),
            Message::PromptTaskText => "Task text".to_string(),

            // === SEARCH MESSAGES ===
            Message::SearchResultsHeader(term) => format!("Tasks matching '{}':", term),
            Message::SearchNoMatches(term) => format!("No tasks match '{}'.", term),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed.".to_string(),
            Message::ConfigNotFound => "No configuration file to remove.".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptStorageDir => "Directory for the task store".to_string(),
            Message::PromptDoneMark => "Mark shown for completed tasks".to_string(),
            Message::PromptPendingMark => "Mark shown for active tasks".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting tasks as {}...", format),
            Message::ExportCompleted(path) => format!("Tasks exported successfully to: {}", path),
            Message::NoTasksToExport => "No tasks to export.".to_string(),
        };
        write!(f, "{}", text)
    }
}
