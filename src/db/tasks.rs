use super::db::Db;
use crate::libs::task::{Task, TaskError};

/// Authoritative, insertion-ordered task collection.
///
/// Loads the persisted collection once at construction. Every mutating
/// operation writes the whole collection back before returning; if the
/// write fails the in-memory change is rolled back, so memory and disk
/// never diverge.
#[derive(Debug)]
pub struct Tasks {
    db: Db,
    items: Vec<Task>,
    next_id: u64,
}

impl Tasks {
    pub fn new() -> Result<Tasks, TaskError> {
        let db = Db::new()?;
        let items = db.load()?;
        // IDs are allocated from a counter seeded past the highest stored
        // ID, never from the clock.
        let next_id = items.iter().map(|t| t.id).max().map_or(1, |id| id + 1);

        Ok(Tasks { db, items, next_id })
    }

    /// Appends a new active task and returns it.
    ///
    /// Rejects text that trims to empty before any mutation happens.
    pub fn create(&mut self, text: &str) -> Result<Task, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }

        let task = Task::new(self.next_id, text);
        self.items.push(task.clone());
        if let Err(err) = self.db.save(&self.items) {
            self.items.pop();
            return Err(err);
        }
        self.next_id += 1;

        Ok(task)
    }

    /// Flips the completion flag of the task with `id` and returns the
    /// updated record.
    pub fn toggle(&mut self, id: u64) -> Result<Task, TaskError> {
        let idx = self.position(id)?;

        self.items[idx].completed = !self.items[idx].completed;
        if let Err(err) = self.db.save(&self.items) {
            self.items[idx].completed = !self.items[idx].completed;
            return Err(err);
        }

        Ok(self.items[idx].clone())
    }

    /// Replaces the task text.
    ///
    /// `None` means the caller cancelled the edit, which is a no-op rather
    /// than an error. Submitted text that trims to empty is rejected.
    pub fn edit(&mut self, id: u64, new_text: Option<&str>) -> Result<(), TaskError> {
        let Some(new_text) = new_text else {
            return Ok(());
        };

        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(TaskError::EmptyText);
        }

        let idx = self.position(id)?;
        let previous = std::mem::replace(&mut self.items[idx].text, new_text.to_string());
        if let Err(err) = self.db.save(&self.items) {
            self.items[idx].text = previous;
            return Err(err);
        }

        Ok(())
    }

    /// Removes the task with `id`.
    ///
    /// Confirmation is the caller's concern; this method takes an already
    /// confirmed decision. Remaining tasks keep their order.
    pub fn delete(&mut self, id: u64) -> Result<(), TaskError> {
        let idx = self.position(id)?;

        let removed = self.items.remove(idx);
        if let Err(err) = self.db.save(&self.items) {
            self.items.insert(idx, removed);
            return Err(err);
        }

        Ok(())
    }

    /// Full collection snapshot in insertion order. Read-only.
    pub fn list(&self) -> &[Task] {
        &self.items
    }

    /// Looks up a task by ID without touching anything.
    pub fn get_by_id(&self, id: u64) -> Option<&Task> {
        self.items.iter().find(|t| t.id == id)
    }

    fn position(&self, id: u64) -> Result<usize, TaskError> {
        self.items.iter().position(|t| t.id == id).ok_or(TaskError::NotFound(id))
    }
}
