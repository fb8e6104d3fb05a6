//! Todo View Model
//!
//! Owns the task list and the storage port. Every call that changes the
//! list writes the whole list back; rejected calls leave storage untouched.

use crate::models::TaskList;
use crate::storage::TaskStorage;

pub struct TodoViewModel<S: TaskStorage> {
    tasks: TaskList,
    storage: S,
}

impl<S: TaskStorage> TodoViewModel<S> {
    /// Build from whatever the storage holds (empty when absent or invalid)
    pub fn load(storage: S) -> Self {
        let tasks = storage.load();
        Self { tasks, storage }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn add_task(&mut self, text: &str) -> bool {
        if !self.tasks.push_text(text) {
            log::debug!(target: "TODO", "Rejected blank task");
            return false;
        }
        log::info!(target: "TODO", "Added task #{}", self.tasks.len() - 1);
        self.persist();
        true
    }

    pub fn toggle_done(&mut self, index: usize) -> bool {
        if !self.tasks.toggle(index) {
            log::debug!(target: "TODO", "Toggle ignored: index {} out of {}", index, self.tasks.len());
            return false;
        }
        log::info!(target: "TODO", "Toggled task #{}", index);
        self.persist();
        true
    }

    pub fn remove_task(&mut self, index: usize) -> bool {
        if self.tasks.remove(index).is_none() {
            log::debug!(target: "TODO", "Remove ignored: index {} out of {}", index, self.tasks.len());
            return false;
        }
        log::info!(target: "TODO", "Removed task #{}", index);
        self.persist();
        true
    }

    fn persist(&self) {
        self.storage.save(&self.tasks);
    }
}
