//! Frontend Models
//!
//! Task data and the list mutations behind the view model.

use serde::{Deserialize, Serialize};

/// A single to-do entry. Position in the list is its only address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// Ordered task list.
///
/// Completed tasks always move to the end when they are checked off;
/// pending and completed tasks otherwise keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    pub fn pending_count(&self) -> usize {
        self.0.iter().filter(|t| !t.done).count()
    }

    pub fn done_count(&self) -> usize {
        self.0.iter().filter(|t| t.done).count()
    }

    /// Append a pending task. Text that is blank after trimming is rejected.
    ///
    /// The text is stored as given, surrounding whitespace included.
    pub fn push_text(&mut self, text: &str) -> bool {
        if is_blank(text) {
            return false;
        }
        self.0.push(Task::new(text));
        true
    }

    /// Flip `done` at `index`; a task that becomes done is moved to the end.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(task) = self.0.get_mut(index) else {
            return false;
        };
        task.done = !task.done;
        if task.done {
            let task = self.0.remove(index);
            self.0.push(task);
        }
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }
}

/// Whitespace test matching browser `String.prototype.trim`, which also
/// strips the byte order mark.
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl IntoIterator for TaskList {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(text: &str, done: bool) -> Task {
        Task { text: text.to_string(), done }
    }

    #[test]
    fn test_push_text_appends_pending() {
        let mut list = TaskList::from(vec![task("a", false)]);
        assert!(list.push_text("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1), Some(&task("b", false)));
    }

    #[test]
    fn test_push_text_keeps_untrimmed_text() {
        let mut list = TaskList::new();
        assert!(list.push_text("  spaced  "));
        assert_eq!(list.get(0).unwrap().text, "  spaced  ");
    }

    #[test]
    fn test_push_text_rejects_blank() {
        let mut list = TaskList::new();
        assert!(!list.push_text(""));
        assert!(!list.push_text("   "));
        assert!(!list.push_text("\t\n"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_text_rejects_bom_only() {
        let mut list = TaskList::new();
        assert!(!list.push_text("\u{FEFF}"));
        assert!(!list.push_text(" \u{FEFF}\u{00A0} "));
        assert!(list.is_empty());

        assert!(list.push_text("\u{FEFF}milk"));
        assert_eq!(list.get(0).unwrap().text, "\u{FEFF}milk");
    }

    #[test]
    fn test_toggle_moves_completed_to_end() {
        let mut list = TaskList::from(vec![task("a", false), task("b", false), task("c", false)]);
        assert!(list.toggle(0));
        assert_eq!(
            list.as_slice(),
            &[task("b", false), task("c", false), task("a", true)]
        );
    }

    #[test]
    fn test_toggle_keeps_order_among_completed() {
        let mut list = TaskList::from(vec![task("a", false), task("b", false), task("c", false)]);
        list.toggle(0);
        list.toggle(0);
        // b then a were completed, so b now sits after a
        assert_eq!(
            list.as_slice(),
            &[task("c", false), task("a", true), task("b", true)]
        );
    }

    #[test]
    fn test_untoggle_stays_in_place() {
        let mut list = TaskList::from(vec![task("a", false), task("b", true), task("c", true)]);
        assert!(list.toggle(1));
        assert_eq!(
            list.as_slice(),
            &[task("a", false), task("b", false), task("c", true)]
        );
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut list = TaskList::from(vec![task("a", false)]);
        assert!(!list.toggle(1));
        assert!(!list.toggle(usize::MAX));
        assert_eq!(list.as_slice(), &[task("a", false)]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = TaskList::from(vec![task("a", false), task("b", true), task("c", false)]);
        assert_eq!(list.remove(1), Some(task("b", true)));
        assert_eq!(list.as_slice(), &[task("a", false), task("c", false)]);
        assert_eq!(list.remove(2), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_counts() {
        let list = TaskList::from(vec![task("a", false), task("b", true), task("c", true)]);
        assert_eq!(list.pending_count(), 1);
        assert_eq!(list.done_count(), 2);
    }
}
