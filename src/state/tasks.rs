//! Task store.
//!
//! Holds the task list, the record shown on the detail screen and the state
//! of the last task request. Successful responses are applied locally so the
//! list reflects the server without a refetch.

use super::StateError;
use crate::api::Task;

pub const FETCH_TASKS_FAILED: &str = "Error fetching tasks";
pub const FETCH_TASK_FAILED: &str = "Error fetching task";
pub const CREATE_TASK_FAILED: &str = "Error creating task";
pub const UPDATE_TASK_FAILED: &str = "Error updating task";
pub const DELETE_TASK_FAILED: &str = "Error deleting task";

/// Houses task data and request state.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    detail: Option<Task>,
    loading: bool,
    error: Option<String>,
}

impl TaskStore {
    /// Returns the task list.
    ///
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given ID from the list.
    ///
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns the record loaded for the detail screen.
    ///
    pub fn detail(&self) -> Option<&Task> {
        self.detail.as_ref()
    }

    /// Returns true while a task request is in flight.
    ///
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message of the last failed request.
    ///
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark a request as started.
    ///
    pub fn begin(&mut self) -> &mut Self {
        self.loading = true;
        self.error = None;
        self
    }

    /// Record a failed request.
    ///
    pub fn fail(&mut self, message: String) -> &mut Self {
        self.loading = false;
        self.error = Some(message);
        self
    }

    /// Replace the list with the fetched tasks.
    ///
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> &mut Self {
        self.tasks = tasks;
        self.loading = false;
        self
    }

    /// Store the record fetched for the detail screen.
    ///
    pub fn set_detail(&mut self, task: Task) -> &mut Self {
        self.detail = Some(task);
        self.loading = false;
        self
    }

    /// Forget the detail record.
    ///
    pub fn clear_detail(&mut self) -> &mut Self {
        self.detail = None;
        self
    }

    /// Append a created task.
    ///
    pub fn insert(&mut self, task: Task) -> &mut Self {
        self.tasks.push(task);
        self.loading = false;
        self
    }

    /// Replace the task with the same ID by the updated record. The detail
    /// record is replaced as well when it shows the same task.
    ///
    pub fn replace(&mut self, task: Task) -> Result<(), StateError> {
        self.loading = false;
        if self.detail.as_ref().map(|d| d.id == task.id).unwrap_or(false) {
            self.detail = Some(task.clone());
        }
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task;
                Ok(())
            }
            None => Err(StateError::TaskNotFound { id: task.id }),
        }
    }

    /// Remove the task with the given ID.
    ///
    pub fn remove(&mut self, id: &str) -> &mut Self {
        self.tasks.retain(|task| task.id != id);
        if self.detail.as_ref().map(|d| d.id == id).unwrap_or(false) {
            self.detail = None;
        }
        self.loading = false;
        self
    }

    /// Drop all data.
    ///
    pub fn clear(&mut self) -> &mut Self {
        *self = TaskStore::default();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            ..Faker.fake()
        }
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut store = TaskStore::default();
        store.fail(FETCH_TASKS_FAILED.to_string());
        store.begin();
        assert!(store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn set_tasks_replaces_list() {
        let mut store = TaskStore::default();
        store.insert(task("old", "Old"));
        store.begin().set_tasks(vec![task("a", "A"), task("b", "B")]);
        assert!(!store.is_loading());
        assert_eq!(store.tasks().len(), 2);
        assert!(store.get("old").is_none());
    }

    #[test]
    fn insert_appends() {
        let mut store = TaskStore::default();
        store.set_tasks(vec![task("a", "A")]);
        store.insert(task("b", "B"));
        assert_eq!(store.tasks()[1].id, "b");
    }

    #[test]
    fn replace_matches_by_id() {
        let mut store = TaskStore::default();
        store.set_tasks(vec![task("a", "A"), task("b", "B")]);
        store.set_detail(task("b", "B"));
        store.replace(task("b", "Renamed")).unwrap();
        assert_eq!(store.get("b").unwrap().title, "Renamed");
        assert_eq!(store.get("a").unwrap().title, "A");
        assert_eq!(store.detail().unwrap().title, "Renamed");
    }

    #[test]
    fn replace_unknown_task_is_reported() {
        let mut store = TaskStore::default();
        store.set_tasks(vec![task("a", "A")]);
        let result = store.replace(task("zzz", "Ghost"));
        assert!(matches!(result, Err(StateError::TaskNotFound { id }) if id == "zzz"));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn remove_drops_list_entry_and_detail() {
        let mut store = TaskStore::default();
        store.set_tasks(vec![task("a", "A"), task("b", "B")]);
        store.set_detail(task("a", "A"));
        store.remove("a");
        assert_eq!(store.tasks().len(), 1);
        assert!(store.detail().is_none());
    }

    #[test]
    fn fail_stores_message() {
        let mut store = TaskStore::default();
        store.begin().fail(DELETE_TASK_FAILED.to_string());
        assert!(!store.is_loading());
        assert_eq!(store.error(), Some(DELETE_TASK_FAILED));
    }

    #[test]
    fn clear_resets() {
        let mut store = TaskStore::default();
        store.set_tasks(vec![task("a", "A")]);
        store.clear();
        assert_eq!(store, TaskStore::default());
    }
}
