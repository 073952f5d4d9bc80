use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::task::{Priority, Task, TaskId};

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("Please enter a task first.")]
    EmptyText,
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("no free task id")]
    NoFreeId,
}

/// Result of an edit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text was replaced
    Updated,
    /// New text was empty after trimming; the old text is kept
    Ignored,
    NotFound,
}

/// The task list. Owns every task; order is insertion order.
///
/// Serializes as a bare JSON array, which is the on-disk format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously persisted tasks
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a new incomplete task. The id is `now_ms`, bumped past the
    /// current maximum when needed so ids stay unique. If the maximum is
    /// already `i64::MAX` the first unused id at or after `now_ms` is taken.
    pub fn add(
        &mut self,
        text: &str,
        priority: Priority,
        deadline: Option<i64>,
        now_ms: i64,
    ) -> Result<TaskId, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        let id = match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= now_ms => match max.checked_add(1) {
                Some(next) => next,
                None => self.first_free_id(now_ms).ok_or(TaskError::NoFreeId)?,
            },
            _ => now_ms,
        };
        self.tasks.push(Task::new(id, text, priority, deadline));
        Ok(id)
    }

    fn first_free_id(&self, from: TaskId) -> Option<TaskId> {
        let taken: HashSet<TaskId> = self.tasks.iter().map(|t| t.id).collect();
        (from..=TaskId::MAX).find(|id| !taken.contains(id))
    }

    /// Flip the completed flag. Returns false if no task has this id.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Replace a task's text with the trimmed `new_text` when it is non-empty
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> EditOutcome {
        let Some(task) = self.get_mut(id) else {
            return EditOutcome::NotFound;
        };
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return EditOutcome::Ignored;
        }
        task.text = new_text.to_string();
        EditOutcome::Updated
    }

    /// Remove the task with this id. Returns false if none matched.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }
}
