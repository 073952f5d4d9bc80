use serde::Serialize;

use crate::model::task::Task;

/// Completion counts for the counter and progress bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        Progress {
            done: tasks.iter().filter(|t| t.completed).count(),
            total: tasks.len(),
        }
    }

    /// Counter text, e.g. `"1 / 3 tasks"`
    pub fn label(&self) -> String {
        format!("{} / {} tasks", self.done, self.total)
    }

    /// Percent complete; 0 for an empty list
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64 * 100.0
        }
    }

    /// Completion ratio in `0.0..=1.0`, for gauges
    pub fn ratio(&self) -> f64 {
        self.percent() / 100.0
    }
}
