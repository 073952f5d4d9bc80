use serde::Serialize;

use crate::model::task::{Priority, Task, TaskId};
use crate::ops::stats::Progress;
use crate::ops::urgency::deadline_label;
use crate::util::time::format_deadline;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
    pub deadline: Option<i64>,
    pub completed: bool,
    /// Human-readable deadline status, e.g. "Due in 1h 30m"
    pub due: String,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub done: usize,
    pub total: usize,
    pub percent: f64,
    pub label: String,
}

#[derive(Serialize)]
pub struct UrgentJson {
    pub tasks: Vec<TaskJson>,
    pub high_alert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ribbon: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task, now_ms: i64) -> TaskJson {
    TaskJson {
        id: task.id,
        text: task.text.clone(),
        priority: task.priority,
        deadline: task.deadline,
        completed: task.completed,
        due: deadline_label(task, now_ms),
    }
}

pub fn stats_to_json(progress: &Progress) -> StatsJson {
    StatsJson {
        done: progress.done,
        total: progress.total,
        percent: progress.percent(),
        label: progress.label(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One-line summary: `[x] <id>  <text>  (high, due 2030-01-31 18:00)`
pub fn format_task_line(task: &Task) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    let mut line = format!("[{}] {}  {}", check, task.id, task.text);
    match task.deadline {
        Some(ms) => line.push_str(&format!("  ({}, due {})", task.priority, format_deadline(ms))),
        None => line.push_str(&format!("  ({})", task.priority)),
    }
    line
}
