use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task identifier: the creation timestamp in milliseconds since the epoch
pub type TaskId = i64;

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities in radio-group order
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Lowercase keyword used in storage and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Label shown next to a task in the list
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "\u{1F7E2} Low",
            Priority::Medium => "\u{1F7E1} Medium",
            Priority::High => "\u{1F534} High",
        }
    }

    /// Next priority in the radio group (wraps)
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous priority in the radio group (wraps)
    pub fn prev(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "invalid priority '{}' (expected low, medium or high)",
                other
            )),
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation timestamp (ms), unique within the list
    pub id: TaskId,
    /// Task text, never empty after trimming
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    /// Deadline in ms since the epoch
    #[serde(default)]
    pub deadline: Option<i64>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task
    pub fn new(id: TaskId, text: impl Into<String>, priority: Priority, deadline: Option<i64>) -> Self {
        Task {
            id,
            text: text.into(),
            priority,
            deadline,
            completed: false,
        }
    }
}
