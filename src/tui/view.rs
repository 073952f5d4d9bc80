//! Declarative description of the screen, derived from the store on every draw.
//!
//! Renderers read a [`ViewModel`] and never touch the task list directly.

use crate::model::filter::StatusFilter;
use crate::model::task::{Priority, TaskId};
use crate::ops::query::visible_tasks;
use crate::ops::ribbon::Ribbon;
use crate::ops::stats::Progress;
use crate::ops::task_ops::TaskStore;
use crate::ops::urgency::{deadline_label, is_overdue, is_urgent};

/// The list projection the user has selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: StatusFilter,
    /// Live search text (case-insensitive substring)
    pub search: String,
}

/// One visible task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub priority_label: &'static str,
    pub deadline_label: String,
    pub overdue: bool,
    pub urgent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub rows: Vec<TaskRow>,
    pub progress: Progress,
    /// `"<done> / <total> tasks"`
    pub counter: String,
    pub filter: StatusFilter,
    pub search: String,
    pub ribbon: Option<Ribbon>,
}

impl ViewModel {
    pub fn build(
        store: &TaskStore,
        state: &ViewState,
        ribbon: Option<&Ribbon>,
        now_ms: i64,
        window_ms: i64,
    ) -> Self {
        let rows = visible_tasks(store.tasks(), state.filter, &state.search)
            .into_iter()
            .map(|task| TaskRow {
                id: task.id,
                text: task.text.clone(),
                completed: task.completed,
                priority: task.priority,
                priority_label: task.priority.label(),
                deadline_label: deadline_label(task, now_ms),
                overdue: !task.completed && is_overdue(task, now_ms),
                urgent: is_urgent(task, now_ms, window_ms),
            })
            .collect();
        let progress = Progress::of(store.tasks());
        ViewModel {
            rows,
            progress,
            counter: progress.label(),
            filter: state.filter,
            search: state.search.clone(),
            ribbon: ribbon.cloned(),
        }
    }

    /// Whether a status filter or search is narrowing the list
    pub fn is_filtered(&self) -> bool {
        self.filter != StatusFilter::All || !self.search.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_760_000_000_000;
    const MIN: i64 = 60_000;

    #[test]
    fn buy_milk_scenario() {
        let mut store = TaskStore::new();
        let id = store.add("Buy milk", Priority::Low, None, NOW).unwrap();
        let state = ViewState::default();

        let vm = ViewModel::build(&store, &state, None, NOW, 120 * MIN);
        assert_eq!(vm.counter, "0 / 1 tasks");
        assert_eq!(vm.progress.percent(), 0.0);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].deadline_label, "No deadline");
        assert_eq!(vm.rows[0].priority_label, "\u{1F7E2} Low");

        store.toggle_complete(id);
        let vm = ViewModel::build(&store, &state, None, NOW, 120 * MIN);
        assert_eq!(vm.counter, "1 / 1 tasks");
        assert_eq!(vm.progress.percent(), 100.0);
        assert!(vm.rows[0].completed);
    }

    #[test]
    fn rows_follow_filter_and_search() {
        let mut store = TaskStore::new();
        store.add("Buy milk", Priority::Low, None, NOW).unwrap();
        let done = store.add("Buy bread", Priority::High, Some(NOW - MIN), NOW).unwrap();
        store.add("Walk dog", Priority::Medium, Some(NOW + 30 * MIN), NOW).unwrap();
        store.toggle_complete(done);

        let state = ViewState {
            filter: StatusFilter::Active,
            search: "buy".into(),
        };
        let vm = ViewModel::build(&store, &state, None, NOW, 120 * MIN);
        let texts: Vec<&str> = vm.rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk"]);
        assert!(vm.is_filtered());
        // counter always covers the whole list
        assert_eq!(vm.counter, "1 / 3 tasks");
    }

    #[test]
    fn row_flags() {
        let mut store = TaskStore::new();
        store.add("late", Priority::High, Some(NOW - MIN), NOW).unwrap();
        store.add("soon", Priority::Low, Some(NOW + 30 * MIN), NOW).unwrap();
        let vm = ViewModel::build(&store, &ViewState::default(), None, NOW, 120 * MIN);
        assert!(vm.rows[0].overdue);
        assert!(!vm.rows[0].urgent);
        assert_eq!(vm.rows[0].deadline_label, "\u{26A0} Overdue");
        assert!(!vm.rows[1].overdue);
        assert!(vm.rows[1].urgent);
        assert_eq!(vm.rows[1].deadline_label, "Due in 30m");
        assert!(!vm.is_filtered());
    }
}
