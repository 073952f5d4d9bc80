use crate::model::task::{Priority, Task};

const MINUTE_MS: i64 = 60_000;

/// Whether a task belongs in the ribbon.
///
/// Incomplete tasks with a future deadline qualify when they are high
/// priority or due within `window_ms`. Overdue tasks never qualify, even at
/// high priority.
pub fn is_urgent(task: &Task, now_ms: i64, window_ms: i64) -> bool {
    if task.completed {
        return false;
    }
    let Some(deadline) = task.deadline else {
        return false;
    };
    let diff = deadline.saturating_sub(now_ms);
    if diff <= 0 {
        return false;
    }
    task.priority == Priority::High || diff <= window_ms
}

/// Urgent tasks, in list order
pub fn urgent_tasks(tasks: &[Task], now_ms: i64, window_ms: i64) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| is_urgent(t, now_ms, window_ms))
        .collect()
}

/// Format a duration as `"<h>h <m>m"` or `"<m>m"`, truncated to whole minutes
pub fn time_left(ms: i64) -> String {
    let total_minutes = ms.max(0) / MINUTE_MS;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Deadline column text for the task list
pub fn deadline_label(task: &Task, now_ms: i64) -> String {
    match task.deadline {
        Some(deadline) if deadline > now_ms => format!("Due in {}", time_left(deadline.saturating_sub(now_ms))),
        Some(_) => "\u{26A0} Overdue".to_string(),
        None => "No deadline".to_string(),
    }
}

/// Whether the task's deadline has passed
pub fn is_overdue(task: &Task, now_ms: i64) -> bool {
    task.deadline.is_some_and(|d| d <= now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_760_000_000_000;
    const WINDOW: i64 = 2 * 60 * MINUTE_MS;

    fn task(priority: Priority, deadline: Option<i64>) -> Task {
        Task::new(1, "t", priority, deadline)
    }

    #[test]
    fn time_left_formats() {
        assert_eq!(time_left(90 * MINUTE_MS), "1h 30m");
        assert_eq!(time_left(45 * MINUTE_MS), "45m");
        assert_eq!(time_left(60 * MINUTE_MS), "1h 0m");
        assert_eq!(time_left(0), "0m");
        assert_eq!(time_left(-5 * MINUTE_MS), "0m");
    }

    #[test]
    fn time_left_truncates_to_minutes() {
        assert_eq!(time_left(59_999), "0m");
        assert_eq!(time_left(45 * MINUTE_MS + 59_999), "45m");
        assert_eq!(time_left(25 * 60 * MINUTE_MS + 7 * MINUTE_MS + 30_000), "25h 7m");
    }

    #[test]
    fn high_priority_future_deadline_is_urgent() {
        let t = task(Priority::High, Some(NOW + 10 * MINUTE_MS));
        assert!(is_urgent(&t, NOW, WINDOW));
        let far = task(Priority::High, Some(NOW + 48 * 60 * MINUTE_MS));
        assert!(is_urgent(&far, NOW, WINDOW));
    }

    #[test]
    fn overdue_is_never_urgent() {
        let t = task(Priority::High, Some(NOW - 10 * MINUTE_MS));
        assert!(!is_urgent(&t, NOW, WINDOW));
        let exactly_now = task(Priority::Low, Some(NOW));
        assert!(!is_urgent(&exactly_now, NOW, WINDOW));
    }

    #[test]
    fn window_applies_to_any_priority() {
        let inside = task(Priority::Low, Some(NOW + WINDOW));
        assert!(is_urgent(&inside, NOW, WINDOW));
        let outside = task(Priority::Medium, Some(NOW + WINDOW + 1));
        assert!(!is_urgent(&outside, NOW, WINDOW));
    }

    #[test]
    fn completed_or_undated_tasks_are_not_urgent() {
        let mut done = task(Priority::High, Some(NOW + MINUTE_MS));
        done.completed = true;
        assert!(!is_urgent(&done, NOW, WINDOW));
        assert!(!is_urgent(&task(Priority::High, None), NOW, WINDOW));
    }

    #[test]
    fn urgent_tasks_preserve_order() {
        let tasks = vec![
            Task::new(1, "a", Priority::Low, Some(NOW + 5 * MINUTE_MS)),
            Task::new(2, "b", Priority::Low, None),
            Task::new(3, "c", Priority::High, Some(NOW + 500 * MINUTE_MS)),
        ];
        let ids: Vec<i64> = urgent_tasks(&tasks, NOW, WINDOW).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn deadline_labels() {
        assert_eq!(
            deadline_label(&task(Priority::Low, Some(NOW + 90 * MINUTE_MS)), NOW),
            "Due in 1h 30m"
        );
        assert_eq!(
            deadline_label(&task(Priority::Low, Some(NOW - 1)), NOW),
            "\u{26A0} Overdue"
        );
        assert_eq!(deadline_label(&task(Priority::Low, None), NOW), "No deadline");
    }

    #[test]
    fn extreme_deadlines_do_not_overflow() {
        let ancient = task(Priority::High, Some(i64::MIN));
        assert!(!is_urgent(&ancient, NOW, WINDOW));
        assert_eq!(deadline_label(&ancient, NOW), "\u{26A0} Overdue");

        let distant = task(Priority::High, Some(i64::MAX));
        assert!(is_urgent(&distant, -NOW, WINDOW));
        assert!(deadline_label(&distant, -NOW).starts_with("Due in "));
    }
}
