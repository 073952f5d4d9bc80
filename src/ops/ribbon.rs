use unicode_segmentation::UnicodeSegmentation;

use crate::model::config::RibbonConfig;
use crate::model::task::{Priority, Task, TaskId};
use crate::ops::urgency::{time_left, urgent_tasks};
use crate::util::unicode;

/// The urgency banner. Absent (hidden) when nothing is urgent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ribbon {
    /// One pass over the urgent tasks
    pub line: String,
    /// `line` repeated for scrolling
    pub text: String,
    /// At least one urgent task is high priority
    pub high_alert: bool,
    /// The urgent tasks, in list order
    pub ids: Vec<TaskId>,
}

impl Ribbon {
    pub fn count(&self) -> usize {
        self.ids.len()
    }
}

/// Ribbon entry for one task: fire icon, text, then the time left
pub fn ribbon_entry(task: &Task, now_ms: i64) -> String {
    let left = match task.deadline {
        Some(deadline) if deadline > now_ms => time_left(deadline.saturating_sub(now_ms)),
        _ => "Overdue!".to_string(),
    };
    format!("\u{1F525} {} \u{2014} {}", task.text, left)
}

/// One pass over the urgent tasks, entries joined by `separator`
pub fn ribbon_line(urgent: &[&Task], now_ms: i64, separator: &str) -> String {
    urgent
        .iter()
        .map(|t| ribbon_entry(t, now_ms))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Build the ribbon from the current task list
pub fn build_ribbon(tasks: &[Task], now_ms: i64, config: &RibbonConfig, window_ms: i64) -> Option<Ribbon> {
    let urgent = urgent_tasks(tasks, now_ms, window_ms);
    if urgent.is_empty() {
        return None;
    }
    let high_alert = urgent.iter().any(|t| t.priority == Priority::High);
    let line = ribbon_line(&urgent, now_ms, &config.separator);
    let text = vec![line.as_str(); config.repeat.max(1)].join(&config.separator);
    Some(Ribbon {
        line,
        text,
        high_alert,
        ids: urgent.iter().map(|t| t.id).collect(),
    })
}

/// The `width`-cell slice of the ribbon starting `offset` graphemes in.
/// Text wider than `width` scrolls as a loop with `seam` between its end and
/// its start; text that fits is shown whole and does not move.
pub fn ribbon_window(text: &str, seam: &str, offset: usize, width: usize) -> String {
    if text.is_empty() || width == 0 {
        return String::new();
    }
    if unicode::display_width(text) <= width {
        return text.to_string();
    }
    let graphemes: Vec<&str> = text.graphemes(true).chain(seam.graphemes(true)).collect();
    let start = offset % graphemes.len();
    let mut out = String::new();
    let mut used = 0;
    for g in graphemes.iter().cycle().skip(start) {
        let gw = unicode::display_width(g);
        if used + gw > width {
            break;
        }
        used += gw;
        out.push_str(g);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOW: i64 = 1_760_000_000_000;
    const MIN: i64 = 60_000;
    const WINDOW: i64 = 120 * MIN;

    fn config(repeat: usize) -> RibbonConfig {
        RibbonConfig {
            repeat,
            ..RibbonConfig::default()
        }
    }

    #[test]
    fn hidden_without_urgent_tasks() {
        let tasks = vec![
            Task::new(1, "later", Priority::Low, Some(NOW + 600 * MIN)),
            Task::new(2, "late", Priority::High, Some(NOW - MIN)),
        ];
        assert_eq!(build_ribbon(&tasks, NOW, &config(10), WINDOW), None);
        assert_eq!(build_ribbon(&[], NOW, &config(10), WINDOW), None);
    }

    #[test]
    fn single_entry_repeated() {
        let tasks = vec![Task::new(1, "Pay rent", Priority::Medium, Some(NOW + 20 * MIN))];
        let ribbon = build_ribbon(&tasks, NOW, &config(3), WINDOW).unwrap();
        let entry = "\u{1F525} Pay rent \u{2014} 20m";
        assert_eq!(ribbon.line, entry);
        assert_eq!(ribbon.text, format!("{e} \u{2022} {e} \u{2022} {e}", e = entry));
        assert!(!ribbon.high_alert);
        assert_eq!(ribbon.count(), 1);
    }

    #[test]
    fn default_repeat_is_ten() {
        let tasks = vec![Task::new(1, "x", Priority::Low, Some(NOW + MIN))];
        let ribbon = build_ribbon(&tasks, NOW, &RibbonConfig::default(), WINDOW).unwrap();
        assert_eq!(ribbon.text.matches("\u{1F525}").count(), 10);
        assert_eq!(ribbon.text.matches(" \u{2022} ").count(), 9);
    }

    #[test]
    fn entries_joined_in_order_with_high_alert() {
        let tasks = vec![
            Task::new(1, "A", Priority::Low, Some(NOW + 20 * MIN)),
            Task::new(2, "B", Priority::High, Some(NOW + 70 * 60 * MIN)),
        ];
        let ribbon = build_ribbon(&tasks, NOW, &config(1), WINDOW).unwrap();
        assert_eq!(
            ribbon.text,
            "\u{1F525} A \u{2014} 20m \u{2022} \u{1F525} B \u{2014} 70h 0m"
        );
        assert!(ribbon.high_alert);
        assert_eq!(ribbon.ids, vec![1, 2]);
    }

    #[test]
    fn entry_for_passed_deadline_says_overdue() {
        let task = Task::new(1, "Old", Priority::High, Some(NOW - MIN));
        assert_eq!(ribbon_entry(&task, NOW), "\u{1F525} Old \u{2014} Overdue!");
    }

    #[test]
    fn window_scrolls_and_wraps() {
        assert_eq!(ribbon_window("abcdef", "", 0, 3), "abc");
        assert_eq!(ribbon_window("abcdef", "", 4, 4), "efab");
        assert_eq!(ribbon_window("abcdef", "", 10, 2), "ef");
        assert_eq!(ribbon_window("", "", 3, 5), "");
        assert_eq!(ribbon_window("abc", "", 0, 0), "");
    }

    #[test]
    fn seam_separates_end_from_start() {
        assert_eq!(ribbon_window("abcdef", " \u{2022} ", 4, 6), "ef \u{2022} a");
        assert_eq!(ribbon_window("abcdef", "-", 6, 3), "-ab");
    }

    #[test]
    fn window_respects_wide_graphemes() {
        // the fire emoji is two cells wide
        assert_eq!(ribbon_window("\u{1F525}ab", "", 0, 2), "\u{1F525}");
        assert_eq!(ribbon_window("\u{1F525}ab", "", 0, 3), "\u{1F525}a");
    }

    #[test]
    fn short_text_stays_put() {
        assert_eq!(ribbon_window("abc", "-", 0, 10), "abc");
        assert_eq!(ribbon_window("abc", "-", 2, 10), "abc");
    }

    #[test]
    fn extreme_deadlines_build_without_overflow() {
        let tasks = vec![
            Task::new(1, "ancient", Priority::High, Some(i64::MIN)),
            Task::new(2, "distant", Priority::High, Some(i64::MAX)),
        ];
        let ribbon = build_ribbon(&tasks, NOW, &config(1), WINDOW).unwrap();
        assert_eq!(ribbon.ids, vec![2]);
        assert!(ribbon.text.contains("distant"));
        assert!(ribbon_entry(&tasks[0], NOW).ends_with("Overdue!"));
    }
}
