use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::tui::app::App;
use crate::tui::view::{TaskRow, ViewModel};
use crate::util::unicode;

use super::helpers::checkbox;
use super::push_highlighted_spans;

const PRIORITY_COL: usize = 10;
const DEADLINE_COL: usize = 14;

/// Render the visible rows, keeping the cursor row on screen
pub fn render_task_list(frame: &mut Frame, app: &mut App, vm: &ViewModel, area: Rect) {
    let visible_height = area.height as usize;
    let cursor = app.cursor.min(vm.rows.len().saturating_sub(1));
    app.cursor = cursor;
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if visible_height > 0 && cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor.saturating_sub(visible_height - 1);
    }

    let bg = app.theme.background;
    if vm.rows.is_empty() {
        if vm.is_filtered() {
            let msg = " no matching tasks ";
            let padding = (area.width as usize).saturating_sub(msg.len() + 1);
            let warn_style = Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.alert_bg)
                .add_modifier(Modifier::BOLD);
            let line = Line::from(vec![
                Span::styled(" ".repeat(padding), Style::default().bg(bg)),
                Span::styled(msg, warn_style),
            ]);
            frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        } else {
            let empty = Paragraph::new(" No tasks yet. Press a to add one.")
                .style(Style::default().fg(app.theme.dim).bg(bg));
            frame.render_widget(empty, area);
        }
        return;
    }

    let scroll = app.scroll_offset;
    let end = vm.rows.len().min(scroll + visible_height);
    let search_re = app.active_search_re();
    let width = area.width as usize;
    let lines: Vec<Line> = vm.rows[scroll..end]
        .iter()
        .zip(scroll..end)
        .map(|(row, idx)| render_row(app, row, idx == cursor, width, search_re.as_ref()))
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_row(
    app: &App,
    row: &TaskRow,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'static> {
    let theme = &app.theme;
    let row_bg = if is_cursor { theme.selection_bg } else { theme.background };
    let bg = Style::default().bg(row_bg);

    let mut text_style = Style::default().fg(theme.text).bg(row_bg);
    if row.completed {
        text_style = text_style
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT);
    } else if is_cursor {
        text_style = text_style.fg(theme.text_bright);
    }
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);

    let deadline_fg = if row.overdue {
        theme.red
    } else if row.urgent {
        theme.yellow
    } else {
        theme.dim
    };

    // " [ ] " + text + "  " + priority + "  " + deadline
    let fixed = 5 + 2 + PRIORITY_COL + 2 + DEADLINE_COL;
    let text_width = width.saturating_sub(fixed).max(1);
    let text = unicode::truncate_to_width(&row.text, text_width);
    let text_pad = text_width.saturating_sub(unicode::display_width(&text));

    let marker = if is_cursor { "\u{25B8}" } else { " " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.highlight).bg(row_bg)),
        Span::styled(
            format!("{} ", checkbox(row.completed)),
            Style::default().fg(if row.completed { theme.green } else { theme.text }).bg(row_bg),
        ),
    ];
    push_highlighted_spans(&mut spans, &text, text_style, match_style, search_re);
    spans.push(Span::styled(" ".repeat(text_pad + 2), bg));
    spans.push(Span::styled(
        unicode::pad_to_width(row.priority_label, PRIORITY_COL),
        Style::default().fg(theme.priority_color(row.priority)).bg(row_bg),
    ));
    spans.push(Span::styled("  ", bg));
    spans.push(Span::styled(
        unicode::pad_to_width(&row.deadline_label, DEADLINE_COL),
        Style::default().fg(deadline_fg).bg(row_bg),
    ));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn rows_show_checkbox_priority_and_deadline() {
        let mut app = app_with_texts(&["Buy milk", "Walk dog"]);
        app.workspace.store.toggle_complete(FIXED_NOW + 1);
        let vm = app.view_model();
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_task_list(frame, &mut app, &vm, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("\u{25B8}[ ] Buy milk"));
        assert!(lines[0].contains("Low"));
        assert!(lines[0].contains("No deadline"));
        assert!(lines[1].starts_with(" [x] Walk dog"));
    }

    #[test]
    fn empty_list_message() {
        let mut app = app_with_texts(&[]);
        let vm = app.view_model();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, &vm, area);
        });
        assert_eq!(output, " No tasks yet. Press a to add one.");
    }

    #[test]
    fn no_matches_message() {
        let mut app = app_with_texts(&["Buy milk"]);
        app.set_search("zebra");
        let vm = app.view_model();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, &vm, area);
        });
        assert!(output.ends_with(" no matching tasks"));
    }

    #[test]
    fn scroll_follows_cursor() {
        let texts: Vec<String> = (0..10).map(|i| format!("task {}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut app = app_with_texts(&refs);
        app.cursor = 7;
        let vm = app.view_model();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, &vm, area);
        });
        assert_eq!(app.scroll_offset, 5);
        assert!(output.lines().last().unwrap().contains("task 7"));
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "a very long task description that keeps going well past the edge";
        let mut app = app_with_texts(&[long]);
        let vm = app.view_model();
        let output = render_to_string(40, 2, |frame, area| {
            render_task_list(frame, &mut app, &vm, area);
        });
        assert!(output.contains('\u{2026}'));
        assert!(output.contains("No deadline"));
    }
}
