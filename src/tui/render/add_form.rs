use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::task::Priority;
use crate::tui::app::{AddField, AddForm, App};

use super::helpers::{centered_box, input_spans};

const FORM_WIDTH: u16 = 64;
const FORM_HEIGHT: u16 = 8;
const LABEL_WIDTH: usize = 11;

/// Render the add form popup
pub fn render_add_form(frame: &mut Frame, app: &App, form: &AddForm, area: Rect) {
    let popup = centered_box(FORM_WIDTH, FORM_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let theme = &app.theme;
    let bg = theme.background;
    let text = Style::default().fg(theme.text).bg(bg);
    let bright = Style::default().fg(theme.text_bright).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let cursor = Style::default().fg(theme.highlight).bg(bg);

    let label = |name: &str, field: AddField| {
        let focused = form.field == field;
        let marker = if focused { "\u{25B8}" } else { " " };
        let style = if focused {
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            text
        };
        Span::styled(format!("{}{:<width$}", marker, name, width = LABEL_WIDTH - 1), style)
    };

    let mut task_line = vec![label("Task", AddField::Text)];
    task_line.extend(input_spans(&form.text, bright, cursor, form.field == AddField::Text));

    let mut priority_line = vec![label("Priority", AddField::Priority)];
    for (i, p) in Priority::ALL.iter().enumerate() {
        if i > 0 {
            priority_line.push(Span::styled("  ", text));
        }
        let selected = *p == form.priority;
        let radio = if selected { "(\u{2022})" } else { "( )" };
        let mut style = Style::default().fg(theme.priority_color(*p)).bg(bg);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        priority_line.push(Span::styled(format!("{} {}", radio, p.label()), style));
    }

    let mut deadline_line = vec![label("Deadline", AddField::Deadline)];
    let deadline_focused = form.field == AddField::Deadline;
    if form.deadline.as_str().is_empty() && !deadline_focused {
        deadline_line.push(Span::styled("YYYY-MM-DD HH:MM (optional)", dim));
    } else {
        deadline_line.extend(input_spans(&form.deadline, bright, cursor, deadline_focused));
    }

    let lines = vec![
        Line::from(task_line),
        Line::from(priority_line),
        Line::from(deadline_line),
        Line::from(""),
        Line::from(Span::styled(
            " Tab next field  \u{2190}/\u{2192} priority  Enter add  Esc cancel",
            dim,
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Add task ", bright.add_modifier(Modifier::BOLD)))
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
