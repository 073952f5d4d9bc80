use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::input::TextInput;
use crate::util::unicode;

/// Markdown-style checkbox for a completion flag
pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Spans for a text input, with a block cursor drawn at the cursor position
pub(super) fn input_spans(
    input: &TextInput,
    style: Style,
    cursor_style: Style,
    show_cursor: bool,
) -> Vec<Span<'static>> {
    let (before, after) = input.buffer.split_at(input.cursor.min(input.buffer.len()));
    let mut spans = vec![Span::styled(before.to_string(), style)];
    if show_cursor {
        spans.push(Span::styled("\u{258C}", cursor_style)); // ▌ cursor
    }
    if !after.is_empty() {
        spans.push(Span::styled(after.to_string(), style));
    }
    spans
}

/// Right-align `hint` after `spans` when there is room for it
pub(super) fn push_right_hint(spans: &mut Vec<Span<'static>>, hint: &str, width: usize, style: Style, bg: Style) {
    let content_width = spans_width(spans);
    let hint_width = unicode::display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), bg));
        spans.push(Span::styled(hint.to_string(), style));
    }
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A fixed-size box centered in `area`, shrunk to fit
pub(super) fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
