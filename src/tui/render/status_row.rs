use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, NoticeLevel};

use super::helpers::{input_spans, push_right_hint};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let width = area.width as usize;
    let show_hints = app.workspace.config.ui.show_key_hints;
    let cursor_style = Style::default().fg(app.theme.highlight).bg(bg);
    let input_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans: Vec<Span<'static>> = Vec::new();
    let hint = match app.mode {
        Mode::Search => {
            spans.push(Span::styled("/", input_style));
            spans.extend(input_spans(&app.search_input, input_style, cursor_style, true));
            "Enter keep  Esc clear"
        }
        Mode::Edit => {
            spans.push(Span::styled("edit: ", dim));
            if let Some(prompt) = &app.edit_prompt {
                spans.extend(input_spans(&prompt.input, input_style, cursor_style, true));
            }
            "Enter save  Esc cancel"
        }
        Mode::Navigate | Mode::Add => {
            if let Some(notice) = &app.notice {
                let fg = match notice.level {
                    NoticeLevel::Info => app.theme.highlight,
                    NoticeLevel::Error => app.theme.red,
                };
                spans.push(Span::styled(format!(" {}", notice.text), Style::default().fg(fg).bg(bg)));
            } else if app.mode == Mode::Navigate && !app.view_state.search.is_empty() {
                // Kept search, shown dimmed
                spans.push(Span::styled(format!("/{}", app.view_state.search), dim));
            }
            if app.mode == Mode::Add {
                "Enter add  Esc cancel"
            } else {
                "a add  / search  space done  e edit  d delete  ? help"
            }
        }
    };

    if show_hints {
        push_right_hint(&mut spans, hint, width, dim, bg_style);
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}
