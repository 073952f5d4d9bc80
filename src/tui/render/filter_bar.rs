use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filter::StatusFilter;
use crate::tui::app::App;
use crate::tui::view::ViewModel;

use super::helpers::push_right_hint;

/// Render the filter tabs with a separator line below
pub fn render_filter_bar(frame: &mut Frame, app: &App, vm: &ViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, vm, chunks[0]);

    let sep = "\u{2500}".repeat(area.width as usize);
    let sep_line = Paragraph::new(sep)
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(sep_line, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, vm: &ViewModel, area: Rect) {
    let bg = Style::default().bg(app.theme.background);
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    let mut spans: Vec<Span<'static>> = vec![Span::styled(" ", bg)];
    for (i, filter) in StatusFilter::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(sep.clone());
        }
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, filter.title()),
            tab_style(app, *filter == vm.filter),
        ));
    }

    if !vm.search.is_empty() {
        push_right_hint(
            &mut spans,
            &format!("/{} ", vm.search),
            area.width as usize,
            Style::default().fg(app.theme.highlight).bg(app.theme.background),
            bg,
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg), area);
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
