use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::tui::app::App;
use crate::tui::view::ViewModel;

const GAUGE_WIDTH: u16 = 24;

/// Title and task counter on the left, completion gauge on the right
pub fn render_header(frame: &mut Frame, app: &App, vm: &ViewModel, area: Rect) {
    let bg = app.theme.background;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(GAUGE_WIDTH.min(area.width / 3))])
        .split(area);

    let line = Line::from(vec![
        Span::styled(
            " Tasklane",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(vm.counter.clone(), Style::default().fg(app.theme.text).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(app.theme.gauge).bg(app.theme.selection_bg))
        .ratio(vm.progress.ratio())
        .label(format!("{:.0}%", vm.progress.percent()));
    frame.render_widget(gauge, chunks[1]);
}
