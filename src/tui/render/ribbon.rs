use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::ops::ribbon::{Ribbon, ribbon_window};
use crate::tui::app::App;

/// Scrolling urgency ribbon; alert colors when an urgent task is high priority
pub fn render_ribbon(frame: &mut Frame, app: &App, ribbon: &Ribbon, area: Rect) {
    let (fg, bg) = app.theme.ribbon_colors(ribbon.high_alert);
    let mut style = Style::default().fg(fg).bg(bg);
    if ribbon.high_alert {
        style = style.add_modifier(Modifier::BOLD);
    }
    let text = ribbon_window(
        &ribbon.text,
        &app.workspace.config.ribbon.separator,
        app.ribbon_offset,
        area.width as usize,
    );
    frame.render_widget(Paragraph::new(text).style(style), area);
}
