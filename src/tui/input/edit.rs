use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common::edit_text;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.edit_prompt = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
            if let Some(prompt) = app.edit_prompt.take() {
                app.apply_edit(prompt.task_id, prompt.input.as_str());
            }
        }
        _ => {
            if let Some(prompt) = &mut app.edit_prompt {
                edit_text(&mut prompt.input, key);
            }
        }
    }
}
