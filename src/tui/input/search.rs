use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common::edit_text;

/// Live search: every edit re-filters the list
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        // Cancel search and clear the filter
        KeyCode::Esc => {
            app.search_input.clear();
            app.set_search("");
            app.mode = Mode::Navigate;
        }
        // Keep the query
        KeyCode::Enter => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        _ => {
            if edit_text(&mut app.search_input, key) {
                let query = app.search_input.as_str().to_string();
                app.set_search(&query);
            }
        }
    }
}
