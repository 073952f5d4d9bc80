mod add;
mod common;
mod edit;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use add::handle_add;
use edit::handle_edit;
use navigate::handle_navigate;
use search::handle_search;

pub use common::TextInput;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

/// Handle a bracketed paste event: insert into whichever text field has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    match app.mode {
        Mode::Navigate => {}
        Mode::Search => {
            app.search_input.insert_str(text);
            let query = app.search_input.as_str().to_string();
            app.set_search(&query);
        }
        Mode::Add => {
            if let Some(input) = app.add_form.as_mut().and_then(add::focused_input) {
                input.insert_str(text);
            }
        }
        Mode::Edit => {
            if let Some(prompt) = &mut app.edit_prompt {
                prompt.input.insert_str(text);
            }
        }
    }
}
