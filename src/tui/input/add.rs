use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{AddField, AddForm, App, Mode};

use super::common::{TextInput, edit_text};

/// The text input with focus, if the focused field is a text field
pub(super) fn focused_input(form: &mut AddForm) -> Option<&mut TextInput> {
    match form.field {
        AddField::Text => Some(&mut form.text),
        AddField::Deadline => Some(&mut form.deadline),
        AddField::Priority => None,
    }
}

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    let Some(form) = &mut app.add_form else {
        app.mode = Mode::Navigate;
        return;
    };
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.add_form = None;
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => submit(app),

        // Field focus
        (_, KeyCode::BackTab) => form.field = form.field.prev(),
        (m, KeyCode::Tab) if m.contains(KeyModifiers::SHIFT) => form.field = form.field.prev(),
        (_, KeyCode::Tab | KeyCode::Down) => form.field = form.field.next(),
        (_, KeyCode::Up) => form.field = form.field.prev(),

        // Priority radio group
        (_, KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' '))
            if form.field == AddField::Priority =>
        {
            form.priority = form.priority.next()
        }
        (_, KeyCode::Left | KeyCode::Char('h')) if form.field == AddField::Priority => {
            form.priority = form.priority.prev()
        }

        _ => {
            if let Some(input) = focused_input(form) {
                edit_text(input, key);
            }
        }
    }
}

/// Submit the form. It stays open when the store rejects the values.
fn submit(app: &mut App) {
    let Some(form) = app.add_form.clone() else {
        return;
    };
    if app.add_task(form.text.as_str(), form.priority, form.deadline.as_str()) {
        app.add_form = None;
        app.mode = Mode::Navigate;
    }
}
