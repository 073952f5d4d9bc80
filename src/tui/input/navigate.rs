use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::filter::StatusFilter;
use crate::tui::app::{AddForm, App, EditPrompt, Mode};

use super::common::TextInput;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.visible_ids().len();
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor movement
        (_, KeyCode::Down | KeyCode::Char('j')) => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Up | KeyCode::Char('k')) => app.cursor = app.cursor.saturating_sub(1),
        (_, KeyCode::Home | KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End | KeyCode::Char('G')) => app.cursor = len.saturating_sub(1),
        (_, KeyCode::PageDown) => app.cursor = (app.cursor + 10).min(len.saturating_sub(1)),
        (_, KeyCode::PageUp) => app.cursor = app.cursor.saturating_sub(10),

        // Filters
        (_, KeyCode::Char('1')) => app.set_filter(StatusFilter::All),
        (_, KeyCode::Char('2')) => app.set_filter(StatusFilter::Active),
        (_, KeyCode::Char('3')) => app.set_filter(StatusFilter::Completed),
        (m, KeyCode::Tab) if !m.contains(KeyModifiers::SHIFT) => {
            app.set_filter(app.view_state.filter.next())
        }

        // Per-task controls
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => app.toggle_at_cursor(),
        (_, KeyCode::Char('d') | KeyCode::Delete) => app.delete_at_cursor(),
        (_, KeyCode::Char('e') | KeyCode::Enter) => open_edit(app),

        (_, KeyCode::Char('a')) => {
            app.add_form = Some(AddForm::default());
            app.mode = Mode::Add;
        }
        (_, KeyCode::Char('/')) => {
            app.search_input = TextInput::with_text(&app.view_state.search);
            app.mode = Mode::Search;
        }
        (_, KeyCode::Esc) => {
            if !app.view_state.search.is_empty() {
                app.set_search("");
            }
        }
        _ => {}
    }
}

/// Open the edit prompt for the task under the cursor, pre-filled with its text
fn open_edit(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    let Some(task) = app.workspace.store.get(id) else {
        return;
    };
    app.edit_prompt = Some(EditPrompt {
        task_id: id,
        input: TextInput::with_text(&task.text),
    });
    app.mode = Mode::Edit;
}
