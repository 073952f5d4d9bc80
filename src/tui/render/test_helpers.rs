use std::cell::RefCell;
use std::path::Path;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::workspace_io;
use crate::model::config::Config;
use crate::model::task::{Priority, Task};
use crate::model::workspace::Workspace;
use crate::ops::task_ops::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Wall clock used by test apps (2025-10-09T08:53:20Z)
pub const FIXED_NOW: i64 = 1_760_000_000_000;

fn fixed_clock() -> i64 {
    FIXED_NOW
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over `dir` holding low-priority tasks with ids `FIXED_NOW + i`.
/// A non-empty list is also written to tasks.json, since every mutation
/// re-reads the file.
pub fn app_in_dir(dir: &Path, texts: &[&str]) -> App {
    let tasks = texts
        .iter()
        .enumerate()
        .map(|(i, text)| Task::new(FIXED_NOW + i as i64, *text, Priority::Low, None))
        .collect();
    let store = TaskStore::from_tasks(tasks);
    if !store.is_empty() {
        workspace_io::save_tasks(dir, &store).unwrap();
    }
    let workspace = Workspace {
        data_dir: dir.to_path_buf(),
        config: Config::default(),
        store,
    };
    let mut app = App::new(workspace);
    app.clock = fixed_clock;
    app.refresh_ribbon();
    app
}

thread_local! {
    // each test runs on its own thread, so these drop with the test
    static SCRATCH_DIRS: RefCell<Vec<TempDir>> = const { RefCell::new(Vec::new()) };
}

/// Like [`app_in_dir`], over a scratch directory removed when the test ends.
pub fn app_with_texts(texts: &[&str]) -> App {
    let dir = TempDir::new().unwrap();
    let app = app_in_dir(dir.path(), texts);
    SCRATCH_DIRS.with(|dirs| dirs.borrow_mut().push(dir));
    app
}
