use std::error::Error;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::io::watcher::{FileEvent, StoreWatcher};
use crate::io::workspace_io::{self, TASKS_FILE};
use crate::model::filter::StatusFilter;
use crate::model::task::{Priority, TaskId};
use crate::model::workspace::Workspace;
use crate::ops::query::visible_tasks;
use crate::ops::ribbon::{Ribbon, build_ribbon};
use crate::ops::task_ops::{EditOutcome, TaskStore};
use crate::util::{logging, time};

use super::input::{self, TextInput};
use super::render;
use super::theme::Theme;
use super::view::{ViewModel, ViewState};

/// Event loop tick; the ribbon scrolls one cell per tick
pub const TICK: Duration = Duration::from_millis(200);

/// How long a notice stays in the status row
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing in the live search box
    Search,
    /// Add form open
    Add,
    /// Editing the text of the task under the cursor
    Edit,
}

/// Focused field of the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Text,
    Priority,
    Deadline,
}

impl AddField {
    pub fn next(self) -> Self {
        match self {
            AddField::Text => AddField::Priority,
            AddField::Priority => AddField::Deadline,
            AddField::Deadline => AddField::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AddField::Text => AddField::Deadline,
            AddField::Priority => AddField::Text,
            AddField::Deadline => AddField::Priority,
        }
    }
}

/// The add form: text, priority radio group, optional deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub text: TextInput,
    pub priority: Priority,
    pub deadline: TextInput,
    pub field: AddField,
}

impl Default for AddForm {
    fn default() -> Self {
        AddForm {
            text: TextInput::default(),
            priority: Priority::Low,
            deadline: TextInput::default(),
            field: AddField::Text,
        }
    }
}

/// Edit prompt for one task, pre-filled with its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPrompt {
    pub task_id: TaskId,
    pub input: TextInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient message in the status row
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub at: Instant,
}

/// Main application state
pub struct App {
    pub workspace: Workspace,
    pub view_state: ViewState,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible rows
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub show_help: bool,
    /// Search box contents while in Search mode
    pub search_input: TextInput,
    pub add_form: Option<AddForm>,
    pub edit_prompt: Option<EditPrompt>,
    pub notice: Option<Notice>,
    /// Last computed ribbon; refreshed after mutations and on the timer
    pub ribbon: Option<Ribbon>,
    /// Scroll position of the ribbon, in graphemes
    pub ribbon_offset: usize,
    pub last_refresh: Instant,
    pub last_scroll: Instant,
    /// Source of "now" in epoch ms
    pub clock: fn() -> i64,
}

impl App {
    pub fn new(workspace: Workspace) -> Self {
        let theme = Theme::from_config(&workspace.config.ui);
        let now = Instant::now();
        let mut app = App {
            workspace,
            view_state: ViewState::default(),
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            search_input: TextInput::default(),
            add_form: None,
            edit_prompt: None,
            notice: None,
            ribbon: None,
            ribbon_offset: 0,
            last_refresh: now,
            last_scroll: now,
            clock: time::now_ms,
        };
        app.refresh_ribbon();
        app
    }

    pub fn now_ms(&self) -> i64 {
        (self.clock)()
    }

    pub fn window_ms(&self) -> i64 {
        self.workspace.config.urgency.window_ms()
    }

    /// Recompute the urgent set and ribbon text from the current list
    pub fn refresh_ribbon(&mut self) {
        let ribbon = build_ribbon(
            self.workspace.store.tasks(),
            self.now_ms(),
            &self.workspace.config.ribbon,
            self.window_ms(),
        );
        // time-left text changes every minute; only a new urgent set restarts the scroll
        if ribbon.as_ref().map(|r| &r.ids) != self.ribbon.as_ref().map(|r| &r.ids) {
            self.ribbon_offset = 0;
        }
        tracing::trace!(urgent = ribbon.as_ref().map_or(0, Ribbon::count), "ribbon refreshed");
        self.ribbon = ribbon;
        self.last_refresh = Instant::now();
    }

    /// The view description for the current state
    pub fn view_model(&self) -> ViewModel {
        ViewModel::build(
            &self.workspace.store,
            &self.view_state,
            self.ribbon.as_ref(),
            self.now_ms(),
            self.window_ms(),
        )
    }

    /// Ids of the visible rows, in display order
    pub fn visible_ids(&self) -> Vec<TaskId> {
        visible_tasks(
            self.workspace.store.tasks(),
            self.view_state.filter,
            &self.view_state.search,
        )
        .into_iter()
        .map(|t| t.id)
        .collect()
    }

    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.visible_ids().get(self.cursor).copied()
    }

    /// Keep the cursor on a visible row
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_ids().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Put the cursor on a task if it is visible
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(idx) = self.visible_ids().iter().position(|&v| v == id) {
            self.cursor = idx;
        }
    }

    /// Case-insensitive literal regex for highlighting search matches
    pub fn active_search_re(&self) -> Option<Regex> {
        if self.view_state.search.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(&self.view_state.search))).ok()
    }

    pub fn notify(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice {
            text: text.into(),
            level,
            at: Instant::now(),
        });
    }

    /// Apply `f` to tasks.json under the data-dir lock and adopt the result.
    ///
    /// The file is re-read inside the lock, so tasks written by the CLI since
    /// the last watcher reload are kept. `f` returns `Some` to save. On error
    /// a notice is shown and the in-memory list is left alone.
    fn update<T>(
        &mut self,
        f: impl FnOnce(&mut TaskStore) -> Result<Option<T>, Box<dyn Error>>,
    ) -> Option<T> {
        match workspace_io::update_tasks(&self.workspace.data_dir, f) {
            Ok((store, outcome)) => {
                self.workspace.store = store;
                self.refresh_ribbon();
                self.clamp_cursor();
                outcome
            }
            Err(e) => {
                self.notify(e.to_string(), NoticeLevel::Error);
                None
            }
        }
    }

    // -- store operations -------------------------------------------------

    /// Add a task from the form values. Returns false (with a notice) when
    /// the text is empty or the deadline does not parse.
    pub fn add_task(&mut self, text: &str, priority: Priority, deadline: &str) -> bool {
        let deadline = match deadline.trim() {
            "" => None,
            s => match time::parse_deadline(s) {
                Ok(ms) => Some(ms),
                Err(e) => {
                    self.notify(e, NoticeLevel::Error);
                    return false;
                }
            },
        };
        let now = self.now_ms();
        let added = self.update(|store| Ok(Some(store.add(text, priority, deadline, now)?)));
        match added {
            Some(id) => {
                tracing::info!(id, priority = %priority, "task added");
                self.select_task(id);
                true
            }
            None => false,
        }
    }

    pub fn toggle_at_cursor(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        if self
            .update(|store| Ok(store.toggle_complete(id).then_some(())))
            .is_some()
        {
            tracing::info!(id, "task toggled");
        }
    }

    pub fn delete_at_cursor(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        let data_dir = self.workspace.data_dir.clone();
        let deleted = self.update(|store| {
            let Some(task) = store.get(id) else {
                return Ok(None);
            };
            recovery::log_task_deletion(&data_dir, id, &serde_json::to_string(task)?);
            Ok(store.delete(id).then_some(()))
        });
        if deleted.is_some() {
            tracing::info!(id, "task deleted");
        }
    }

    /// Apply an edit. Blank text leaves the task unchanged without a notice.
    pub fn apply_edit(&mut self, id: TaskId, text: &str) {
        let edited = self.update(|store| match store.edit(id, text) {
            EditOutcome::Updated => Ok(Some(())),
            EditOutcome::Ignored | EditOutcome::NotFound => Ok(None),
        });
        if edited.is_some() {
            tracing::info!(id, "task edited");
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.view_state.filter = filter;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn set_search(&mut self, query: &str) {
        self.view_state.search = query.to_string();
        self.clamp_cursor();
    }

    // -- timers and external changes ----------------------------------------

    /// Advance timers: ribbon scroll, periodic urgency refresh, notice expiry
    pub fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_scroll) >= TICK {
            self.ribbon_offset = self.ribbon_offset.wrapping_add(1);
            self.last_scroll = now;
        }
        let refresh = Duration::from_secs(self.workspace.config.ribbon.refresh_secs.max(1));
        if now.duration_since(self.last_refresh) >= refresh {
            self.refresh_ribbon();
        }
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.duration_since(n.at) >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    /// tasks.json changed on disk: reload unless it matches what we hold
    pub fn handle_file_event(&mut self, event: FileEvent) {
        let FileEvent::TasksChanged(path) = event;
        match workspace_io::load_tasks(&self.workspace.data_dir) {
            Ok(store) if store == self.workspace.store => {}
            Ok(store) => {
                tracing::info!(path = %path.display(), tasks = store.len(), "reloaded after external change");
                self.workspace.store = store;
                self.refresh_ribbon();
                self.clamp_cursor();
                self.notify("tasks reloaded", NoticeLevel::Info);
            }
            Err(e) => {
                tracing::warn!(error = %e, "reload failed, keeping in-memory tasks");
                recovery::log_recovery(
                    &self.workspace.data_dir,
                    RecoveryEntry {
                        timestamp: chrono::Utc::now(),
                        category: RecoveryCategory::Reload,
                        description: "external change could not be loaded".to_string(),
                        fields: vec![
                            ("Target".to_string(), TASKS_FILE.to_string()),
                            ("Error".to_string(), e.to_string()),
                        ],
                        body: std::fs::read_to_string(self.workspace.tasks_path()).unwrap_or_default(),
                    },
                );
                self.notify(format!("reload failed: {}", e), NoticeLevel::Error);
            }
        }
    }
}

/// Restore filter, search and cursor from .state.json
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let Some(ui_state) = read_ui_state(&app.workspace.data_dir) else {
        return;
    };
    app.view_state.filter = ui_state.filter;
    app.view_state.search = ui_state.last_search.unwrap_or_default();
    if let Some(id) = ui_state.cursor_task {
        app.select_task(id);
    }
    app.clamp_cursor();
}

/// Save filter, search and cursor to .state.json
pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let ui_state = UiState {
        filter: app.view_state.filter,
        last_search: Some(app.view_state.search.clone()).filter(|s| !s.is_empty()),
        cursor_task: app.cursor_task_id(),
    };
    if let Err(e) = write_ui_state(&app.workspace.data_dir, &ui_state) {
        tracing::warn!(error = %e, "could not save ui state");
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let data_dir = workspace_io::resolve_data_dir(data_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    logging::init_file(&data_dir.join("tasklane.log"));

    let workspace = workspace_io::load_workspace(&data_dir)?;
    let mut app = App::new(workspace);
    restore_ui_state(&mut app);

    let watcher = match StoreWatcher::start(&data_dir) {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(error = %e, "file watcher unavailable, external changes will not reload");
            None
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&StoreWatcher>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if let Some(watcher) = watcher {
            for evt in watcher.poll() {
                app.handle_file_event(evt);
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn add_persists_and_selects() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &[]);
        assert!(app.add_task("Buy milk", Priority::Low, ""));
        assert_eq!(app.workspace.store.len(), 1);
        assert_eq!(app.cursor, 0);

        let on_disk = workspace_io::load_tasks(dir.path()).unwrap();
        assert_eq!(on_disk, app.workspace.store);
    }

    #[test]
    fn empty_add_shows_notice_and_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &[]);
        assert!(!app.add_task("   ", Priority::High, ""));
        assert!(app.workspace.store.is_empty());
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.text, "Please enter a task first.");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(!dir.path().join(TASKS_FILE).exists());
    }

    #[test]
    fn bad_deadline_rejects_add() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &[]);
        assert!(!app.add_task("Pay rent", Priority::Low, "next friday"));
        assert!(app.workspace.store.is_empty());
        assert!(app.notice.is_some());
    }

    #[test]
    fn toggle_and_delete_at_cursor() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &["one", "two"]);
        app.cursor = 1;
        app.toggle_at_cursor();
        assert!(app.workspace.store.tasks()[1].completed);

        app.delete_at_cursor();
        assert_eq!(app.workspace.store.len(), 1);
        assert_eq!(app.cursor, 0);
        let on_disk = workspace_io::load_tasks(dir.path()).unwrap();
        assert_eq!(on_disk.tasks()[0].text, "one");
        let log = std::fs::read_to_string(recovery::recovery_log_path(dir.path())).unwrap();
        assert!(log.contains("\"two\""));
    }

    #[test]
    fn blank_edit_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &["keep"]);
        let id = app.workspace.store.tasks()[0].id;
        app.apply_edit(id, "  ");
        assert_eq!(app.workspace.store.tasks()[0].text, "keep");
        assert!(app.notice.is_none());
        app.apply_edit(id, "changed");
        assert_eq!(app.workspace.store.tasks()[0].text, "changed");
    }

    #[test]
    fn filter_change_resets_cursor() {
        let mut app = app_with_texts(&["a", "b", "c"]);
        app.cursor = 2;
        app.set_filter(StatusFilter::Completed);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.cursor_task_id(), None);
    }

    #[test]
    fn timer_refreshes_ribbon() {
        let mut app = app_with_texts(&[]);
        app.workspace
            .store
            .add("soon", Priority::Low, Some(FIXED_NOW + 10 * 60_000), FIXED_NOW)
            .unwrap();
        assert!(app.ribbon.is_none());

        let later = app.last_refresh + Duration::from_secs(61);
        app.tick(later);
        assert_eq!(app.ribbon.as_ref().map(Ribbon::count), Some(1));
    }

    #[test]
    fn tick_scrolls_ribbon() {
        let mut app = app_with_texts(&[]);
        let start = app.last_scroll;
        app.tick(start + TICK);
        assert_eq!(app.ribbon_offset, 1);
        app.tick(start + TICK + Duration::from_millis(10));
        assert_eq!(app.ribbon_offset, 1);
    }

    #[test]
    fn external_change_reloads() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &["mine"]);
        let mut other = app.workspace.store.clone();
        other.add("from cli", Priority::High, None, FIXED_NOW).unwrap();
        workspace_io::save_tasks(dir.path(), &other).unwrap();

        app.handle_file_event(FileEvent::TasksChanged(dir.path().join(TASKS_FILE)));
        assert_eq!(app.workspace.store, other);
        assert_eq!(app.notice.as_ref().map(|n| n.text.as_str()), Some("tasks reloaded"));
    }

    #[test]
    fn toggle_keeps_task_written_before_watcher_reload() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &["mine"]);
        let mut other = app.workspace.store.clone();
        let cli_id = other.add("from cli", Priority::High, None, FIXED_NOW).unwrap();
        workspace_io::save_tasks(dir.path(), &other).unwrap();

        // the watcher has not fired yet when the user toggles
        app.toggle_at_cursor();
        let on_disk = workspace_io::load_tasks(dir.path()).unwrap();
        let texts: Vec<&str> = on_disk.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["mine", "from cli"]);
        assert!(on_disk.tasks()[0].completed);
        assert_eq!(app.workspace.store, on_disk);

        // the late file event is then a no-op
        app.handle_file_event(FileEvent::TasksChanged(dir.path().join(TASKS_FILE)));
        assert_eq!(app.workspace.store, on_disk);
        assert!(app.workspace.store.get(cli_id).is_some());
    }

    #[test]
    fn add_after_external_add_gets_a_fresh_id() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &[]);
        let mut other = TaskStore::new();
        let cli_id = other.add("from cli", Priority::Low, None, FIXED_NOW).unwrap();
        workspace_io::save_tasks(dir.path(), &other).unwrap();

        assert!(app.add_task("from tui", Priority::Low, ""));
        let on_disk = workspace_io::load_tasks(dir.path()).unwrap();
        assert_eq!(on_disk.len(), 2);
        assert_eq!(on_disk.tasks()[0].id, cli_id);
        assert_eq!(on_disk.tasks()[1].id, cli_id + 1);
    }

    #[test]
    fn toggle_of_externally_deleted_task_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &["gone", "kept"]);
        let mut other = app.workspace.store.clone();
        other.delete(FIXED_NOW);
        workspace_io::save_tasks(dir.path(), &other).unwrap();

        app.toggle_at_cursor();
        assert_eq!(app.workspace.store, other);
        assert!(!app.workspace.store.tasks()[0].completed);
        assert_eq!(workspace_io::load_tasks(dir.path()).unwrap(), other);
    }

    #[test]
    fn mutation_over_malformed_file_is_refused() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &["mine"]);
        std::fs::write(dir.path().join(TASKS_FILE), "{broken").unwrap();

        app.toggle_at_cursor();
        assert!(!app.workspace.store.tasks()[0].completed);
        assert_eq!(app.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(TASKS_FILE)).unwrap(),
            "{broken"
        );
    }

    fn one_minute_later() -> i64 {
        FIXED_NOW + 60_000
    }

    #[test]
    fn ribbon_scroll_survives_time_left_refresh() {
        let mut app = app_with_texts(&[]);
        app.workspace
            .store
            .add("soon", Priority::Low, Some(FIXED_NOW + 10 * 60_000), FIXED_NOW)
            .unwrap();
        app.refresh_ribbon();
        app.ribbon_offset = 7;

        app.clock = one_minute_later;
        app.refresh_ribbon();
        assert!(app.ribbon.as_ref().unwrap().line.ends_with("9m"));
        assert_eq!(app.ribbon_offset, 7);

        app.workspace
            .store
            .add("also soon", Priority::Low, Some(FIXED_NOW + 20 * 60_000), FIXED_NOW)
            .unwrap();
        app.refresh_ribbon();
        assert_eq!(app.ribbon_offset, 0);
    }

    #[test]
    fn unreadable_external_change_keeps_memory() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &["mine"]);
        let before = app.workspace.store.clone();
        std::fs::write(dir.path().join(TASKS_FILE), "{broken").unwrap();

        app.handle_file_event(FileEvent::TasksChanged(dir.path().join(TASKS_FILE)));
        assert_eq!(app.workspace.store, before);
        assert_eq!(app.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
        let log = std::fs::read_to_string(recovery::recovery_log_path(dir.path())).unwrap();
        assert!(log.contains("{broken"));
    }

    #[test]
    fn ui_state_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_dir(dir.path(), &["alpha", "beta"]);
        app.set_filter(StatusFilter::Active);
        app.set_search("bet");
        save_ui_state(&app);

        let mut restored = app_in_dir(dir.path(), &["alpha", "beta"]);
        restore_ui_state(&mut restored);
        assert_eq!(restored.view_state.filter, StatusFilter::Active);
        assert_eq!(restored.view_state.search, "bet");
        assert_eq!(restored.cursor, 0);
    }
}
