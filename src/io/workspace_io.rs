use std::fs;
use std::path::{Path, PathBuf};

use crate::io::config_io;
use crate::io::lock::{self, LockError};
use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::workspace::Workspace;
use crate::ops::task_ops::TaskStore;

/// File holding the serialized task list
pub const TASKS_FILE: &str = "tasks.json";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "TASKLANE_DIR";

/// Error type for workspace I/O operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no data directory: set TASKLANE_DIR or HOME, or pass -C")]
    NoDataDir,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Resolve the data directory: explicit override, then `TASKLANE_DIR`,
/// then `$XDG_DATA_HOME/tasklane`, then `$HOME/.local/share/tasklane`.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf, StoreError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = non_empty_env(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = non_empty_env("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg).join("tasklane"));
    }
    non_empty_env("HOME")
        .map(|home| PathBuf::from(home).join(".local").join("share").join("tasklane"))
        .ok_or(StoreError::NoDataDir)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Read the task list. A missing file is an empty list.
pub fn load_tasks(data_dir: &Path) -> Result<TaskStore, StoreError> {
    let path = data_dir.join(TASKS_FILE);
    if !path.exists() {
        return Ok(TaskStore::new());
    }
    let text = fs::read_to_string(&path).map_err(|e| StoreError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    if text.trim().is_empty() {
        return Ok(TaskStore::new());
    }
    serde_json::from_str(&text).map_err(|e| StoreError::ParseError { path, source: e })
}

/// Load config and tasks from a data directory
pub fn load_workspace(data_dir: &Path) -> Result<Workspace, StoreError> {
    let config = config_io::read_config(data_dir)?;
    let store = load_tasks(data_dir)?;
    tracing::debug!(dir = %data_dir.display(), tasks = store.len(), "workspace loaded");
    Ok(Workspace {
        data_dir: data_dir.to_path_buf(),
        config,
        store,
    })
}

/// Overwrite tasks.json with the full list. Callers hold the data-dir lock
/// and have re-read the file under it (see [`update_tasks`]).
///
/// On failure the unsaved JSON goes to the recovery log before the error
/// is returned.
pub fn save_tasks(data_dir: &Path, store: &TaskStore) -> Result<(), StoreError> {
    let path = data_dir.join(TASKS_FILE);
    let content = serde_json::to_string_pretty(store).map_err(|e| StoreError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let result = fs::create_dir_all(data_dir)
        .and_then(|()| recovery::atomic_write(&path, content.as_bytes()))
        .map_err(|e| StoreError::WriteError {
            path: path.clone(),
            source: e,
        });

    match result {
        Ok(()) => {
            tracing::debug!(path = %path.display(), tasks = store.len(), "tasks saved");
            Ok(())
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "tasks save failed");
            recovery::log_recovery(
                data_dir,
                RecoveryEntry {
                    timestamp: chrono::Utc::now(),
                    category: RecoveryCategory::Write,
                    description: "tasks write failed".to_string(),
                    fields: vec![
                        ("Target".to_string(), TASKS_FILE.to_string()),
                        ("Error".to_string(), e.to_string()),
                    ],
                    body: content,
                },
            );
            Err(e)
        }
    }
}

/// Read-modify-write of tasks.json under the data-dir lock.
///
/// The list is re-read after the lock is taken and handed to `f`. When `f`
/// returns `Some` the list is saved. Either way the caller gets back the
/// list as it stands on disk, so changes written by other processes since
/// the caller's last load are never overwritten.
pub fn update_tasks<T, E>(
    data_dir: &Path,
    f: impl FnOnce(&mut TaskStore) -> Result<Option<T>, E>,
) -> Result<(TaskStore, Option<T>), E>
where
    E: From<StoreError> + From<LockError>,
{
    lock::with_lock(data_dir, || {
        let mut store = load_tasks(data_dir)?;
        let outcome = f(&mut store)?;
        if outcome.is_some() {
            save_tasks(data_dir, &store)?;
        }
        Ok((store, outcome))
    })
}

impl Workspace {
    /// Persist the current task list
    pub fn save_tasks(&self) -> Result<(), StoreError> {
        save_tasks(&self.data_dir, &self.store)
    }
}

/// Create a data directory with a default config.toml and an empty task list.
/// Existing files are kept unless `force` is set.
pub fn init_workspace(data_dir: &Path, force: bool) -> Result<Workspace, StoreError> {
    fs::create_dir_all(data_dir).map_err(|e| StoreError::WriteError {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    let config_path = config_io::config_path(data_dir);
    if force || !config_path.exists() {
        recovery::atomic_write(&config_path, config_io::DEFAULT_CONFIG.as_bytes()).map_err(|e| {
            StoreError::WriteError {
                path: config_path.clone(),
                source: e,
            }
        })?;
    }

    let tasks_path = data_dir.join(TASKS_FILE);
    if force || !tasks_path.exists() {
        lock::with_lock(data_dir, || save_tasks(data_dir, &TaskStore::new()))?;
    }

    load_workspace(data_dir)
}
