use std::path::PathBuf;

use crate::model::config::Config;
use crate::ops::task_ops::TaskStore;

/// A loaded data directory: its config and the task list
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory holding tasks.json, config.toml and friends
    pub data_dir: PathBuf,
    pub config: Config,
    pub store: TaskStore,
}

impl Workspace {
    /// Path of the persisted task list
    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join(crate::io::workspace_io::TASKS_FILE)
    }
}
