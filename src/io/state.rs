use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::filter::StatusFilter;

/// Persisted TUI state (written to .state.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Selected status filter tab
    #[serde(default)]
    pub filter: StatusFilter,
    /// Search text in effect when the TUI closed
    #[serde(default)]
    pub last_search: Option<String>,
    /// Id of the task under the cursor
    #[serde(default)]
    pub cursor_task: Option<i64>,
}

/// Read .state.json from the data directory
pub fn read_ui_state(data_dir: &Path) -> Option<UiState> {
    let path = data_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the data directory
pub fn write_ui_state(data_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = data_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::create_dir_all(data_dir)?;
    fs::write(&path, content)
}
