use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub urgency: UrgencyConfig,
    #[serde(default)]
    pub ribbon: RibbonConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyConfig {
    /// A deadline this close (in minutes) makes any incomplete task urgent
    #[serde(default = "default_window_minutes")]
    pub window_minutes: u32,
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        UrgencyConfig {
            window_minutes: default_window_minutes(),
        }
    }
}

impl UrgencyConfig {
    /// The urgency window in milliseconds
    pub fn window_ms(&self) -> i64 {
        i64::from(self.window_minutes) * 60_000
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RibbonConfig {
    /// Copies of the ribbon line, for the continuous scroll
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Seconds between urgency recomputations in the TUI
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        RibbonConfig {
            repeat: default_repeat(),
            separator: default_separator(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, `key = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_window_minutes() -> u32 {
    120
}

fn default_repeat() -> usize {
    10
}

fn default_separator() -> String {
    " \u{2022} ".to_string()
}

fn default_refresh_secs() -> u64 {
    60
}

fn default_true() -> bool {
    true
}
