use std::fs;
use std::path::{Path, PathBuf};

use crate::io::workspace_io::StoreError;
use crate::model::config::Config;

/// Config file written by `tl init`
pub const DEFAULT_CONFIG: &str = r##"# tasklane configuration

[urgency]
# Any incomplete task due within this many minutes shows in the ribbon
window_minutes = 120

[ribbon]
# Copies of the ribbon line, so the scroll never runs dry
repeat = 10
separator = " • "
# Seconds between urgency refreshes in the TUI
refresh_secs = 60

[ui]
show_key_hints = true

[ui.colors]
# background = "#0C001B"
# alert = "#FF4444"
"##;

/// Path of config.toml inside a data directory
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Read config.toml. A missing file yields the defaults.
pub fn read_config(data_dir: &Path) -> Result<Config, StoreError> {
    let path = config_path(data_dir);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| StoreError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_config(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn default_template_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            config_path(dir.path()),
            "[urgency]\nwindow_minutes = 15\n[ribbon]\nrefresh_secs = 5\n",
        )
        .unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.urgency.window_minutes, 15);
        assert_eq!(config.ribbon.refresh_secs, 5);
        assert_eq!(config.ribbon.repeat, 10);
    }

    #[test]
    fn malformed_config_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(config_path(dir.path()), "[urgency\nwindow_minutes = ").unwrap();
        assert!(matches!(
            read_config(dir.path()),
            Err(StoreError::ConfigParseError(_))
        ));
    }
}
