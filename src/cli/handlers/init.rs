use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::config_io;
use crate::io::workspace_io::{self, TASKS_FILE};

pub fn cmd_init(data_dir: &Path, args: InitArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let existed = config_io::config_path(data_dir).exists() || data_dir.join(TASKS_FILE).exists();
    let workspace = workspace_io::init_workspace(data_dir, args.force)?;

    if json {
        let output = serde_json::json!({
            "data_dir": workspace.data_dir,
            "tasks": workspace.store.len(),
            "reinitialized": existed && args.force,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if existed && !args.force {
        println!(
            "already initialized: {} ({} tasks kept; use --force to reset)",
            workspace.data_dir.display(),
            workspace.store.len()
        );
    } else {
        println!("initialized {}", workspace.data_dir.display());
    }
    Ok(())
}
