mod init;
pub use init::cmd_init;

use std::error::Error;
use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::lock;
use crate::io::recovery;
use crate::io::workspace_io;
use crate::model::task::Task;
use crate::model::workspace::Workspace;
use crate::ops::query::visible_tasks;
use crate::ops::ribbon::build_ribbon;
use crate::ops::stats::Progress;
use crate::ops::task_ops::{EditOutcome, TaskError};
use crate::util::time;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let data_dir = workspace_io::resolve_data_dir(cli.data_dir.as_deref())?;

    match cli.command {
        // The TUI is launched from main.rs
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Init(args) => cmd_init(&data_dir, args, json),

            // Read commands
            Commands::List(args) => cmd_list(&data_dir, args, json),
            Commands::Urgent => cmd_urgent(&data_dir, json),
            Commands::Stats => cmd_stats(&data_dir, json),

            // Write commands
            Commands::Add(args) => cmd_add(&data_dir, args, json),
            Commands::Toggle(args) => cmd_toggle(&data_dir, args, json),
            Commands::Edit(args) => cmd_edit(&data_dir, args, json),
            Commands::Delete(args) => cmd_delete(&data_dir, args),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load, mutate and (if `f` saves) persist under the data-dir lock, so a
/// concurrent TUI or CLI write cannot interleave.
fn with_locked_workspace<T>(
    data_dir: &Path,
    f: impl FnOnce(&mut Workspace) -> Result<T, Box<dyn Error>>,
) -> Result<T, Box<dyn Error>> {
    lock::with_lock(data_dir, || {
        let mut workspace = workspace_io::load_workspace(data_dir)?;
        f(&mut workspace)
    })
}

fn print_task(workspace: &Workspace, id: i64, json: bool) -> Result<(), Box<dyn Error>> {
    let task = workspace.store.get(id).ok_or(TaskError::NotFound(id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(task, time::now_ms()))?);
    } else {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(data_dir: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let workspace = workspace_io::load_workspace(data_dir)?;
    let query = args.search.unwrap_or_default();
    let tasks = visible_tasks(workspace.store.tasks(), args.filter, &query);

    if json {
        let now = time::now_ms();
        let output: Vec<TaskJson> = tasks.iter().map(|t| task_to_json(t, now)).collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for task in tasks {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

fn cmd_urgent(data_dir: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let workspace = workspace_io::load_workspace(data_dir)?;
    let now = time::now_ms();
    let ribbon = build_ribbon(
        workspace.store.tasks(),
        now,
        &workspace.config.ribbon,
        workspace.config.urgency.window_ms(),
    );
    let urgent: Vec<&Task> = ribbon
        .iter()
        .flat_map(|r| &r.ids)
        .filter_map(|&id| workspace.store.get(id))
        .collect();

    if json {
        let output = UrgentJson {
            tasks: urgent.iter().map(|t| task_to_json(t, now)).collect(),
            high_alert: ribbon.as_ref().is_some_and(|r| r.high_alert),
            ribbon: ribbon.map(|r| r.line),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if let Some(ribbon) = &ribbon {
        println!("{}", ribbon.line);
        for task in &urgent {
            println!("{}", format_task_line(task));
        }
    } else {
        println!("no urgent tasks");
    }
    Ok(())
}

fn cmd_stats(data_dir: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let workspace = workspace_io::load_workspace(data_dir)?;
    let progress = Progress::of(workspace.store.tasks());
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(&progress))?);
    } else {
        println!("{} ({:.0}%)", progress.label(), progress.percent());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(data_dir: &Path, args: AddArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let deadline = args
        .deadline
        .as_deref()
        .map(time::parse_deadline)
        .transpose()?;

    with_locked_workspace(data_dir, |workspace| {
        let id = workspace
            .store
            .add(&args.text, args.priority, deadline, time::now_ms())?;
        workspace.save_tasks()?;
        tracing::info!(id, priority = %args.priority, "task added");
        if json {
            print_task(workspace, id, true)
        } else {
            println!("{}", id);
            Ok(())
        }
    })
}

fn cmd_toggle(data_dir: &Path, args: IdArg, json: bool) -> Result<(), Box<dyn Error>> {
    with_locked_workspace(data_dir, |workspace| {
        if !workspace.store.toggle_complete(args.id) {
            return Err(TaskError::NotFound(args.id).into());
        }
        workspace.save_tasks()?;
        tracing::info!(id = args.id, "task toggled");
        print_task(workspace, args.id, json)
    })
}

fn cmd_edit(data_dir: &Path, args: EditArgs, json: bool) -> Result<(), Box<dyn Error>> {
    with_locked_workspace(data_dir, |workspace| {
        match workspace.store.edit(args.id, &args.text) {
            EditOutcome::NotFound => Err(TaskError::NotFound(args.id).into()),
            EditOutcome::Ignored if json => print_task(workspace, args.id, true),
            EditOutcome::Ignored => {
                println!("unchanged");
                Ok(())
            }
            EditOutcome::Updated => {
                workspace.save_tasks()?;
                tracing::info!(id = args.id, "task edited");
                print_task(workspace, args.id, json)
            }
        }
    })
}

fn cmd_delete(data_dir: &Path, args: IdArg) -> Result<(), Box<dyn Error>> {
    with_locked_workspace(data_dir, |workspace| {
        let task = workspace
            .store
            .get(args.id)
            .ok_or(TaskError::NotFound(args.id))?;
        let task_json = serde_json::to_string(task)?;
        recovery::log_task_deletion(&workspace.data_dir, args.id, &task_json);

        workspace.store.delete(args.id);
        workspace.save_tasks()?;
        tracing::info!(id = args.id, "task deleted");
        println!("deleted {}", args.id);
        Ok(())
    })
}
