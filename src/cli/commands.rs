use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::filter::StatusFilter;
use crate::model::task::Priority;

#[derive(Parser)]
#[command(name = "tl", about = concat!("tasklane v", env!("CARGO_PKG_VERSION"), " - a task list with an urgency ribbon"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory with a default config
    Init(InitArgs),
    /// Add a task
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Mark a task complete, or active again
    Toggle(IdArg),
    /// Replace the text of a task
    Edit(EditArgs),
    /// Delete a task
    Delete(IdArg),
    /// Show tasks due soon and the ribbon line
    Urgent,
    /// Show the completion counter
    Stats,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config and task list
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Priority: low, medium or high
    #[arg(short, long, default_value = "low")]
    pub priority: Priority,
    /// Deadline, local time: "YYYY-MM-DD HH:MM"
    #[arg(long)]
    pub deadline: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Status filter: all, active or completed
    #[arg(long, default_value = "all")]
    pub filter: StatusFilter,
    /// Case-insensitive substring to match
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id
    pub id: i64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: i64,
    /// New text
    pub text: String,
}
