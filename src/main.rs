use clap::Parser;
use tasklane::cli::commands::Cli;
use tasklane::cli::handlers;
use tasklane::util::logging;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand → launch TUI
        None => tasklane::tui::run(cli.data_dir.as_deref()),
        Some(_) => {
            logging::init_stderr();
            handlers::dispatch(cli)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
