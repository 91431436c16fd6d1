use anyhow::Result;

use snooker_stats::cli::Command;
use snooker_stats::{
    handle_completions, handle_ingest, handle_process, handle_show, handle_training, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Ingest { path } => handle_ingest(&path),
        Command::Process => handle_process(),
        Command::Show { match_id } => handle_show(match_id),
        Command::Training(training) => handle_training(training),
        Command::Completions { shell } => handle_completions(shell),
    }
}
