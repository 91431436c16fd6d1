use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "snooker match statistics backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Load exported match documents (JSON) into the database
    Ingest {
        /// A match document file, or a directory of .json documents
        path: PathBuf,
    },
    /// Replay all stored frames and derive per-frame statistics
    Process,
    /// Print the shot-by-shot history and summary of a match
    Show {
        /// Database id of the match
        #[arg(short, long)]
        match_id: i64,
    },
    /// Run a training drill from an event script, or report bests
    #[clap(subcommand)]
    Training(TrainingCommand),
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum TrainingCommand {
    /// Line-Up drill: reds alternated with colors, then the clearance
    Lineup {
        /// Event script: one ball name or "miss" per line
        script: PathBuf,
    },
    /// Red-Black drill: strictly alternating reds and blacks
    RedBlack {
        /// Event script: one ball name or "miss" per line
        script: PathBuf,
    },
    /// Show the best persisted attempt for each drill
    Best,
}
