pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod scoring;
pub mod services;
pub mod training;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::Path;

use crate::cli::{Command, TrainingCommand};
use crate::config::settings::AppConfig;
use crate::domain::DrillKind;
use crate::services::ingestion::ImportService;
use crate::services::processing::ProcessingService;
use crate::services::reporting::ReportService;
use crate::services::training::TrainingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_ingest(path: &Path) -> Result<()> {
    let service = ImportService::new()?;
    service.run(path)
}

pub fn handle_process() -> Result<()> {
    let service = ProcessingService::new()?;
    service.run()
}

pub fn handle_show(match_id: i64) -> Result<()> {
    let service = ReportService::new()?;
    service.show_match(match_id)
}

pub fn handle_training(command: TrainingCommand) -> Result<()> {
    let config = AppConfig::new();
    match command {
        TrainingCommand::Lineup { script } => {
            TrainingService::new(config)?.run_drill(DrillKind::LineUp, &script)
        }
        TrainingCommand::RedBlack { script } => {
            TrainingService::new(config)?.run_drill(DrillKind::RedBlack, &script)
        }
        TrainingCommand::Best => ReportService::new()?.show_best(),
    }
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
