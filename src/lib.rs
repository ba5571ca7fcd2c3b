//! vaxreport library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! reconciliation/reporting modules.

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Stats => cli::commands::stats::handle(cfg),
        Commands::Drives { .. } => cli::commands::drives::handle(&cli.command, cfg),
        Commands::Students { .. } => cli::commands::students::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command),
        Commands::SampleCsv => cli::commands::sample_csv::handle(),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config loaded once; CLI source overrides take precedence
    let mut cfg = Config::load();

    if let Some(students) = &cli.students {
        cfg.students_file = students.clone();
    }
    if let Some(drives) = &cli.drives {
        cfg.drives_file = drives.clone();
    }

    dispatch(&cli, &cfg)
}
