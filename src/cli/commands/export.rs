use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        vaccine,
        force,
    } = cmd
    {
        ExportLogic::export(
            Path::new(&cfg.students_file),
            Path::new(&cfg.drives_file),
            format,
            file,
            vaccine,
            *force,
        )?;
    }
    Ok(())
}
