use crate::cli::parser::Commands;
use crate::config::Config;
use crate::engine::{sort_by_date, upcoming_drives};
use crate::errors::{AppError, AppResult};
use crate::sources;
use crate::utils::table::Table;
use chrono::{Local, NaiveDate};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drives {
        upcoming,
        now,
        horizon,
        sort,
    } = cmd
    {
        let mut drives = sources::load_drives(Path::new(&cfg.drives_file));

        let horizon_days = horizon.unwrap_or(cfg.upcoming_horizon_days);

        if *upcoming {
            let reference = match now {
                Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(raw.clone()))?,
                None => Local::now().date_naive(),
            };

            drives = upcoming_drives(&drives, reference, horizon_days);

            if drives.is_empty() {
                println!("No upcoming drives in the next {} days.", horizon_days);
                return Ok(());
            }
        }

        if let Some(direction) = sort {
            drives = sort_by_date(&drives, *direction);
        }

        if drives.is_empty() {
            println!("No drives found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            "Sr No",
            "ID",
            "Name",
            "Date",
            "Doses Available",
            "Applicable Classes",
            "Vaccine Name",
        ]);

        for (index, drive) in drives.iter().enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                drive.id.clone(),
                drive.name.clone(),
                drive.date.clone(),
                drive.doses_available.to_string(),
                drive.applicable_classes.display(),
                drive.vaccine_name.clone(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
