use crate::cli::parser::Commands;
use crate::config::Config;
use crate::engine::{build_report_rows, distinct_vaccine_options, filter_by_vaccine, paginate};
use crate::errors::AppResult;
use crate::sources;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        vaccine,
        page,
        page_size,
        options,
    } = cmd
    {
        let students = sources::load_students(Path::new(&cfg.students_file));
        let drives = sources::load_drives(Path::new(&cfg.drives_file));

        let rows = build_report_rows(&students, &drives);

        if *options {
            println!("Vaccine options: {}", distinct_vaccine_options(&rows).join(", "));
        }

        let rows = filter_by_vaccine(&rows, vaccine);

        // paging only when asked for; export paths never page
        let rows = match (page, page_size) {
            (None, None) => rows,
            _ => paginate(
                &rows,
                page.unwrap_or(0),
                page_size.unwrap_or(cfg.page_size),
            ),
        };

        if rows.is_empty() {
            println!("No report rows.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            "Student Name",
            "Class",
            "Vaccinated Status",
            "Date of Vaccination",
            "Vaccine Name",
        ]);

        for row in &rows {
            table.add_row(vec![
                row.student_name.clone(),
                row.class.clone(),
                row.vaccinated.as_str().to_string(),
                row.date.clone(),
                row.vaccine.clone(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
