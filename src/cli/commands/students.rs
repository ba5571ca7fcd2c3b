use crate::cli::parser::Commands;
use crate::config::Config;
use crate::engine::search_filter;
use crate::errors::AppResult;
use crate::sources;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Students { query } = cmd {
        let students = sources::load_students(Path::new(&cfg.students_file));
        let students = search_filter(&students, query);

        if students.is_empty() {
            println!("No students found.");
            return Ok(());
        }

        let mut table = Table::new(vec!["Sr No", "ID", "Name", "Class", "Vaccines"]);

        for (index, student) in students.iter().enumerate() {
            let vaccines = student
                .vaccinations
                .iter()
                .map(|v| v.vaccine.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            table.add_row(vec![
                (index + 1).to_string(),
                student.id.clone(),
                student.name.clone(),
                student.class.clone(),
                vaccines,
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
