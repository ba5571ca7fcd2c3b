use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::import;
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Import { file, out } = cmd {
        let reader = File::open(Path::new(file))?;
        let students = import::parse_students(reader)?;

        success(format!(
            "Imported {} student record(s) from '{}'",
            students.len(),
            file
        ));

        let blank_ids = students.iter().filter(|s| s.id.is_empty()).count();
        if blank_ids > 0 {
            warning(format!("{} row(s) have an empty id", blank_ids));
        }

        let mut table = Table::new(vec!["ID", "Name", "Class", "Vaccinations"]);
        for student in &students {
            table.add_row(vec![
                student.id.clone(),
                student.name.clone(),
                student.class.clone(),
                student.vaccinations.len().to_string(),
            ]);
        }
        print!("{}", table.render());

        if let Some(out_path) = out {
            let json = serde_json::to_string_pretty(&students)?;
            let mut out_file = File::create(Path::new(out_path))?;
            out_file.write_all(json.as_bytes())?;
            success(format!("Canonical records written to '{}'", out_path));
        }
    }
    Ok(())
}
