use crate::config::Config;
use crate::engine::compute_stats;
use crate::errors::AppResult;
use crate::sources;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let students = sources::load_students(Path::new(&cfg.students_file));
    let stats = compute_stats(&students);

    let mut table = Table::new(vec!["Category", "Count"]);
    table.add_row(vec![
        "Total Students".to_string(),
        stats.total_students.to_string(),
    ]);
    table.add_row(vec![
        "Vaccinated Students".to_string(),
        stats.vaccinated_students.to_string(),
    ]);
    table.add_row(vec![
        "Unvaccinated Students".to_string(),
        stats.unvaccinated_students.to_string(),
    ]);

    print!("{}", table.render());
    Ok(())
}
