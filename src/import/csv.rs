//! Bulk student import from header-keyed CSV.
//!
//! Required columns: `id`, `name`, `class`. Vaccination data arrives as
//! repeating wildcard column groups: for any N, an optional `vaccineN` column
//! holds a vaccine name and the sibling `driveIdN` column holds the drive it
//! was administered under. The numbered-column shape stops at this boundary;
//! downstream code only ever sees canonical `(vaccine, drive_id)` pairs.

use crate::errors::{AppError, AppResult};
use crate::models::{Student, Vaccination};
use regex::Regex;
use std::io::Read;

/// Reference bulk-import payload, offered to users as a starting template.
pub const SAMPLE_CSV: &str = "\
id,name,class,vaccine1,driveId1,vaccine2,driveId2
STU2001,Ananya,10th,Covishield,DRV001,Covaxin,DRV002
STU2002,Rahul,9th,Covishield,DRV001,,
STU2003,Meera,11th,Covaxin,DRV002,,
STU2004,Dev,10th,Sputnik,DRV003,,
STU2005,Simran,12th,,,
";

/// Parse a bulk-import payload into canonical student records.
///
/// Rows keep their input order. A row missing `id`, `name` or `class` is still
/// emitted with empty fields so the data-quality problem reaches the caller;
/// duplicate ids pass through untouched. Rows whose vaccine columns are all
/// empty yield a student with an empty vaccination list.
pub fn parse_students<R: Read>(reader: R) -> AppResult<Vec<Student>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let non_digits = Regex::new(r"[^0-9]")
        .map_err(|e| AppError::Import(format!("suffix pattern: {e}")))?;

    let mut students = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let field = |key: &str| -> String {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(key))
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };

        let mut vaccinations = Vec::new();

        for (i, header) in headers.iter().enumerate() {
            if !header.to_lowercase().starts_with("vaccine") {
                continue;
            }

            let value = record.get(i).unwrap_or("").trim();
            if value.is_empty() {
                continue;
            }

            // "vaccine2" -> "2"; a bare "vaccine" header is the single
            // implicit group and pairs with a bare "driveId".
            let suffix = non_digits.replace_all(header, "");
            let sibling = format!("driveId{suffix}");

            let drive_id = field(&sibling).trim().to_string();

            vaccinations.push(Vaccination {
                vaccine: value.to_string(),
                drive_id,
            });
        }

        students.push(Student {
            id: field("id"),
            name: field("name"),
            class: field("class"),
            vaccinations,
        });
    }

    Ok(students)
}
