//! Join student vaccination evidence against drive metadata.

use crate::models::{DashboardStats, Drive, ReportRow, Student, VaccinatedFlag, PLACEHOLDER};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

pub const DEFAULT_HORIZON_DAYS: i64 = 30;

/// Build one denormalized report row per (student, vaccine) pair.
///
/// Drives are resolved by id. A vaccination referencing a drive that is not in
/// the collection still counts as vaccinated (the student-side evidence is
/// authoritative); only the date falls back to the placeholder. Students with
/// no vaccinations yield exactly one "No" row. Row order follows student input
/// order, then vaccination-pair order.
pub fn build_report_rows(students: &[Student], drives: &[Drive]) -> Vec<ReportRow> {
    let drive_map: HashMap<&str, &Drive> = drives.iter().map(|d| (d.id.as_str(), d)).collect();

    let mut rows = Vec::new();

    for student in students {
        if student.vaccinations.is_empty() {
            rows.push(ReportRow {
                student_name: student.name.clone(),
                class: student.class.clone(),
                vaccinated: VaccinatedFlag::No,
                date: PLACEHOLDER.to_string(),
                vaccine: PLACEHOLDER.to_string(),
            });
            continue;
        }

        for vacc in &student.vaccinations {
            let date = drive_map
                .get(vacc.drive_id.as_str())
                .map(|d| d.date.trim())
                .filter(|d| !d.is_empty())
                .unwrap_or(PLACEHOLDER)
                .to_string();

            rows.push(ReportRow {
                student_name: student.name.clone(),
                class: student.class.clone(),
                vaccinated: VaccinatedFlag::Yes,
                date,
                vaccine: vacc.vaccine.clone(),
            });
        }
    }

    rows
}

/// Aggregate dashboard counts over the student collection.
pub fn compute_stats(students: &[Student]) -> DashboardStats {
    let total = students.len();
    let vaccinated = students.iter().filter(|s| s.is_vaccinated()).count();

    DashboardStats {
        total_students: total,
        vaccinated_students: vaccinated,
        unvaccinated_students: total - vaccinated,
    }
}

/// Drives whose date lies in the closed interval `[now, now + horizon_days]`,
/// inclusive on both ends. Input order is preserved (sorting is a separate,
/// opt-in operation). Drives with unparseable dates are excluded.
pub fn upcoming_drives(drives: &[Drive], now: NaiveDate, horizon_days: i64) -> Vec<Drive> {
    let end = now + Duration::days(horizon_days);

    drives
        .iter()
        .filter(|d| {
            d.parsed_date()
                .map(|date| date >= now && date <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
