//! Filter, sort and page slicing over report rows and drive lists.
//! The caller owns the filter/sort/page cursor; every function here is pure.

use crate::models::{Drive, ReportRow, Student, PLACEHOLDER};
use clap::ValueEnum;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sentinel filter value that keeps every row.
pub const ALL_VACCINES: &str = "All";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Asc,
    Desc,
}

/// Keep rows whose vaccine name matches exactly. Vaccine names are catalog
/// values, so the match is case-sensitive; the "All" sentinel is identity.
pub fn filter_by_vaccine(rows: &[ReportRow], filter: &str) -> Vec<ReportRow> {
    if filter == ALL_VACCINES {
        return rows.to_vec();
    }

    rows.iter().filter(|r| r.vaccine == filter).cloned().collect()
}

/// All non-placeholder vaccine names present in the rows, sorted ascending,
/// with the "All" sentinel prepended.
pub fn distinct_vaccine_options(rows: &[ReportRow]) -> Vec<String> {
    let names: BTreeSet<&str> = rows
        .iter()
        .map(|r| r.vaccine.as_str())
        .filter(|v| *v != PLACEHOLDER)
        .collect();

    let mut options = vec![ALL_VACCINES.to_string()];
    options.extend(names.into_iter().map(str::to_string));
    options
}

/// Stable sort on parsed drive date. Ties keep their input order; drives with
/// unparseable dates go last in either direction, also in input order.
pub fn sort_by_date(drives: &[Drive], direction: Direction) -> Vec<Drive> {
    let mut sorted = drives.to_vec();

    sorted.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(da), Some(db)) => match direction {
            Direction::Asc => da.cmp(&db),
            Direction::Desc => db.cmp(&da),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    sorted
}

/// Zero-based page slice `[page_index * page_size, + page_size)`, clamped to
/// the available length. A page past the end is empty, never an error.
pub fn paginate<T: Clone>(rows: &[T], page_index: usize, page_size: usize) -> Vec<T> {
    let start = page_index.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Case-insensitive substring search across name, class, id and the
/// space-joined vaccine names. An empty query matches everything.
pub fn search_filter(students: &[Student], query: &str) -> Vec<Student> {
    let q = query.to_lowercase();
    if q.is_empty() {
        return students.to_vec();
    }

    students
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&q)
                || s.class.to_lowercase().contains(&q)
                || s.id.to_lowercase().contains(&q)
                || s.vaccine_names().to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}
