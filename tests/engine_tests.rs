//! Library-level tests for the reconciliation engine and the
//! filter/sort/paginate pipeline.

use chrono::NaiveDate;
use vaxreport::engine::{
    build_report_rows, compute_stats, distinct_vaccine_options, filter_by_vaccine, paginate,
    search_filter, sort_by_date, upcoming_drives, Direction, ALL_VACCINES,
};
use vaxreport::models::{ClassList, Drive, Student, Vaccination, VaccinatedFlag, PLACEHOLDER};

fn student(id: &str, name: &str, class: &str, pairs: &[(&str, &str)]) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        class: class.to_string(),
        vaccinations: pairs
            .iter()
            .map(|(vaccine, drive_id)| Vaccination {
                vaccine: vaccine.to_string(),
                drive_id: drive_id.to_string(),
            })
            .collect(),
    }
}

fn drive(id: &str, date: &str, vaccine: &str) -> Drive {
    Drive {
        id: id.to_string(),
        name: format!("{id} drive"),
        date: date.to_string(),
        doses_available: 10,
        applicable_classes: ClassList::Joined("9th,10th".to_string()),
        vaccine_name: vaccine.to_string(),
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

#[test]
fn report_rows_one_per_pair_or_single_no_row() {
    let students = vec![
        student("S1", "Ananya", "10th", &[("Covishield", "D1"), ("Covaxin", "D2")]),
        student("S2", "Simran", "12th", &[]),
    ];
    let drives = vec![drive("D1", "2025-04-10", "Covishield")];

    let rows = build_report_rows(&students, &drives);

    assert_eq!(rows.len(), 3);

    let per_student = |name: &str| rows.iter().filter(|r| r.student_name == name).count();
    assert_eq!(per_student("Ananya"), students[0].vaccinations.len().max(1));
    assert_eq!(per_student("Simran"), 1);

    let simran = rows.iter().find(|r| r.student_name == "Simran").unwrap();
    assert_eq!(simran.vaccinated, VaccinatedFlag::No);
    assert_eq!(simran.date, PLACEHOLDER);
    assert_eq!(simran.vaccine, PLACEHOLDER);
}

#[test]
fn missing_drive_keeps_yes_with_placeholder_date() {
    let students = vec![student("S1", "Dev", "10th", &[("Sputnik", "GHOST")])];
    let drives = vec![drive("D1", "2025-04-10", "Covishield")];

    let rows = build_report_rows(&students, &drives);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].vaccinated, VaccinatedFlag::Yes);
    assert_eq!(rows[0].date, PLACEHOLDER);
    assert_eq!(rows[0].vaccine, "Sputnik");
}

#[test]
fn report_row_order_follows_student_then_pair_order() {
    let students = vec![
        student("S1", "A", "9th", &[("V2", "D2"), ("V1", "D1")]),
        student("S2", "B", "9th", &[("V3", "D3")]),
    ];
    let rows = build_report_rows(&students, &[]);

    let vaccines: Vec<&str> = rows.iter().map(|r| r.vaccine.as_str()).collect();
    assert_eq!(vaccines, vec!["V2", "V1", "V3"]);
}

#[test]
fn stats_parts_sum_to_total() {
    let students = vec![
        student("S1", "A", "9th", &[("V1", "D1")]),
        student("S2", "B", "9th", &[]),
        student("S3", "C", "9th", &[("V1", "D1"), ("V2", "D2")]),
    ];

    let stats = compute_stats(&students);

    assert_eq!(stats.total_students, 3);
    assert_eq!(stats.vaccinated_students, 2);
    assert_eq!(
        stats.vaccinated_students + stats.unvaccinated_students,
        stats.total_students
    );
}

#[test]
fn stats_empty_input_is_all_zero() {
    let stats = compute_stats(&[]);
    assert_eq!(stats.total_students, 0);
    assert_eq!(stats.vaccinated_students, 0);
    assert_eq!(stats.unvaccinated_students, 0);
}

#[test]
fn upcoming_window_is_inclusive_on_both_ends() {
    let now = date("2025-04-01");
    let drives = vec![
        drive("TODAY", "2025-04-01", "V"),
        drive("EDGE", "2025-05-01", "V"),
        drive("PAST", "2025-03-31", "V"),
        drive("BEYOND", "2025-05-02", "V"),
    ];

    let upcoming = upcoming_drives(&drives, now, 30);

    let ids: Vec<&str> = upcoming.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["TODAY", "EDGE"]);
}

#[test]
fn upcoming_preserves_input_order_and_is_idempotent() {
    let now = date("2025-04-01");
    let drives = vec![
        drive("B", "2025-04-20", "V"),
        drive("A", "2025-04-05", "V"),
    ];

    let once = upcoming_drives(&drives, now, 30);
    let twice = upcoming_drives(&once, now, 30);

    let ids: Vec<&str> = once.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["B", "A"]);
    assert_eq!(once, twice);
}

#[test]
fn upcoming_skips_unparseable_dates() {
    let now = date("2025-04-01");
    let drives = vec![drive("BAD", "soon", "V"), drive("OK", "2025-04-02", "V")];

    let upcoming = upcoming_drives(&drives, now, 30);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, "OK");
}

#[test]
fn filter_all_is_identity_and_match_is_case_sensitive() {
    let rows = build_report_rows(
        &[
            student("S1", "A", "9th", &[("Covishield", "D1")]),
            student("S2", "B", "9th", &[("Covaxin", "D2")]),
        ],
        &[],
    );

    assert_eq!(filter_by_vaccine(&rows, ALL_VACCINES), rows);
    assert_eq!(filter_by_vaccine(&rows, "Covishield").len(), 1);
    assert!(filter_by_vaccine(&rows, "covishield").is_empty());
}

#[test]
fn distinct_options_sorted_with_all_first_and_placeholder_excluded() {
    let rows = build_report_rows(
        &[
            student("S1", "A", "9th", &[("Covishield", "D1")]),
            student("S2", "B", "9th", &[("Covaxin", "D2")]),
            student("S3", "C", "9th", &[]),
        ],
        &[],
    );

    let options = distinct_vaccine_options(&rows);
    assert_eq!(options, vec!["All", "Covaxin", "Covishield"]);
}

#[test]
fn sort_by_date_is_stable_for_equal_dates() {
    let drives = vec![
        drive("FIRST", "2025-04-10", "V"),
        drive("SECOND", "2025-04-10", "V"),
        drive("EARLY", "2025-04-01", "V"),
    ];

    let asc = sort_by_date(&drives, Direction::Asc);
    let asc_ids: Vec<&str> = asc.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(asc_ids, vec!["EARLY", "FIRST", "SECOND"]);

    let desc = sort_by_date(&drives, Direction::Desc);
    let desc_ids: Vec<&str> = desc.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(desc_ids, vec!["FIRST", "SECOND", "EARLY"]);
}

#[test]
fn sort_by_date_puts_unparseable_dates_last() {
    let drives = vec![
        drive("BAD", "not-a-date", "V"),
        drive("OK", "2025-04-01", "V"),
    ];

    let asc = sort_by_date(&drives, Direction::Asc);
    assert_eq!(asc.last().unwrap().id, "BAD");

    let desc = sort_by_date(&drives, Direction::Desc);
    assert_eq!(desc.last().unwrap().id, "BAD");
}

#[test]
fn paginate_clamps_and_never_panics() {
    let rows: Vec<i32> = (0..12).collect();

    assert_eq!(paginate(&rows, 0, 10), (0..10).collect::<Vec<_>>());
    assert_eq!(paginate(&rows, 1, 10), vec![10, 11]);
    assert!(paginate(&rows, 2, 10).is_empty());
    assert!(paginate(&rows, usize::MAX, 10).is_empty());
    assert!(paginate(&rows, 0, 0).is_empty());

    // page 0 composed with itself returns the same slice
    let page = paginate(&rows, 0, 10);
    assert_eq!(paginate(&page, 0, 10), page);
}

#[test]
fn search_matches_name_class_id_and_vaccines_case_insensitively() {
    let students = vec![
        student("STU2001", "Ananya", "10th", &[("Covishield", "D1")]),
        student("STU2002", "Rahul", "9th", &[("Covaxin", "D2")]),
    ];

    assert_eq!(search_filter(&students, "anan").len(), 1);
    assert_eq!(search_filter(&students, "9TH").len(), 1);
    assert_eq!(search_filter(&students, "stu2001").len(), 1);
    assert_eq!(search_filter(&students, "covaxin").len(), 1);
    assert_eq!(search_filter(&students, "").len(), 2);
    assert!(search_filter(&students, "nobody").is_empty());
}

#[test]
fn class_list_accepts_both_upstream_shapes() {
    let joined: Drive =
        serde_json::from_str(r#"{"id":"D1","applicable_classes":"5, 6 ,7"}"#).unwrap();
    assert_eq!(joined.applicable_classes.to_vec(), vec!["5", "6", "7"]);

    let listed: Drive =
        serde_json::from_str(r#"{"id":"D1","applicable_classes":[" 5 ","6"]}"#).unwrap();
    assert_eq!(listed.applicable_classes.to_vec(), vec!["5", "6"]);
}

#[test]
fn doses_available_accepts_number_or_numeric_string() {
    let num: Drive = serde_json::from_str(r#"{"id":"D1","doses_available":42}"#).unwrap();
    assert_eq!(num.doses_available, 42);

    let text: Drive = serde_json::from_str(r#"{"id":"D1","doses_available":"42"}"#).unwrap();
    assert_eq!(text.doses_available, 42);

    let junk: Drive = serde_json::from_str(r#"{"id":"D1","doses_available":null}"#).unwrap();
    assert_eq!(junk.doses_available, 0);
}

#[test]
fn sparse_student_record_deserializes_with_defaults() {
    let student: Student =
        serde_json::from_str(r#"{"name":"NoId","vaccines":[{"name":"V"}]}"#).unwrap();

    assert_eq!(student.id, "");
    assert_eq!(student.vaccinations[0].drive_id, "");
}
