use crate::models::ReportRow;
use serde::Serialize;

/// Title drawn above the table in the PDF variant.
pub const PDF_TITLE: &str = "Vaccination Report";

/// Flat export record with the human-readable column names. The serde renames
/// drive the CSV/JSON headers; the same names feed the XLSX and PDF tables so
/// every format shares one header contract.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    #[serde(rename = "Student Name")]
    pub student_name: String,

    #[serde(rename = "Class")]
    pub class: String,

    #[serde(rename = "Vaccinated Status")]
    pub vaccinated: String,

    #[serde(rename = "Date of Vaccination")]
    pub date: String,

    #[serde(rename = "Vaccine Name")]
    pub vaccine: String,
}

impl From<&ReportRow> for ReportExport {
    fn from(row: &ReportRow) -> Self {
        Self {
            student_name: row.student_name.clone(),
            class: row.class.clone(),
            vaccinated: row.vaccinated.as_str().to_string(),
            date: row.date.clone(),
            vaccine: row.vaccine.clone(),
        }
    }
}

/// Header set for every export format, in the contract order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Student Name",
        "Class",
        "Vaccinated Status",
        "Date of Vaccination",
        "Vaccine Name",
    ]
}

pub(crate) fn export_to_cells(r: &ReportExport) -> Vec<String> {
    vec![
        r.student_name.clone(),
        r.class.clone(),
        r.vaccinated.clone(),
        r.date.clone(),
        r.vaccine.clone(),
    ]
}

pub(crate) fn exports_to_table(rows: &[ReportExport]) -> Vec<Vec<String>> {
    rows.iter().map(export_to_cells).collect()
}
