use serde::Serialize;

/// Placeholder used wherever a vaccination has no resolvable date or vaccine.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VaccinatedFlag {
    Yes,
    No,
}

impl VaccinatedFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            VaccinatedFlag::Yes => "Yes",
            VaccinatedFlag::No => "No",
        }
    }
}

/// One reconciled (student, vaccine-or-none) record.
///
/// A student with vaccinations yields one row per entry; a student with none
/// yields exactly one "No" row with placeholder date and vaccine. Rows are
/// derived per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub student_name: String,
    pub class: String,
    pub vaccinated: VaccinatedFlag,
    pub date: String,
    pub vaccine: String,
}

/// Aggregate dashboard counts. For any snapshot,
/// `vaccinated_students + unvaccinated_students == total_students`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_students: usize,
    pub vaccinated_students: usize,
    pub unvaccinated_students: usize,
}
