pub mod drive;
pub mod report;
pub mod student;

pub use drive::{ClassList, Drive};
pub use report::{DashboardStats, ReportRow, VaccinatedFlag, PLACEHOLDER};
pub use student::{Student, Vaccination};
