use crate::engine::{build_report_rows, filter_by_vaccine};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ReportExport};
use crate::sources;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Reconcile, filter and write the report to `file`.
    ///
    /// The export always covers the full filtered row set, never a page slice.
    /// Empty sources degrade to an empty (but well-formed) output file.
    pub fn export(
        students_file: &Path,
        drives_file: &Path,
        format: &ExportFormat,
        file: &str,
        vaccine: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let students = sources::load_students(students_file);
        let drives = sources::load_drives(drives_file);

        let rows = build_report_rows(&students, &drives);
        let rows = filter_by_vaccine(&rows, vaccine);

        if rows.is_empty() {
            warning("No report rows for the selected filter; exporting an empty report.");
        }

        let exports: Vec<ReportExport> = rows.iter().map(ReportExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&exports, path)?,
            ExportFormat::Json => export_json(&exports, path)?,
            ExportFormat::Xlsx => export_xlsx(&exports, path)?,
            ExportFormat::Pdf => export_pdf(&exports, path)?,
        }

        Ok(())
    }
}
