use crate::errors::{AppError, AppResult};
use crate::export::model::{exports_to_table, get_headers};
use crate::export::pdf::PdfDocument;
use crate::export::{notify_export_success, ReportExport, PDF_TITLE};
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: the report table under the "Vaccination Report" title.
pub(crate) fn export_pdf(rows: &[ReportExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let table = exports_to_table(rows);

    let mut pdf = PdfDocument::new();
    pdf.write_table(PDF_TITLE, &headers, &table);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
