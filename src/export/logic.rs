// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::report::ReportTable;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// Writes finished report tables to disk.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `tables` as `format` to `file`.
    ///
    /// An existing file is replaced only with `force` or after confirmation.
    pub fn export(
        tables: &[ReportTable],
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;
        debug!(format = format.as_str(), tables = tables.len(), "exporting report");

        if tables.iter().all(ReportTable::is_empty) {
            warning("No data in the selected scope; writing empty tables.");
        }

        match format {
            ExportFormat::Csv => export_csv(tables, file),
            ExportFormat::Json => export_json(tables, file),
            ExportFormat::Xlsx => export_xlsx(tables, file),
        }
    }
}
