// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::report::ReportTable;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed array of `{title, headers, rows}` objects.
pub(crate) fn export_json(tables: &[ReportTable], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(tables)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// All tables in one file: a title line, the header row and the rows, with a
/// blank line between tables.
pub(crate) fn export_csv(tables: &[ReportTable], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    let write_err = |e: csv::Error| AppError::Export(format!("CSV write error: {e}"));

    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            wtr.write_record([""]).map_err(write_err)?;
        }
        wtr.write_record([table.title.as_str()]).map_err(write_err)?;
        wtr.write_record(&table.headers).map_err(write_err)?;
        for row in &table.rows {
            wtr.write_record(row).map_err(write_err)?;
        }
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
