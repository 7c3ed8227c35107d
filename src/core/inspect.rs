//! Column discovery on a raw export, before any typing or scoping.

use crate::aggregate::count_values;
use crate::errors::{AppResult, LoadError};
use crate::loader::ColumnInventory;
use crate::report::ReportTable;
use crate::report::tables::value_counts_table;
use std::path::Path;

pub struct InspectLogic;

impl InspectLogic {
    /// Column list, row count and the first `preview` rows; with `column`, also
    /// the raw value counts of that column.
    pub fn tables(
        path: &Path,
        preview: usize,
        column: Option<&str>,
    ) -> AppResult<Vec<ReportTable>> {
        let inventory = ColumnInventory::from_path(path)?;
        Self::from_inventory(&inventory, preview, column)
    }

    pub fn from_inventory(
        inventory: &ColumnInventory,
        preview: usize,
        column: Option<&str>,
    ) -> AppResult<Vec<ReportTable>> {
        let mut overview = ReportTable::new("File overview", &["Metric", "Value"]);
        overview.push(&["Rows".to_string(), inventory.row_count().to_string()]);
        overview.push(&["Columns".to_string(), inventory.column_count().to_string()]);

        let mut columns = ReportTable::new("Columns", &["#", "Column"]);
        for (i, h) in inventory.headers.iter().enumerate() {
            columns.push(&[(i + 1).to_string(), h.clone()]);
        }

        let mut rows =
            ReportTable::new(format!("First {preview} rows"), inventory.headers.as_slice());
        for row in inventory.preview(preview) {
            rows.push(row);
        }

        let mut tables = vec![overview, columns, rows];

        if let Some(name) = column {
            let values = inventory
                .column(name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))?;
            let freq = count_values(values);
            tables.push(value_counts_table(
                &format!("Values of {name}"),
                name,
                &freq,
                |v: &&str| if v.is_empty() { "(empty)".to_string() } else { v.to_string() },
            ));
        }

        Ok(tables)
    }
}
