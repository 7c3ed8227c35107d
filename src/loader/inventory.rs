//! Raw column inventory of an export, before any typing.
//! Used to discover which columns a file carries and what values they hold.

use crate::errors::LoadError;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct ColumnInventory {
    pub headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl ColumnInventory {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// First `n` rows, padded to the header width.
    pub fn preview(&self, n: usize) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .take(n)
            .map(|r| {
                (0..self.headers.len())
                    .map(|i| r.get(i).unwrap_or("").to_string())
                    .collect()
            })
            .collect()
    }

    /// Raw values of one column, `None` when the header is absent.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(idx).map(str::trim).unwrap_or(""))
                .collect(),
        )
    }
}
