//! Presentation of aggregate results.
//!
//! Every analysis ends as one or more `ReportTable`s: the console prints them
//! as aligned text and `export` writes them to CSV, JSON or XLSX.

pub mod tables;

use crate::utils::table::Table;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new<S: AsRef<str>>(title: impl Into<String>, headers: &[S]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows.push(row.into_iter().map(|c| c.to_string()).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup by row label (first column) and header.
    pub fn cell(&self, row_label: &str, header: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == header)?;
        self.rows
            .iter()
            .find(|r| r.first().map(String::as_str) == Some(row_label))
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    pub fn render_text(&self) -> String {
        let mut table = Table::with_headers(self.headers.as_slice());
        for row in &self.rows {
            table.add_row(row.clone());
        }
        table.render()
    }
}

/// Write tables as text, one titled block each.
pub fn write_text<W: Write>(out: &mut W, tables: &[ReportTable]) -> io::Result<()> {
    for t in tables {
        writeln!(out, "\n=== {} ===", t.title)?;
        if t.is_empty() {
            writeln!(out, "(no data)")?;
        } else {
            write!(out, "{}", t.render_text())?;
        }
    }
    Ok(())
}
