//! Unified application error type.
//! All modules (loader, query, aggregate, report, cli) return AppError so the
//! error handling stays consistent. Loader failures keep their own type and
//! are carried through unchanged.

use std::io;
use thiserror::Error;

/// Failures raised while turning a tabular source into call records.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: malformed timestamp '{value}'")]
    MalformedTimestamp { row: usize, value: String },

    #[error("row {row}: malformed duration '{value}' in column '{column}'")]
    MalformedDuration {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: unknown call direction '{value}'")]
    UnknownDirection { row: usize, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Loading
    // ---------------------------
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    // ---------------------------
    // Aggregation
    // ---------------------------
    #[error("{0}: no values to aggregate")]
    EmptyInput(String),

    #[error("Invalid histogram boundaries: {0}")]
    InvalidBoundaries(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
