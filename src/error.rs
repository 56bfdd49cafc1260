use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unsupported file type: {0} (supported: .csv, .parquet, .xlsx, .xlsm, .xls, .ods)")]
    UnsupportedFileType(String),

    #[error("unsupported output format: {0} (supported: table, json, csv)")]
    UnsupportedFormat(String),

    #[error("malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] polars::prelude::PolarsError),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<calamine::Error> for ProfileError {
    fn from(err: calamine::Error) -> Self {
        ProfileError::Workbook(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
