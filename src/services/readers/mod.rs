//! Extraction of raw, string-rendered columns from supported file formats.
//!
//! Every reader produces a [`ColumnarData`]: one [`RawColumn`](crate::models::RawColumn)
//! per source column, in source order, with nulls rendered as empty strings.

pub mod csv;
pub mod excel;
pub mod parquet;

use std::path::Path;

use crate::config::ProfilerConfig;
use crate::error::{ProfileError, Result};
use crate::models::ColumnarData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Parquet,
    Workbook,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "csv" => Ok(SourceKind::Csv),
            "parquet" => Ok(SourceKind::Parquet),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(SourceKind::Workbook),
            "" => Err(ProfileError::UnsupportedFileType("(no extension)".to_string())),
            other => Err(ProfileError::UnsupportedFileType(format!(".{other}"))),
        }
    }
}

pub fn extract_columns(path: &Path, config: &ProfilerConfig) -> Result<ColumnarData> {
    match SourceKind::from_path(path)? {
        SourceKind::Csv => csv::read_csv(path, config),
        SourceKind::Parquet => parquet::read_parquet(path),
        SourceKind::Workbook => excel::read_workbook(path, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_extension() {
        assert_eq!(SourceKind::from_path(Path::new("a/b.csv")).unwrap(), SourceKind::Csv);
        assert_eq!(SourceKind::from_path(Path::new("b.CSV")).unwrap(), SourceKind::Csv);
        assert_eq!(
            SourceKind::from_path(Path::new("sales.parquet")).unwrap(),
            SourceKind::Parquet
        );
        assert_eq!(
            SourceKind::from_path(Path::new("report.XLSX")).unwrap(),
            SourceKind::Workbook
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        let err = SourceKind::from_path(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, ProfileError::UnsupportedFileType(ref ext) if ext == ".txt"));

        let err = SourceKind::from_path(Path::new("Makefile")).unwrap_err();
        assert!(matches!(err, ProfileError::UnsupportedFileType(_)));
    }
}
