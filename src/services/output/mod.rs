pub mod csv;
pub mod json;
pub mod table;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{ProfileError, Result};
use crate::models::DatasetProfile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ProfileError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ProfileError::UnsupportedFormat(s.to_string())),
        }
    }
}

pub fn render<W: Write>(profile: &DatasetProfile, format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => table::write_table(profile, writer),
        OutputFormat::Json => json::write_json(profile, writer),
        OutputFormat::Csv => csv::write_csv(profile, writer),
    }
}

/// Two decimals, or `N/A` when the statistic is absent.
pub fn format_float(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}
