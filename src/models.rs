use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::config::DEFAULT_SAMPLE_SIZE;
use crate::error::ProfileError;

pub type SampleValues = SmallVec<[String; DEFAULT_SAMPLE_SIZE]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredType {
    Numeric,
    Date,
    Boolean,
    String,
    Unknown,
}

impl InferredType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InferredType::Numeric => "numeric",
            InferredType::Date => "date",
            InferredType::Boolean => "boolean",
            InferredType::String => "string",
            InferredType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Lengths are measured in bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringStats {
    pub min_length: usize,
    pub max_length: usize,
    pub avg_length: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Text(StringStats),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ColumnRecord", try_from = "ColumnRecord")]
pub struct ColumnProfile {
    pub name: String,
    pub inferred_type: InferredType,
    pub missing_count: u64,
    pub missing_pct: f64,
    pub unique_count: u64,
    pub stats: Option<ColumnStats>,
    pub sample_values: SampleValues,
}

impl ColumnProfile {
    pub fn numeric_stats(&self) -> Option<&NumericStats> {
        match &self.stats {
            Some(ColumnStats::Numeric(stats)) => Some(stats),
            _ => None,
        }
    }

    pub fn string_stats(&self) -> Option<&StringStats> {
        match &self.stats {
            Some(ColumnStats::Text(stats)) => Some(stats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub file_name: String,
    pub row_count: u64,
    pub column_count: usize,
    pub columns: Vec<ColumnProfile>,
    pub processed_time: DateTime<Utc>,
}

impl DatasetProfile {
    /// Columns with at least one missing cell, and the missing cells summed over them.
    pub fn missing_totals(&self) -> (usize, u64) {
        self.columns
            .iter()
            .filter(|col| col.missing_count > 0)
            .fold((0, 0), |(cols, cells), col| (cols + 1, cells + col.missing_count))
    }

    pub fn total_cells(&self) -> u64 {
        self.row_count * self.column_count as u64
    }
}

/// Flat wire shape of a [`ColumnProfile`]. Every statistic is always written,
/// as `null` when the column has none.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ColumnRecord {
    name: String,
    inferred_type: InferredType,
    missing_count: u64,
    missing_pct: f64,
    unique_count: u64,
    min: Option<f64>,
    max: Option<f64>,
    mean: Option<f64>,
    median: Option<f64>,
    std_dev: Option<f64>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    avg_length: Option<f64>,
    #[serde(default)]
    sample_values: SampleValues,
}

impl From<ColumnProfile> for ColumnRecord {
    fn from(profile: ColumnProfile) -> Self {
        let numeric = profile.numeric_stats().copied();
        let text = profile.string_stats().copied();

        ColumnRecord {
            name: profile.name,
            inferred_type: profile.inferred_type,
            missing_count: profile.missing_count,
            missing_pct: profile.missing_pct,
            unique_count: profile.unique_count,
            min: numeric.map(|s| s.min),
            max: numeric.map(|s| s.max),
            mean: numeric.map(|s| s.mean),
            median: numeric.map(|s| s.median),
            std_dev: numeric.map(|s| s.std_dev),
            min_length: text.map(|s| s.min_length),
            max_length: text.map(|s| s.max_length),
            avg_length: text.map(|s| s.avg_length),
            sample_values: profile.sample_values,
        }
    }
}

impl TryFrom<ColumnRecord> for ColumnProfile {
    type Error = ProfileError;

    fn try_from(record: ColumnRecord) -> Result<Self, Self::Error> {
        let numeric = match (record.min, record.max, record.mean, record.median, record.std_dev) {
            (Some(min), Some(max), Some(mean), Some(median), Some(std_dev)) => Some(NumericStats {
                min,
                max,
                mean,
                median,
                std_dev,
            }),
            (None, None, None, None, None) => None,
            _ => {
                return Err(ProfileError::InvalidProfile(format!(
                    "column '{}' has incomplete numeric statistics",
                    record.name
                )))
            }
        };

        let text = match (record.min_length, record.max_length, record.avg_length) {
            (Some(min_length), Some(max_length), Some(avg_length)) => Some(StringStats {
                min_length,
                max_length,
                avg_length,
            }),
            (None, None, None) => None,
            _ => {
                return Err(ProfileError::InvalidProfile(format!(
                    "column '{}' has incomplete string statistics",
                    record.name
                )))
            }
        };

        let stats = match (numeric, text, record.inferred_type) {
            (Some(stats), None, InferredType::Numeric) => Some(ColumnStats::Numeric(stats)),
            (None, Some(stats), InferredType::String) => Some(ColumnStats::Text(stats)),
            (None, None, _) => None,
            _ => {
                return Err(ProfileError::InvalidProfile(format!(
                    "column '{}' carries statistics that do not match type {}",
                    record.name, record.inferred_type
                )))
            }
        };

        Ok(ColumnProfile {
            name: record.name,
            inferred_type: record.inferred_type,
            missing_count: record.missing_count,
            missing_pct: record.missing_pct,
            unique_count: record.unique_count,
            stats,
            sample_values: record.sample_values,
        })
    }
}

/// One column as handed over by a reader: cells rendered as strings, nulls as `""`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawColumn {
    pub name: String,
    pub values: Vec<String>,
}

impl RawColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }
}

/// Normalized output of every reader. `row_count` is authoritative and may
/// exceed a column's `values.len()` when the source had short rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnarData {
    pub columns: Vec<RawColumn>,
    pub row_count: u64,
}
