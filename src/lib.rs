//! Dataset profiling for CSV, Parquet and Excel files.
//!
//! A file is read into string-rendered columns ([`models::ColumnarData`]),
//! each column is typed and summarized, and the resulting
//! [`models::DatasetProfile`] is rendered as a table, JSON or CSV.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::{load_config, ProfilerConfig};
pub use error::{ProfileError, Result};
pub use models::{ColumnProfile, ColumnStats, DatasetProfile, InferredType};
pub use services::output::{render, OutputFormat};
pub use services::profiler::Profiler;
