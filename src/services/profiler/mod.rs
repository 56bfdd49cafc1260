pub mod builder;
pub mod inference;
pub mod stats;
pub mod summarizer;

use std::path::Path;

use crate::config::ProfilerConfig;
use crate::error::{ProfileError, Result};
use crate::models::DatasetProfile;
use crate::services::readers;

pub use builder::build_profile;
pub use inference::{infer_type, TypeCounts};
pub use stats::{numeric_stats, string_stats};
pub use summarizer::{count_unique, sample_values, summarize_column};

pub struct Profiler {
    config: ProfilerConfig,
}

impl Profiler {
    pub fn new(config: ProfilerConfig) -> Self {
        Self { config }
    }

    /// Reads `path` and profiles every column. Nothing is returned unless the
    /// whole file was read successfully.
    pub fn profile_file(&self, path: &Path) -> Result<DatasetProfile> {
        if !path.exists() {
            return Err(ProfileError::FileNotFound(path.to_path_buf()));
        }

        tracing::info!("Processing file: {}", path.display());
        let data = readers::extract_columns(path, &self.config)?;
        tracing::debug!(
            "Extracted {} columns, {} rows",
            data.columns.len(),
            data.row_count
        );

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(build_profile(&file_name, &data, &self.config))
    }
}
