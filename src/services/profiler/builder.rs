use chrono::Utc;
use rayon::prelude::*;

use super::summarizer::summarize_column;
use crate::config::ProfilerConfig;
use crate::models::{ColumnProfile, ColumnarData, DatasetProfile, RawColumn};

pub fn build_profile(file_name: &str, data: &ColumnarData, config: &ProfilerConfig) -> DatasetProfile {
    let start = std::time::Instant::now();
    let row_count = data.row_count;
    let summarize = |column: &RawColumn| -> ColumnProfile {
        summarize_column(&column.name, &column.values, row_count, config.sample_size)
    };

    // Indexed collect keeps source column order on both paths.
    let columns: Vec<ColumnProfile> = if config.parallel {
        data.columns.par_iter().map(summarize).collect()
    } else {
        data.columns.iter().map(summarize).collect()
    };

    tracing::info!(
        "Profiled {} columns x {} rows in {:?} (parallel: {})",
        columns.len(),
        row_count,
        start.elapsed(),
        config.parallel
    );

    DatasetProfile {
        file_name: file_name.to_string(),
        row_count,
        column_count: columns.len(),
        columns,
        processed_time: Utc::now(),
    }
}
