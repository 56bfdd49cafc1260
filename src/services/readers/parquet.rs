use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::Result;
use crate::models::{ColumnarData, RawColumn};

pub fn read_parquet(path: &Path) -> Result<ColumnarData> {
    let start = std::time::Instant::now();
    tracing::info!("Opening Parquet file {}", path.display());

    let file = File::open(path)?;
    let df = ParquetReader::new(file).finish().map_err(|e| {
        tracing::error!("Failed to read Parquet file: {}", e);
        e
    })?;

    tracing::info!(
        "Read {} rows x {} columns in {:?}",
        df.height(),
        df.width(),
        start.elapsed()
    );
    Ok(dataframe_to_columns(&df))
}

pub fn dataframe_to_columns(df: &DataFrame) -> ColumnarData {
    ColumnarData {
        columns: df.get_columns().iter().map(series_to_column).collect(),
        row_count: df.height() as u64,
    }
}

fn series_to_column(series: &Series) -> RawColumn {
    let values = match series.cast(&DataType::String) {
        Ok(cast) => match cast.str() {
            Ok(ca) => ca
                .into_iter()
                .map(|v| v.map(|s| s.to_string()).unwrap_or_default())
                .collect(),
            Err(_) => render_values(series),
        },
        Err(e) => {
            tracing::debug!(
                "Column {} cannot be cast to string ({}), rendering values",
                series.name(),
                e
            );
            render_values(series)
        }
    };

    RawColumn {
        name: series.name().to_string(),
        values,
    }
}

fn render_values(series: &Series) -> Vec<String> {
    (0..series.len())
        .map(|idx| match series.get(idx) {
            Ok(AnyValue::Null) => String::new(),
            Ok(AnyValue::String(s)) => s.to_string(),
            Ok(value) => value.to_string(),
            Err(e) => {
                tracing::warn!("Error getting value at row {}: {}", idx, e);
                String::new()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nulls_as_empty_strings() {
        let df = df!(
            "id" => &[Some(1i64), None, Some(3)],
            "label" => &[Some("a"), Some("b"), None],
            "flag" => &[true, false, true],
        )
        .unwrap();

        let data = dataframe_to_columns(&df);
        assert_eq!(data.row_count, 3);
        assert_eq!(data.columns[0].name, "id");
        assert_eq!(data.columns[0].values, ["1", "", "3"]);
        assert_eq!(data.columns[1].values, ["a", "b", ""]);
        assert_eq!(data.columns[2].values, ["true", "false", "true"]);
    }
}
