use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, TimeDelta, Timelike};

use crate::config::ProfilerConfig;
use crate::error::{ProfileError, Result};
use crate::models::{ColumnarData, RawColumn};

/// Profiles one worksheet: `config.sheet` when set, otherwise the first one.
/// The first row of the sheet is the header.
pub fn read_workbook(path: &Path, config: &ProfilerConfig) -> Result<ColumnarData> {
    let start = std::time::Instant::now();
    tracing::info!("Opening workbook {}", path.display());

    let mut workbook = open_workbook_auto(path).map_err(|e| {
        tracing::error!("Failed to open workbook: {}", e);
        ProfileError::Workbook(format!("Failed to open workbook: {}", e))
    })?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    tracing::info!("Found {} sheets: {:?}", sheet_names.len(), sheet_names);

    let sheet_name = match &config.sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|name| *name == wanted)
            .cloned()
            .ok_or_else(|| ProfileError::Workbook(format!("Sheet not found: {}", wanted)))?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ProfileError::EmptyInput("No sheets found in workbook".to_string()))?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let header = rows
        .next()
        .ok_or_else(|| ProfileError::EmptyInput(format!("Sheet {} is empty", sheet_name)))?;

    let mut existing_names = HashSet::new();
    let mut columns: Vec<RawColumn> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| RawColumn::new(header_name(&render_cell(cell), idx, &mut existing_names)))
        .collect();

    let mut row_count: u64 = 0;
    for row in rows {
        row_count += 1;
        for (column, cell) in columns.iter_mut().zip(row.iter()) {
            column.values.push(render_cell(cell));
        }
    }

    tracing::info!(
        "Read sheet {} ({} rows x {} columns) in {:?}",
        sheet_name,
        row_count,
        columns.len(),
        start.elapsed()
    );

    Ok(ColumnarData { columns, row_count })
}

/// Blank header cells become `column_<n>` and repeated names get a numeric suffix.
pub fn header_name(raw: &str, index: usize, existing_names: &mut HashSet<String>) -> String {
    let trimmed = raw.trim();
    let base_name = if trimmed.is_empty() {
        format!("column_{}", index + 1)
    } else {
        trimmed.to_string()
    };

    let mut name = base_name.clone();
    let mut counter = 1;
    while !existing_names.insert(name.clone()) {
        name = format!("{}_{}", base_name, counter);
        counter += 1;
    }

    name
}

pub fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(d) => excel_serial_to_string(d.as_f64()),
        other => other.to_string(),
    }
}

/// Excel serials count days from 1899-12-30. Whole days render as `YYYY-MM-DD`.
/// Serials outside chrono's range fall back to the plain number.
pub fn excel_serial_to_string(serial: f64) -> String {
    if !serial.is_finite() {
        return serial.to_string();
    }
    let millis = (serial * 86_400_000.0).round() as i64;
    let timestamp = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .zip(TimeDelta::try_milliseconds(millis))
        .and_then(|(base, offset)| base.checked_add_signed(offset));

    match timestamp {
        Some(ts) if ts.num_seconds_from_midnight() == 0 => ts.format("%Y-%m-%d").to_string(),
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => serial.to_string(),
    }
}
