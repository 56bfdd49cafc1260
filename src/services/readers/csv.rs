use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ErrorKind, ReaderBuilder};

use crate::config::ProfilerConfig;
use crate::error::{ProfileError, Result};
use crate::models::{ColumnarData, RawColumn};

pub fn read_csv(path: &Path, config: &ProfilerConfig) -> Result<ColumnarData> {
    tracing::info!("Opening CSV file {}", path.display());
    let file = File::open(path)?;
    read_csv_from(file, config)
}

/// The first record is the header. Unless `config.flexible` is set, a record
/// with a different field count is a [`ProfileError::MalformedRow`]. In
/// flexible mode short records only contribute the cells they have and long
/// records are cut to the header width. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD rather than failing the file.
pub fn read_csv_from<R: Read>(input: R, config: &ProfilerConfig) -> Result<ColumnarData> {
    let start = std::time::Instant::now();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter)
        .flexible(config.flexible)
        .from_reader(input);

    let headers = reader.byte_headers().map_err(malformed)?.clone();
    if headers.is_empty() {
        return Err(ProfileError::EmptyInput("CSV file has no header row".to_string()));
    }

    let mut columns: Vec<RawColumn> = headers.iter().map(|h| RawColumn::new(lossy(h))).collect();
    let mut row_count: u64 = 0;
    let mut record = ByteRecord::new();

    while reader.read_byte_record(&mut record).map_err(malformed)? {
        row_count += 1;
        for (column, value) in columns.iter_mut().zip(record.iter()) {
            column.values.push(lossy(value));
        }
    }

    tracing::info!(
        "Read {} rows x {} columns in {:?}",
        row_count,
        columns.len(),
        start.elapsed()
    );

    Ok(ColumnarData { columns, row_count })
}

fn lossy(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

fn malformed(err: csv::Error) -> ProfileError {
    match err.kind() {
        ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => ProfileError::MalformedRow {
            line: pos.as_ref().map(|p| p.line()).unwrap_or_default(),
            expected: *expected_len as usize,
            found: *len as usize,
        },
        _ => ProfileError::Csv(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str, config: &ProfilerConfig) -> Result<ColumnarData> {
        read_csv_from(input.as_bytes(), config)
    }

    #[test]
    fn reads_columns_in_order() {
        let data = read(
            "id,name,score\n1,ann,9.5\n2,,7\n3,\"dee, jr\",\n",
            &ProfilerConfig::default(),
        )
        .unwrap();

        assert_eq!(data.row_count, 3);
        let names: Vec<&str> = data.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "score"]);
        assert_eq!(data.columns[1].values, ["ann", "", "dee, jr"]);
        assert_eq!(data.columns[2].values, ["9.5", "7", ""]);
    }

    #[test]
    fn header_only_file_has_zero_rows() {
        let data = read("a,b\n", &ProfilerConfig::default()).unwrap();
        assert_eq!(data.row_count, 0);
        assert_eq!(data.columns.len(), 2);
        assert!(data.columns.iter().all(|c| c.values.is_empty()));
    }

    #[test]
    fn empty_file_is_an_error() {
        let err = read("", &ProfilerConfig::default()).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyInput(_)));
    }

    #[test]
    fn ragged_rows_are_rejected_by_default() {
        let err = read("a,b,c\n1,2,3\n4,5\n", &ProfilerConfig::default()).unwrap_err();
        match err {
            ProfileError::MalformedRow {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn flexible_mode_keeps_short_rows_short() {
        let config = ProfilerConfig {
            flexible: true,
            ..ProfilerConfig::default()
        };
        let data = read("a,b,c\n1,2,3\n4,5\n6,7,8,9\n", &config).unwrap();

        assert_eq!(data.row_count, 3);
        assert_eq!(data.columns[0].values, ["1", "4", "6"]);
        assert_eq!(data.columns[2].values, ["3", "8"]);
    }

    #[test]
    fn latin1_bytes_are_replaced_not_rejected() {
        let input: &[u8] = b"city,pop\nS\xe3o Paulo,12\nLisboa,0.5\n";
        let data = read_csv_from(input, &ProfilerConfig::default()).unwrap();

        assert_eq!(data.row_count, 2);
        assert_eq!(data.columns[0].values, ["S\u{FFFD}o Paulo", "Lisboa"]);
        assert_eq!(data.columns[1].values, ["12", "0.5"]);
    }

    #[test]
    fn custom_delimiter() {
        let config = ProfilerConfig {
            delimiter: b';',
            ..ProfilerConfig::default()
        };
        let data = read("x;y\n1,5;2\n", &config).unwrap();
        assert_eq!(data.columns[0].values, ["1,5"]);
        assert_eq!(data.columns[1].values, ["2"]);
    }
}
