use std::collections::HashSet;

use super::inference::infer_type;
use super::stats::{numeric_stats, string_stats};
use crate::models::{ColumnProfile, ColumnStats, InferredType, SampleValues};

/// Explicit empty cells only. Cells absent from a short row are not counted.
pub fn count_missing<S: AsRef<str>>(values: &[S]) -> u64 {
    values.iter().filter(|v| v.as_ref().is_empty()).count() as u64
}

/// Percentage of `total_rows`; `0.0` for an empty dataset.
pub fn missing_percentage(missing: u64, total_rows: u64) -> f64 {
    if total_rows == 0 {
        return 0.0;
    }
    missing as f64 / total_rows as f64 * 100.0
}

pub fn count_unique<S: AsRef<str>>(values: &[S]) -> u64 {
    values
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| !v.is_empty())
        .collect::<HashSet<&str>>()
        .len() as u64
}

/// First `max_samples` distinct non-empty values, in the order they appear.
pub fn sample_values<S: AsRef<str>>(values: &[S], max_samples: usize) -> SampleValues {
    let mut samples = SampleValues::new();
    if max_samples == 0 {
        return samples;
    }

    let mut seen = HashSet::new();
    for value in values.iter().map(|v| v.as_ref()) {
        if value.is_empty() || !seen.insert(value) {
            continue;
        }
        samples.push(value.to_string());
        if samples.len() >= max_samples {
            break;
        }
    }
    samples
}

pub fn summarize_column<S: AsRef<str>>(
    name: &str,
    values: &[S],
    total_rows: u64,
    max_samples: usize,
) -> ColumnProfile {
    let missing_count = count_missing(values);
    let inferred_type = infer_type(values);

    let stats = match inferred_type {
        InferredType::Numeric => numeric_stats(values).map(ColumnStats::Numeric),
        InferredType::String => string_stats(values).map(ColumnStats::Text),
        _ => None,
    };

    ColumnProfile {
        name: name.to_string(),
        inferred_type,
        missing_count,
        missing_pct: missing_percentage(missing_count, total_rows),
        unique_count: count_unique(values),
        stats,
        sample_values: sample_values(values, max_samples),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_excludes_empty() {
        assert_eq!(count_unique(&["a", "b", "a", "c", "b", ""]), 3);
        assert_eq!(count_unique(&["", ""]), 0);
    }

    #[test]
    fn samples_are_distinct_and_ordered() {
        let samples = sample_values(&["a", "b", "c", "d", "e", "f", "g"], 3);
        assert_eq!(samples.as_slice(), ["a", "b", "c"]);

        let samples = sample_values(&["", "x", "x", "y", "", "x", "z"], 5);
        assert_eq!(samples.as_slice(), ["x", "y", "z"]);
    }

    #[test]
    fn samples_with_zero_limit() {
        assert!(sample_values(&["a"], 0).is_empty());
    }

    #[test]
    fn missing_percentage_against_total_rows() {
        assert_eq!(missing_percentage(1, 4), 25.0);
        assert_eq!(missing_percentage(0, 0), 0.0);
    }

    #[test]
    fn numeric_column_profile() {
        let profile = summarize_column("amount", &["10", "", "30", "20", "10"], 5, 5);
        assert_eq!(profile.inferred_type, InferredType::Numeric);
        assert_eq!(profile.missing_count, 1);
        assert_eq!(profile.missing_pct, 20.0);
        assert_eq!(profile.unique_count, 3);
        assert_eq!(profile.sample_values.as_slice(), ["10", "30", "20"]);

        let stats = profile.numeric_stats().unwrap();
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.mean, 17.5);
        assert_eq!(stats.median, 15.0);
        assert!(profile.string_stats().is_none());
    }

    #[test]
    fn string_column_profile() {
        let profile = summarize_column("city", &["Lisbon", "Porto", ""], 3, 5);
        assert_eq!(profile.inferred_type, InferredType::String);
        let stats = profile.string_stats().unwrap();
        assert_eq!(stats.min_length, 5);
        assert_eq!(stats.max_length, 6);
        assert!(profile.numeric_stats().is_none());
    }

    #[test]
    fn all_empty_column_has_no_stats() {
        let profile = summarize_column("notes", &["", "", ""], 3, 5);
        assert_eq!(profile.inferred_type, InferredType::String);
        assert_eq!(profile.missing_count, 3);
        assert_eq!(profile.missing_pct, 100.0);
        assert_eq!(profile.unique_count, 0);
        assert!(profile.stats.is_none());
        assert!(profile.sample_values.is_empty());
    }

    #[test]
    fn date_and_boolean_columns_have_no_stats() {
        let dates = summarize_column("day", &["2024-01-01", "2024-01-02"], 2, 5);
        assert_eq!(dates.inferred_type, InferredType::Date);
        assert!(dates.stats.is_none());

        let flags = summarize_column("active", &["true", "FALSE"], 2, 5);
        assert_eq!(flags.inferred_type, InferredType::Boolean);
        assert!(flags.stats.is_none());
    }

    #[test]
    fn short_rows_are_not_counted_missing() {
        // Four rows in the source, but the last row had no cell for this column.
        let profile = summarize_column("tail", &["a", "", "b"], 4, 5);
        assert_eq!(profile.missing_count, 1);
        assert_eq!(profile.missing_pct, 25.0);
    }

    #[test]
    fn empty_column_is_unknown() {
        let values: Vec<String> = Vec::new();
        let profile = summarize_column("ghost", &values, 0, 5);
        assert_eq!(profile.inferred_type, InferredType::Unknown);
        assert_eq!(profile.missing_pct, 0.0);
        assert!(profile.stats.is_none());
    }
}
