use crate::models::{NumericStats, StringStats};

/// Values that do not parse, and non-finite ones such as `inf` or `NaN`, are
/// skipped; `None` when nothing usable remains.
pub fn numeric_stats<S: AsRef<str>>(values: &[S]) -> Option<NumericStats> {
    let mut nums: Vec<f64> = values
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| !v.is_empty())
        .filter_map(|v| v.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .collect();

    if nums.is_empty() {
        return None;
    }

    let (min, max, sum) = nums.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), &n| (min.min(n), max.max(n), sum + n),
    );
    let count = nums.len() as f64;
    let mean = sum / count;

    let variance = nums.iter().map(|n| (n - mean).powi(2)).sum::<f64>() / count;

    nums.sort_by(f64::total_cmp);
    let mid = nums.len() / 2;
    let median = if nums.len() % 2 == 0 {
        (nums[mid - 1] + nums[mid]) / 2.0
    } else {
        nums[mid]
    };

    Some(NumericStats {
        min,
        max,
        mean,
        median,
        std_dev: variance.sqrt(),
    })
}

pub fn string_stats<S: AsRef<str>>(values: &[S]) -> Option<StringStats> {
    let (count, total, min_length, max_length) = values
        .iter()
        .map(|v| v.as_ref().len())
        .filter(|&len| len > 0)
        .fold((0usize, 0usize, usize::MAX, 0usize), |(count, total, min, max), len| {
            (count + 1, total + len, min.min(len), max.max(len))
        });

    if count == 0 {
        return None;
    }

    Some(StringStats {
        min_length,
        max_length,
        avg_length: total as f64 / count as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_basic() {
        let stats = numeric_stats(&["1", "2", "3", "4", "5"]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert!((stats.std_dev - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn numeric_even_count_median() {
        let stats = numeric_stats(&["10", "2", "", "4", "8"]).unwrap();
        assert_eq!(stats.median, 6.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 10.0);
    }

    #[test]
    fn numeric_skips_unparsable() {
        let stats = numeric_stats(&["3", "n/a", "", "5"]).unwrap();
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.std_dev, 1.0);
    }

    #[test]
    fn numeric_single_value() {
        let stats = numeric_stats(&["-7.5"]).unwrap();
        assert_eq!(stats.min, stats.max);
        assert_eq!(stats.median, -7.5);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn numeric_nothing_valid() {
        assert!(numeric_stats(&["", ""]).is_none());
        assert!(numeric_stats(&["abc"]).is_none());
    }

    #[test]
    fn numeric_ignores_non_finite_values() {
        let stats = numeric_stats(&["1", "2", "inf", "NaN", "-infinity"]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 2.0);
        assert_eq!(stats.mean, 1.5);
        assert_eq!(stats.median, 1.5);
        assert_eq!(stats.std_dev, 0.5);

        assert!(numeric_stats(&["inf", "NaN"]).is_none());
    }

    #[test]
    fn string_basic() {
        let stats = string_stats(&["a", "bb", "ccc", "dddd"]).unwrap();
        assert_eq!(stats.min_length, 1);
        assert_eq!(stats.max_length, 4);
        assert_eq!(stats.avg_length, 2.5);
    }

    #[test]
    fn string_skips_empty() {
        let stats = string_stats(&["", "xyz", ""]).unwrap();
        assert_eq!(stats.min_length, 3);
        assert_eq!(stats.avg_length, 3.0);
        assert!(string_stats(&["", ""]).is_none());
    }

    #[test]
    fn string_length_is_bytes() {
        let stats = string_stats(&["é"]).unwrap();
        assert_eq!(stats.max_length, 2);
    }
}
