//! Heuristic column type detection.
//!
//! Every non-empty value is classified once, in a fixed priority order:
//! numeric, then boolean, then date. A column takes a type when at least
//! [`TYPE_THRESHOLD`] of its non-empty values fall into that category.
//! Because numeric is tried first, `"1"` and `"0"` never count as booleans.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::InferredType;

pub const TYPE_THRESHOLD: f64 = 0.8;

const BOOLEAN_LITERALS: [&str; 8] = ["true", "false", "True", "False", "TRUE", "FALSE", "1", "0"];

// Shape checks keep chrono from accepting single-digit fields or signed years.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static ISO_DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap());
static US_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    Numeric,
    Boolean,
    Date,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeCounts {
    pub valid: usize,
    pub numeric: usize,
    pub boolean: usize,
    pub date: usize,
}

impl TypeCounts {
    pub fn record(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        self.valid += 1;
        match classify_value(value) {
            ValueClass::Numeric => self.numeric += 1,
            ValueClass::Boolean => self.boolean += 1,
            ValueClass::Date => self.date += 1,
            ValueClass::Other => {}
        }
    }

    pub fn resolve(&self) -> InferredType {
        if self.valid == 0 {
            return InferredType::String;
        }

        let threshold = self.valid as f64 * TYPE_THRESHOLD;
        match () {
            _ if self.numeric as f64 >= threshold => InferredType::Numeric,
            _ if self.date as f64 >= threshold => InferredType::Date,
            _ if self.boolean as f64 >= threshold => InferredType::Boolean,
            _ => InferredType::String,
        }
    }
}

pub fn is_numeric(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

pub fn is_boolean(value: &str) -> bool {
    BOOLEAN_LITERALS.contains(&value)
}

/// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or `MM/DD/YYYY`, and a real calendar date.
pub fn is_date_string(value: &str) -> bool {
    if ISO_DATE.is_match(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    }
    if ISO_DATETIME.is_match(value) {
        return NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok();
    }
    if US_DATE.is_match(value) {
        return NaiveDate::parse_from_str(value, "%m/%d/%Y").is_ok();
    }
    false
}

pub fn classify_value(value: &str) -> ValueClass {
    if is_numeric(value) {
        ValueClass::Numeric
    } else if is_boolean(value) {
        ValueClass::Boolean
    } else if is_date_string(value) {
        ValueClass::Date
    } else {
        ValueClass::Other
    }
}

pub fn count_types<S: AsRef<str>>(values: &[S]) -> TypeCounts {
    let mut counts = TypeCounts::default();
    for value in values {
        counts.record(value.as_ref());
    }
    counts
}

pub fn infer_type<S: AsRef<str>>(values: &[S]) -> InferredType {
    if values.is_empty() {
        return InferredType::Unknown;
    }
    count_types(values).resolve()
}
