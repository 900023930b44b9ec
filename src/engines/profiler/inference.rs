use crate::config::ProfilingConfig;
use crate::types::{ColumnType, Value};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use std::collections::HashSet;

/// Datetime formats tried in order for text cells.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats; parsed values land at midnight.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
];

pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Calendar view of a cell. Only text cells are date candidates.
pub fn as_datetime(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Text(s) => parse_datetime(s),
        _ => None,
    }
}

/// Date-likeness for type inference: parses AND the year lands strictly
/// inside (1900, 2100), which filters out serial numbers and zip codes
/// that happen to scan as dates.
pub fn is_date_like(value: &Value) -> bool {
    as_datetime(value)
        .map(|parsed| parsed.year() > 1900 && parsed.year() < 2100)
        .unwrap_or(false)
}

/// Distinct values over their display form, so `1` and `"1"` collapse.
pub fn distinct_count(values: &[&Value]) -> usize {
    let mut seen = HashSet::new();
    for value in values {
        seen.insert(value.to_string());
    }
    seen.len()
}

/// Classify a column from its non-missing values.
///
/// The tests apply in a fixed order: numeric, then datetime, then
/// categorical, then text. A column with no usable values is text.
pub fn infer_column_type(non_missing: &[&Value], config: &ProfilingConfig) -> ColumnType {
    if non_missing.is_empty() {
        return ColumnType::Text;
    }

    let numeric_count = non_missing
        .iter()
        .filter(|value| value.as_number().is_some())
        .count();
    if numeric_count as f64 > non_missing.len() as f64 * config.numeric_ratio {
        return ColumnType::Numeric;
    }

    if non_missing.iter().any(|value| is_date_like(value)) {
        return ColumnType::Datetime;
    }

    let distinct = distinct_count(non_missing);
    if (distinct as f64) < non_missing.len() as f64 * config.categorical_ratio {
        return ColumnType::Categorical;
    }

    ColumnType::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(values: &[Value]) -> ColumnType {
        let refs: Vec<&Value> = values.iter().collect();
        infer_column_type(&refs, &ProfilingConfig::default())
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert!(parse_datetime("2023-05-17").is_some());
        assert!(parse_datetime("2023/05/17").is_some());
        assert!(parse_datetime("05/17/2023").is_some());
        assert!(parse_datetime("2023-05-17 08:30:00").is_some());
        assert!(parse_datetime("2023-05-17T08:30:00Z").is_some());
        assert!(parse_datetime("May 17, 2023").is_some());
        assert!(parse_datetime("banana").is_none());
        assert!(parse_datetime("").is_none());
    }

    #[test]
    fn test_date_like_year_window() {
        assert!(is_date_like(&Value::Text("1999-12-31".to_string())));
        // Parses, but the year is outside the accepted window.
        assert!(!is_date_like(&Value::Text("1850-06-01".to_string())));
        assert!(!is_date_like(&Value::Text("2150-06-01".to_string())));
        assert!(!is_date_like(&Value::Number(20230517.0)));
    }

    #[test]
    fn test_numeric_coercions() {
        assert_eq!(Value::Text(" 42.5 ".to_string()).as_number(), Some(42.5));
        assert_eq!(Value::Bool(true).as_number(), Some(1.0));
        assert_eq!(Value::Text("   ".to_string()).as_number(), None);
        assert_eq!(Value::Text("inf".to_string()).as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_numeric_ratio_is_strict() {
        // 4 of 5 values numeric: 4 > 0.8 * 5 = 4 fails, so not numeric;
        // no dates and 5 distinct values, so text.
        let values: Vec<Value> = vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
            Value::Number(4.0),
            Value::Text("n/a".to_string()),
        ];
        assert_eq!(infer(&values), ColumnType::Text);

        // 5 of 6: 5 > 4.8 passes.
        let values: Vec<Value> = vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
            Value::Number(4.0),
            Value::Number(5.0),
            Value::Text("n/a".to_string()),
        ];
        assert_eq!(infer(&values), ColumnType::Numeric);
    }

    #[test]
    fn test_single_date_marks_datetime() {
        let values: Vec<Value> = vec![
            Value::Text("pending".to_string()),
            Value::Text("2023-05-01".to_string()),
            Value::Text("n/a".to_string()),
        ];
        assert_eq!(infer(&values), ColumnType::Datetime);
    }

    #[test]
    fn test_categorical_ratio_is_strict() {
        // 2 distinct of 4: 2 < 2 fails, so text.
        let values: Vec<Value> = vec![
            Value::Text("a".to_string()),
            Value::Text("b".to_string()),
            Value::Text("a".to_string()),
            Value::Text("a".to_string()),
        ];
        assert_eq!(infer(&values), ColumnType::Text);

        // 2 distinct of 5: 2 < 2.5 passes.
        let values: Vec<Value> = vec![
            Value::Text("a".to_string()),
            Value::Text("b".to_string()),
            Value::Text("a".to_string()),
            Value::Text("a".to_string()),
            Value::Text("b".to_string()),
        ];
        assert_eq!(infer(&values), ColumnType::Categorical);
    }

    #[test]
    fn test_empty_column_is_text() {
        assert_eq!(infer(&[]), ColumnType::Text);
    }
}
