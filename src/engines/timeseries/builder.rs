use crate::config::ProfilingConfig;
use crate::engines::profiler::inference;
use crate::error::{AnalysisError, Result};
use crate::types::{ColumnInfo, ColumnType, SeriesPoint, Table, TimeSeries};
use std::collections::HashMap;

/// Pair a date column with a value column into an ordered series.
///
/// Rows with an unparseable date or a non-numeric value are dropped. The
/// result is sorted ascending by date, stable over the original row order.
pub fn build_time_series(
    table: &Table,
    date_column: &str,
    value_column: &str,
) -> Result<TimeSeries> {
    let date_index = table.column_index(date_column).ok_or_else(|| {
        AnalysisError::InvalidSelection(format!("Unknown date column: {}", date_column))
    })?;
    let value_index = table.column_index(value_column).ok_or_else(|| {
        AnalysisError::InvalidSelection(format!("Unknown value column: {}", value_column))
    })?;

    let mut points = Vec::new();
    for (row, cells) in table.rows().iter().enumerate() {
        let date = match inference::as_datetime(&cells[date_index]) {
            Some(date) => date,
            None => continue,
        };
        let value = match cells[value_index].as_number() {
            Some(value) => value,
            None => continue,
        };
        points.push(SeriesPoint { date, value, row });
    }

    let dropped = table.height() - points.len();
    if dropped > 0 {
        log::debug!(
            "Dropped {} of {} rows building series {} over {}",
            dropped,
            table.height(),
            value_column,
            date_column
        );
    }

    // Vec::sort_by is stable, so same-date rows keep their original order.
    points.sort_by(|a, b| a.date.cmp(&b.date));

    Ok(TimeSeries {
        date_column: date_column.to_string(),
        value_column: value_column.to_string(),
        points,
    })
}

/// Best-guess date column: the first datetime-typed column in table order,
/// else the first column where a strict majority of its leading non-missing
/// sample parses as dates.
pub fn select_date_column(
    table: &Table,
    profile: &HashMap<String, ColumnInfo>,
    config: &ProfilingConfig,
) -> Option<String> {
    for name in table.columns() {
        let is_datetime = profile
            .get(name)
            .map(|info| info.column_type == ColumnType::Datetime)
            .unwrap_or(false);
        if is_datetime {
            return Some(name.clone());
        }
    }

    for (index, name) in table.columns().iter().enumerate() {
        let sample: Vec<_> = table
            .rows()
            .iter()
            .map(|row| &row[index])
            .filter(|value| !value.is_missing())
            .take(config.date_sample_size)
            .collect();
        if sample.is_empty() {
            continue;
        }
        let parsed = sample
            .iter()
            .filter(|value| inference::as_datetime(value).is_some())
            .count();
        if parsed * 2 > sample.len() {
            return Some(name.clone());
        }
    }

    None
}

/// Best-guess value column: the first numeric column in table order.
pub fn select_value_column(table: &Table, profile: &HashMap<String, ColumnInfo>) -> Option<String> {
    table
        .columns()
        .iter()
        .find(|name| {
            profile
                .get(*name)
                .map(|info| info.column_type == ColumnType::Numeric)
                .unwrap_or(false)
        })
        .cloned()
}
