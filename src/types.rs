use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{AnalysisError, Result};

/// A single table cell.
///
/// The scalar set is closed: anything a record can hold is one of these
/// variants, so every analysis can match exhaustively instead of sniffing
/// ad-hoc runtime types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Missing means null or the exact empty string.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric view of the cell, if it has one.
    ///
    /// Booleans coerce to 1/0, text parses after trimming. Non-finite
    /// results are rejected so NaN never enters a computation.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// In-memory table: an ordered list of column names plus dense rows.
///
/// Column order is the key order of the first record; keys absent from a
/// record are filled with `Value::Null`, so missing data is data, not an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from records, each an ordered list of (column, value)
    /// pairs. Columns are the union of all keys, first-seen order.
    pub fn from_records<I, R>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (String, Value)>,
    {
        let mut columns: Vec<String> = Vec::new();
        let mut raw: Vec<HashMap<String, Value>> = Vec::new();

        for record in records {
            let mut row = HashMap::new();
            for (key, value) in record {
                if !columns.contains(&key) {
                    columns.push(key.clone());
                }
                row.insert(key, value);
            }
            raw.push(row);
        }

        let rows = raw
            .into_iter()
            .map(|mut row| {
                columns
                    .iter()
                    .map(|column| row.remove(column).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(AnalysisError::DataLoading(format!(
                "Row has {} cells, table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Iterate a column top to bottom, if it exists.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Value>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }
}

/// Inferred semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Categorical,
    Datetime,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Categorical => "categorical",
            ColumnType::Datetime => "datetime",
            ColumnType::Text => "text",
        };
        f.pad(name)
    }
}

/// Shape label assigned to a numeric sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionLabel {
    Normal,
    #[serde(rename = "Right-skewed")]
    RightSkewed,
    #[serde(rename = "Left-skewed")]
    LeftSkewed,
    Exponential,
    Unknown,
    #[serde(rename = "Insufficient data")]
    InsufficientData,
}

impl fmt::Display for DistributionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistributionLabel::Normal => "Normal",
            DistributionLabel::RightSkewed => "Right-skewed",
            DistributionLabel::LeftSkewed => "Left-skewed",
            DistributionLabel::Exponential => "Exponential",
            DistributionLabel::Unknown => "Unknown",
            DistributionLabel::InsufficientData => "Insufficient data",
        };
        f.pad(name)
    }
}

/// Per-column profile snapshot.
///
/// Numeric-only fields stay `None` for non-numeric columns and for numeric
/// columns without a single usable value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: ColumnType,
    pub unique_values: usize,
    pub missing_count: usize,
    pub missing_percentage: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std: Option<f64>,
    pub distribution: Option<DistributionLabel>,
    pub outliers: Option<Vec<f64>>,
}

/// One observation in a time series, with the row it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDateTime,
    pub value: f64,
    pub row: usize,
}

/// Date/value pairs in ascending date order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeries {
    pub date_column: String,
    pub value_column: String,
    pub points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDateTime> {
        self.points.iter().map(|point| point.date).collect()
    }
}

/// Additive decomposition aligned index-for-index with the input series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub dates: Vec<NaiveDateTime>,
    pub trend: Vec<f64>,
    pub seasonal: Vec<f64>,
    pub residual: Vec<f64>,
}

/// Point forecast with a symmetric confidence band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    pub dates: Vec<NaiveDateTime>,
    pub forecast: Vec<f64>,
    pub lower_bound: Vec<f64>,
    pub upper_bound: Vec<f64>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Stable => "Stable",
        };
        f.pad(name)
    }
}

/// Summary trend statistics over a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    pub overall_trend_pct: f64,
    pub volatility_pct: f64,
    pub direction: TrendDirection,
    pub point_count: usize,
    pub date_range: (NaiveDateTime, NaiveDateTime),
}
