use crate::error::{AnalysisError, Result};
use crate::types::{Table, Value};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::path::Path;

/// Loads array-of-objects JSON records into a table.
///
/// This is the ingestion seam: format decoding stays with serde_json, the
/// analysis core only ever sees a `Table`.
pub struct JsonConnector;

impl JsonConnector {
    /// Load a records file into a table.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
        let contents = std::fs::read_to_string(&path)?;
        let table = Self::from_json_str(&contents)?;
        log::info!(
            "Loaded {} rows x {} columns from {}",
            table.height(),
            table.width(),
            path.as_ref().display()
        );
        Ok(table)
    }

    pub fn from_json_str(raw: &str) -> Result<Table> {
        let parsed: JsonValue = serde_json::from_str(raw)?;
        let records = parsed.as_array().ok_or_else(|| {
            AnalysisError::DataLoading("Expected a top-level JSON array of records".to_string())
        })?;
        Self::from_json_records(records)
    }

    /// Convert JSON records into a table. Column order follows the key
    /// order of the first record; later records append new columns at the
    /// end.
    pub fn from_json_records(records: &[JsonValue]) -> Result<Table> {
        let mut converted = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let object = record.as_object().ok_or_else(|| {
                AnalysisError::DataLoading(format!("Record {} is not a JSON object", index))
            })?;
            let row: Vec<(String, Value)> = object
                .iter()
                .map(|(key, value)| (key.clone(), convert(value)))
                .collect();
            converted.push(row);
        }
        Ok(Table::from_records(converted))
    }

    pub fn metadata(table: &Table) -> TableMetadata {
        TableMetadata {
            num_rows: table.height(),
            num_columns: table.width(),
            columns: table.columns().to_vec(),
        }
    }

    /// First `limit` rows rendered as display strings for a preview.
    pub fn preview(table: &Table, limit: usize) -> Vec<Vec<String>> {
        table
            .rows()
            .iter()
            .take(limit)
            .map(|row| row.iter().map(|value| value.to_string()).collect())
            .collect()
    }
}

/// Scalar mapping; nested structures are carried as their JSON text.
fn convert(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
        JsonValue::String(s) => Value::Text(s.clone()),
        other => Value::Text(other.to_string()),
    }
}

/// Shape summary of a loaded table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadata {
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
}
