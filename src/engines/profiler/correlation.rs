use crate::error::{AnalysisError, Result};
use crate::stats;
use crate::types::Table;

/// Pearson correlation matrix over the selected columns.
///
/// A row enters a pair only when both cells have a numeric view, so a
/// missing value in one column never misaligns the other. Diagonal entries
/// are exactly 1; degenerate pairs (fewer than two complete rows, zero
/// variance) are 0 instead of NaN.
pub fn correlation_matrix(table: &Table, columns: &[&str]) -> Result<Vec<Vec<f64>>> {
    let indices: Vec<usize> = columns
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| AnalysisError::InvalidSelection(format!("Unknown column: {}", name)))
        })
        .collect::<Result<_>>()?;

    let mut matrix = vec![vec![0.0; columns.len()]; columns.len()];
    for (i, &left) in indices.iter().enumerate() {
        for (j, &right) in indices.iter().enumerate() {
            matrix[i][j] = if i == j {
                1.0
            } else {
                column_correlation(table, left, right)
            };
        }
    }

    Ok(matrix)
}

fn column_correlation(table: &Table, left: usize, right: usize) -> f64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for row in table.rows() {
        if let (Some(x), Some(y)) = (row[left].as_number(), row[right].as_number()) {
            xs.push(x);
            ys.push(y);
        }
    }

    stats::pearson_correlation(&xs, &ys)
}
