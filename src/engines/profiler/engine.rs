// src/engines/profiler/engine.rs
use crate::config::ProfilingConfig;
use crate::stats;
use crate::types::{ColumnInfo, ColumnType, DistributionLabel, Table, Value};
use rayon::prelude::*;
use std::collections::HashMap;

use super::inference;

/// Classifies columns and computes their descriptive statistics.
pub struct ColumnProfiler {
    config: ProfilingConfig,
}

impl ColumnProfiler {
    pub fn new(config: ProfilingConfig) -> Self {
        Self { config }
    }

    /// Profile every column of the table. An empty table yields an empty
    /// map. Columns are independent, so they are profiled in parallel.
    pub fn profile(&self, table: &Table) -> HashMap<String, ColumnInfo> {
        if table.is_empty() {
            return HashMap::new();
        }

        let total_rows = table.height();
        let profile: HashMap<String, ColumnInfo> = table
            .columns()
            .par_iter()
            .enumerate()
            .map(|(index, name)| {
                let column: Vec<&Value> = table.rows().iter().map(|row| &row[index]).collect();
                (name.clone(), self.profile_column(name, &column, total_rows))
            })
            .collect();

        log::debug!(
            "Profiled {} columns over {} rows",
            table.width(),
            total_rows
        );
        profile
    }

    fn profile_column(&self, name: &str, column: &[&Value], total_rows: usize) -> ColumnInfo {
        let non_missing: Vec<&Value> = column
            .iter()
            .copied()
            .filter(|value| !value.is_missing())
            .collect();
        let missing_count = column.len() - non_missing.len();
        let missing_percentage = if total_rows == 0 {
            0.0
        } else {
            missing_count as f64 / total_rows as f64 * 100.0
        };

        let column_type = inference::infer_column_type(&non_missing, &self.config);

        let mut info = ColumnInfo {
            name: name.to_string(),
            column_type,
            unique_values: inference::distinct_count(&non_missing),
            missing_count,
            missing_percentage,
            min: None,
            max: None,
            mean: None,
            median: None,
            std: None,
            distribution: None,
            outliers: None,
        };

        if column_type == ColumnType::Numeric {
            let numeric: Vec<f64> = non_missing
                .iter()
                .filter_map(|value| value.as_number())
                .collect();
            if !numeric.is_empty() {
                self.fill_numeric_stats(&mut info, &numeric);
            }
        }

        info
    }

    fn fill_numeric_stats(&self, info: &mut ColumnInfo, numeric: &[f64]) {
        let mut sorted = numeric.to_vec();
        sorted.sort_by(f64::total_cmp);

        info.min = sorted.first().copied();
        info.max = sorted.last().copied();
        info.mean = Some(stats::mean(numeric));
        // Lower-middle median; see stats::median_lower for the tie-break.
        info.median = Some(sorted[sorted.len() / 2]);
        info.std = Some(stats::population_std_dev(numeric));
        info.distribution = Some(classify_distribution(
            numeric,
            self.config.distribution_min_sample,
        ));
        info.outliers = Some(self.detect_outliers(numeric, &sorted));
    }

    /// Tukey fences on Q1/Q3; anything strictly outside is an outlier.
    fn detect_outliers(&self, numeric: &[f64], sorted: &[f64]) -> Vec<f64> {
        let (q1, q3) = match (
            stats::quantile_sorted(sorted, 0.25),
            stats::quantile_sorted(sorted, 0.75),
        ) {
            (Some(q1), Some(q3)) => (q1, q3),
            _ => return Vec::new(),
        };

        let iqr = q3 - q1;
        let lower = q1 - self.config.outlier_iqr_multiplier * iqr;
        let upper = q3 + self.config.outlier_iqr_multiplier * iqr;

        numeric
            .iter()
            .copied()
            .filter(|&value| value < lower || value > upper)
            .collect()
    }
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new(ProfilingConfig::default())
    }
}

/// Thresholded shape classifier over the sample skewness.
///
/// Kept as a free function of the sample so it can be exercised without a
/// profiler. A zero-variance sample has undefined skewness and labels as
/// Unknown.
pub fn classify_distribution(values: &[f64], min_sample: usize) -> DistributionLabel {
    if values.len() < min_sample {
        return DistributionLabel::InsufficientData;
    }

    let mean = stats::mean(values);
    let std = stats::population_std_dev(values);
    let skewness = match stats::sample_skewness(values) {
        Some(skewness) => skewness,
        None => return DistributionLabel::Unknown,
    };

    if skewness.abs() < 0.5 {
        DistributionLabel::Normal
    } else if skewness > 1.0 {
        DistributionLabel::RightSkewed
    } else if skewness < -1.0 {
        DistributionLabel::LeftSkewed
    } else if values.iter().all(|&value| value >= 0.0) && mean < std {
        DistributionLabel::Exponential
    } else {
        DistributionLabel::Unknown
    }
}
