use super::traits::ConfigSection;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilingConfig {
    /// Fraction of non-missing values that must parse as numbers for a
    /// column to be typed numeric. The comparison is strict.
    pub numeric_ratio: f64,
    /// Distinct-to-non-missing ratio below which a column is categorical.
    /// The comparison is strict.
    pub categorical_ratio: f64,
    /// Minimum numeric sample size before a distribution label is assigned.
    pub distribution_min_sample: usize,
    /// Tukey fence multiplier for IQR outlier detection.
    pub outlier_iqr_multiplier: f64,
    /// Leading non-missing values sampled by the date-column fallback.
    pub date_sample_size: usize,
}

impl Default for ProfilingConfig {
    fn default() -> Self {
        Self {
            numeric_ratio: 0.8,
            categorical_ratio: 0.5,
            distribution_min_sample: 10,
            outlier_iqr_multiplier: 1.5,
            date_sample_size: 10,
        }
    }
}

impl ConfigSection for ProfilingConfig {
    fn section_name() -> &'static str {
        "profiling"
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if !(0.0..=1.0).contains(&self.numeric_ratio) {
            return Err(AnalysisError::Configuration(
                "Numeric ratio must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.categorical_ratio) {
            return Err(AnalysisError::Configuration(
                "Categorical ratio must be between 0 and 1".to_string(),
            ));
        }
        if self.outlier_iqr_multiplier <= 0.0 {
            return Err(AnalysisError::Configuration(
                "Outlier IQR multiplier must be positive".to_string(),
            ));
        }
        if self.date_sample_size == 0 {
            return Err(AnalysisError::Configuration(
                "Date sample size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
