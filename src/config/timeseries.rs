use super::traits::ConfigSection;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesConfig {
    /// Minimum points before seasonal decomposition runs.
    pub decomposition_min_points: usize,
    /// Upper cap on the seasonal period; the effective period also shrinks
    /// to a quarter of the series length.
    pub max_seasonal_period: usize,
    /// Largest accepted forecast horizon, in days.
    pub forecast_max_horizon: usize,
    /// Width of the forecast band, in residual standard deviations.
    pub confidence_multiplier: f64,
    /// Confidence level reported alongside the band.
    pub confidence_level: f64,
    /// Absolute trend percentage beyond which a series is labeled
    /// increasing or decreasing.
    pub trend_threshold_pct: f64,
}

impl Default for TimeSeriesConfig {
    fn default() -> Self {
        Self {
            decomposition_min_points: 12,
            max_seasonal_period: 12,
            forecast_max_horizon: 365,
            confidence_multiplier: 1.96,
            confidence_level: 95.0,
            trend_threshold_pct: 5.0,
        }
    }
}

impl ConfigSection for TimeSeriesConfig {
    fn section_name() -> &'static str {
        "timeseries"
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if self.decomposition_min_points < 4 {
            return Err(AnalysisError::Configuration(
                "Decomposition minimum must be at least 4 points".to_string(),
            ));
        }
        if self.max_seasonal_period < 2 {
            return Err(AnalysisError::Configuration(
                "Maximum seasonal period must be at least 2".to_string(),
            ));
        }
        if self.forecast_max_horizon == 0 {
            return Err(AnalysisError::Configuration(
                "Forecast horizon cap must be at least 1".to_string(),
            ));
        }
        if self.confidence_multiplier < 0.0 {
            return Err(AnalysisError::Configuration(
                "Confidence multiplier must not be negative".to_string(),
            ));
        }
        if self.confidence_level <= 0.0 || self.confidence_level >= 100.0 {
            return Err(AnalysisError::Configuration(
                "Confidence level must be between 0 and 100".to_string(),
            ));
        }
        if self.trend_threshold_pct < 0.0 {
            return Err(AnalysisError::Configuration(
                "Trend threshold must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
