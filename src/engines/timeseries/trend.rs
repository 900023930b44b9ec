use crate::config::TimeSeriesConfig;
use crate::error::{AnalysisError, Result};
use crate::stats;
use crate::types::{TimeSeries, TrendDirection, TrendSummary};

pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Half-split trend percentage, period-over-period volatility, and a
    /// direction label.
    pub fn calculate(series: &TimeSeries, config: &TimeSeriesConfig) -> Result<TrendSummary> {
        let values = series.values();
        let n = values.len();
        if n < 2 {
            return Err(AnalysisError::InsufficientData {
                operation: "trend statistics",
                required: 2,
                actual: n,
            });
        }

        // Second half takes the remainder when n is odd.
        let (first_half, second_half) = values.split_at(n / 2);
        let first_mean = stats::mean(first_half);
        let second_mean = stats::mean(second_half);
        if first_mean == 0.0 {
            return Err(AnalysisError::DegenerateArithmetic(
                "First-half mean is zero, trend percentage is undefined".to_string(),
            ));
        }
        let overall_trend_pct = (second_mean - first_mean) / first_mean * 100.0;

        // Period-over-period returns; zero denominators are skipped.
        let returns: Vec<f64> = values
            .windows(2)
            .filter(|window| window[0] != 0.0)
            .map(|window| (window[1] - window[0]) / window[0])
            .collect();
        let volatility_pct = stats::population_std_dev(&returns) * 100.0;

        Ok(TrendSummary {
            overall_trend_pct,
            volatility_pct,
            direction: trend_direction(overall_trend_pct, config.trend_threshold_pct),
            point_count: n,
            date_range: (series.points[0].date, series.points[n - 1].date),
        })
    }
}

/// Thresholded direction label, kept as a free function of the statistic.
pub fn trend_direction(trend_pct: f64, threshold_pct: f64) -> TrendDirection {
    if trend_pct > threshold_pct {
        TrendDirection::Increasing
    } else if trend_pct < -threshold_pct {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}
