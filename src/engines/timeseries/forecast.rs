use chrono::Duration;

use crate::config::TimeSeriesConfig;
use crate::error::{AnalysisError, Result};
use crate::stats;
use crate::types::{ForecastResult, TimeSeries};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Quadratic-trend forecaster with a constant-width confidence band.
pub struct Forecaster;

impl Forecaster {
    /// Fit a degree-2 polynomial to (days since first observation, value)
    /// and extend it `horizon` calendar days past the last observation.
    ///
    /// Forecast cadence is always daily, independent of the input sampling
    /// interval.
    pub fn forecast(
        series: &TimeSeries,
        horizon: usize,
        config: &TimeSeriesConfig,
    ) -> Result<ForecastResult> {
        if horizon == 0 || horizon > config.forecast_max_horizon {
            return Err(AnalysisError::InvalidSelection(format!(
                "Forecast horizon must be between 1 and {}, got {}",
                config.forecast_max_horizon, horizon
            )));
        }
        if series.is_empty() {
            return Err(AnalysisError::InsufficientData {
                operation: "forecast",
                required: 1,
                actual: 0,
            });
        }

        let first = series.points[0].date;
        let x: Vec<f64> = series
            .points
            .iter()
            .map(|point| (point.date - first).num_seconds() as f64 / SECONDS_PER_DAY)
            .collect();
        let y = series.values();

        let coefficients = fit_quadratic(&x, &y)?;
        log::debug!(
            "Fitted trend polynomial {:.6} + {:.6}x + {:.6}x^2 over {} points",
            coefficients[0],
            coefficients[1],
            coefficients[2],
            y.len()
        );

        let last_x = x[x.len() - 1];
        let last_date = series.points[series.len() - 1].date;

        let mut dates = Vec::with_capacity(horizon);
        let mut forecast = Vec::with_capacity(horizon);
        for step in 1..=horizon as i64 {
            dates.push(last_date + Duration::days(step));
            forecast.push(evaluate(&coefficients, last_x + step as f64));
        }

        // Constant-width band from the in-sample residual spread.
        let residuals: Vec<f64> = x
            .iter()
            .zip(&y)
            .map(|(&xi, &yi)| yi - evaluate(&coefficients, xi))
            .collect();
        let margin = config.confidence_multiplier * stats::population_std_dev(&residuals);

        let upper_bound = forecast.iter().map(|point| point + margin).collect();
        let lower_bound = forecast.iter().map(|point| point - margin).collect();

        Ok(ForecastResult {
            dates,
            forecast,
            lower_bound,
            upper_bound,
            confidence: config.confidence_level,
        })
    }
}

/// Least-squares quadratic through the normal equations.
fn fit_quadratic(x: &[f64], y: &[f64]) -> Result<[f64; 3]> {
    let mut augmented = [[0.0; 4]; 3];
    for row in 0..3 {
        for col in 0..3 {
            augmented[row][col] = x.iter().map(|&xi| xi.powi((row + col) as i32)).sum();
        }
        augmented[row][3] = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| yi * xi.powi(row as i32))
            .sum();
    }
    solve(augmented)
}

/// Gaussian elimination with partial pivoting on the 3x4 augmented system.
fn solve(mut m: [[f64; 4]; 3]) -> Result<[f64; 3]> {
    for col in 0..3 {
        let pivot = (col..3)
            .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
            .unwrap_or(col);
        if m[pivot][col].abs() < 1e-12 {
            return Err(AnalysisError::DegenerateArithmetic(
                "Polynomial fit produced a singular system".to_string(),
            ));
        }
        m.swap(col, pivot);

        for row in col + 1..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let mut coefficients = [0.0; 3];
    for row in (0..3).rev() {
        let mut acc = m[row][3];
        for col in row + 1..3 {
            acc -= m[row][col] * coefficients[col];
        }
        coefficients[row] = acc / m[row][row];
    }
    Ok(coefficients)
}

fn evaluate(coefficients: &[f64; 3], x: f64) -> f64 {
    coefficients[0] + coefficients[1] * x + coefficients[2] * x * x
}
