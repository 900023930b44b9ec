//! Exploratory analysis core for in-memory tables: a column profiler
//! (type inference, descriptive statistics, outliers, correlation) and a
//! time-series analyzer (seasonal decomposition, polynomial forecasting,
//! trend summaries). Parsing file formats and rendering results belong to
//! the callers.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod stats;
pub mod types;

pub use config::{AppConfig, ConfigManager, ProfilingConfig, TimeSeriesConfig};
pub use data::{JsonConnector, TableMetadata};
pub use engines::profiler::{classify_distribution, correlation_matrix, ColumnProfiler};
pub use engines::timeseries::{
    build_time_series, select_date_column, select_value_column, trend_direction, Decomposition,
    Forecaster, TrendAnalyzer,
};
pub use error::{AnalysisError, Result};
pub use types::{
    ColumnInfo, ColumnType, DecompositionResult, DistributionLabel, ForecastResult, SeriesPoint,
    Table, TimeSeries, TrendDirection, TrendSummary, Value,
};
