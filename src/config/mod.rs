pub mod traits;
pub mod profiling;
pub mod timeseries;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use profiling::ProfilingConfig;
pub use timeseries::TimeSeriesConfig;
