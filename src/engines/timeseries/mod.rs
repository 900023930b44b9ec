pub mod builder;
pub mod decomposition;
pub mod forecast;
pub mod trend;

pub use builder::{build_time_series, select_date_column, select_value_column};
pub use decomposition::Decomposition;
pub use forecast::Forecaster;
pub use trend::{trend_direction, TrendAnalyzer};
