pub mod profiler;
pub mod timeseries;
