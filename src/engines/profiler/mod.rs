pub mod correlation;
pub mod engine;
pub mod inference;

pub use correlation::correlation_matrix;
pub use engine::{classify_distribution, ColumnProfiler};
