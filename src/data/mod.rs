pub mod records;

pub use records::{JsonConnector, TableMetadata};
