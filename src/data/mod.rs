pub mod connectors;
pub mod split;

pub use connectors::{ColumnLayout, CsvConnector, DatasetMetadata};
pub use split::split_dataset;
