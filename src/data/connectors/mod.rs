mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{ColumnLayout, DatasetMetadata};
pub use validator::DataValidator;
