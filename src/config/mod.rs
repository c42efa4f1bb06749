pub mod traits;
pub mod model;
pub mod data;
pub mod output;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use model::ModelConfig;
pub use data::DataConfig;
pub use output::OutputConfig;
pub use traits::ConfigSection;
