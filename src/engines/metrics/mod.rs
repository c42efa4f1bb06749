pub mod regression;
pub mod engine;

pub use regression::RegressionMetrics;
pub use engine::MetricsEngine;
