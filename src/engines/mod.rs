pub mod fitness;
pub mod metrics;
pub mod ranking;
pub mod scoring;

pub use fitness::{CostFunction, FitnessEvaluator};
pub use ranking::kendall_tau_distance;
pub use scoring::{FitnessReport, Predictor};
