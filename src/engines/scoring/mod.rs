pub mod linear;
pub mod predictor;

pub use linear::{score, score_flat, weight_prefix};
pub use predictor::{FitnessReport, Predictor};
