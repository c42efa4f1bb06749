pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod model;
pub mod puzzles;
pub mod types;

pub use engines::{CostFunction, FitnessEvaluator, FitnessReport, Predictor};
pub use error::{PuzzleRankError, Result};
pub use types::{Dataset, FeatureRow, FeatureValue, Sample, WeightVector};
