// src/engines/fitness/evaluator.rs
use crate::engines::fitness::traits::CostFunction;
use crate::engines::scoring::{FitnessReport, Predictor};
use crate::error::{PuzzleRankError, Result};
use crate::types::Dataset;

/// Binds a predictor to a fixed dataset so an optimizer only has to supply
/// candidate weights.
///
/// Only shared borrows are held, so one evaluator can be scored from
/// several threads at once.
pub struct FitnessEvaluator<'a> {
    predictor: &'a Predictor,
    dataset: &'a Dataset,
    dimensions: usize,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(predictor: &'a Predictor, dataset: &'a Dataset) -> Result<Self> {
        if dataset.is_empty() {
            return Err(PuzzleRankError::EmptyDataset);
        }

        Ok(Self {
            predictor,
            dataset,
            dimensions: dataset.max_row_len(),
        })
    }

    pub fn report(&self, weights: &[f64]) -> Result<FitnessReport> {
        self.predictor.evaluate_samples(weights, &self.dataset.samples)
    }
}

impl CostFunction for FitnessEvaluator<'_> {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn cost(&self, weights: &[f64]) -> Result<f64> {
        Ok(self.report(weights)?.mean)
    }
}
