// src/engines/metrics/regression.rs
use crate::error::{PuzzleRankError, Result};
use std::collections::HashMap;

pub struct RegressionMetrics;

impl RegressionMetrics {
    /// Point-prediction quality of `predictions` against `targets`.
    ///
    /// A prediction is a success when it lies within `epsilon` of its target.
    pub fn calculate(
        predictions: &[f64],
        targets: &[f64],
        epsilon: f64,
    ) -> Result<HashMap<String, f64>> {
        if predictions.len() != targets.len() {
            return Err(PuzzleRankError::length_mismatch(
                "regression targets",
                predictions.len(),
                targets.len(),
            ));
        }

        let mut metrics = HashMap::new();
        if predictions.is_empty() {
            return Ok(metrics);
        }

        let mut success = 0usize;
        let mut failure = 0usize;
        for (&actual, &ideal) in predictions.iter().zip(targets) {
            if Self::is_success(actual, ideal, epsilon) {
                success += 1;
            } else {
                failure += 1;
            }
        }

        metrics.insert("success".to_string(), success as f64);
        metrics.insert("failure".to_string(), failure as f64);
        metrics.insert(
            "error_rate_pct".to_string(),
            Self::error_rate(failure, predictions.len()),
        );
        metrics.insert("mse".to_string(), Self::mse(predictions, targets));

        Ok(metrics)
    }

    fn is_success(actual: f64, ideal: f64, epsilon: f64) -> bool {
        actual >= ideal - epsilon && actual <= ideal + epsilon
    }

    fn error_rate(errors: usize, total: usize) -> f64 {
        ((errors as f64 / total as f64) * 100.0).round()
    }

    fn mse(actual: &[f64], ideal: &[f64]) -> f64 {
        actual
            .iter()
            .zip(ideal)
            .map(|(a, i)| (a - i).powi(2))
            .sum::<f64>()
            / actual.len() as f64
    }
}
