// src/engines/scoring/predictor.rs
use crate::engines::ranking::{argsort, kendall_tau_distance};
use crate::engines::scoring::linear::{score, weight_prefix};
use crate::error::{PuzzleRankError, Result};
use crate::model::{LayerSpec, WeightLayoutRegistry};
use crate::types::{FeatureRow, PredictedRanking, Sample};
use serde::{Deserialize, Serialize};

/// Outcome of one fitness evaluation over a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    /// Mean rank distance, the value handed to the optimizer.
    pub mean: f64,
    /// Rank distance of every sample, in dataset order.
    pub per_sample: Vec<f64>,
}

impl FitnessReport {
    fn from_distances(per_sample: Vec<f64>) -> Self {
        let mean = per_sample.iter().sum::<f64>() / per_sample.len() as f64;
        Self { mean, per_sample }
    }
}

/// Linear predictor model.
///
/// Holds no state besides the declared layer layout, so one instance can
/// serve any number of concurrent fitness evaluations.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    layout: WeightLayoutRegistry,
}

impl Predictor {
    pub fn new(layers: &[LayerSpec]) -> Self {
        Self {
            layout: WeightLayoutRegistry::new(layers),
        }
    }

    pub fn layout(&self) -> &WeightLayoutRegistry {
        &self.layout
    }

    /// Score every row of one sample, preserving row order.
    ///
    /// Each row uses the prefix of `weights` matching its flattened length.
    /// With `debug` set, the rank permutations of the predictions and of
    /// `true_order` are logged at debug level.
    pub fn predict(
        &self,
        weights: &[f64],
        data: &[FeatureRow],
        true_order: &[f64],
        debug: bool,
    ) -> Result<PredictedRanking> {
        let mut ranks = Vec::with_capacity(data.len());
        for row in data {
            let w = weight_prefix(weights, row.flat_len())?;
            ranks.push(score(w, row)?);
        }

        if debug {
            log::debug!("-- Pred Rank {:?}", argsort(&ranks));
            if !true_order.is_empty() {
                log::debug!("-- True Rank {:?}", argsort(true_order));
            }
        }

        Ok(ranks)
    }

    /// Rank distance between the model's ordering of `data` and `true_order`.
    ///
    /// Never touches `weights`; adjusting them is the optimizer's business.
    pub fn train(
        &self,
        weights: &[f64],
        data: &[FeatureRow],
        true_order: &[f64],
        debug: bool,
    ) -> Result<f64> {
        let ranks = self.predict(weights, data, true_order, debug)?;
        kendall_tau_distance(&ranks, true_order)
    }

    pub fn kendall(&self, weights: &[f64], data: &[FeatureRow], true_order: &[f64]) -> Result<f64> {
        let ranks = self.predict(weights, data, &[], false)?;
        kendall_tau_distance(&ranks, true_order)
    }

    /// Mean rank distance across samples. This is the optimizer's cost.
    pub fn f(&self, weights: &[f64], data: &[Vec<FeatureRow>], true_order: &[Vec<f64>]) -> Result<f64> {
        Ok(self.evaluate(weights, data, true_order)?.mean)
    }

    /// Like [`Predictor::f`], also returning each sample's distance.
    ///
    /// Per sample, both the true order and the weights are truncated to the
    /// number of rows in that sample before predicting.
    pub fn evaluate(
        &self,
        weights: &[f64],
        data: &[Vec<FeatureRow>],
        true_order: &[Vec<f64>],
    ) -> Result<FitnessReport> {
        if data.len() != true_order.len() {
            return Err(PuzzleRankError::length_mismatch(
                "dataset true orders",
                data.len(),
                true_order.len(),
            ));
        }
        if data.is_empty() {
            return Err(PuzzleRankError::EmptyDataset);
        }

        let per_sample = data
            .iter()
            .zip(true_order)
            .map(|(x, y)| self.sample_distance(weights, x, y))
            .collect::<Result<Vec<_>>>()?;

        Ok(FitnessReport::from_distances(per_sample))
    }

    /// [`Predictor::evaluate`] over samples that carry their own true order.
    pub fn evaluate_samples(&self, weights: &[f64], samples: &[Sample]) -> Result<FitnessReport> {
        if samples.is_empty() {
            return Err(PuzzleRankError::EmptyDataset);
        }

        let per_sample = samples
            .iter()
            .map(|s| self.sample_distance(weights, &s.rows, &s.true_order))
            .collect::<Result<Vec<_>>>()?;

        Ok(FitnessReport::from_distances(per_sample))
    }

    fn sample_distance(&self, weights: &[f64], x: &[FeatureRow], y: &[f64]) -> Result<f64> {
        let y = &y[..x.len().min(y.len())];
        let m = &weights[..x.len().min(weights.len())];
        let preds = self.predict(m, x, y, false)?;
        kendall_tau_distance(&preds, y)
    }
}
