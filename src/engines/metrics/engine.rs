// src/engines/metrics/engine.rs
use crate::engines::metrics::RegressionMetrics;
use crate::engines::scoring::FitnessReport;
use crate::error::Result;
use std::collections::HashMap;

pub struct MetricsEngine {
    success_epsilon: f64,
}

impl MetricsEngine {
    pub fn new(success_epsilon: f64) -> Self {
        Self { success_epsilon }
    }

    pub fn calculate_all(
        &self,
        report: &FitnessReport,
        predictions: &[f64],
        targets: &[f64],
    ) -> Result<HashMap<String, f64>> {
        let mut all_metrics = HashMap::new();

        // Point-prediction quality
        let regression = RegressionMetrics::calculate(predictions, targets, self.success_epsilon)?;
        all_metrics.extend(regression);

        // Ranking quality
        all_metrics.insert("mean_rank_distance".to_string(), report.mean);
        all_metrics.insert("num_samples".to_string(), report.per_sample.len() as f64);
        if let Some(worst) = report.per_sample.iter().copied().max_by(|a, b| a.total_cmp(b)) {
            all_metrics.insert("worst_rank_distance".to_string(), worst);
        }

        Ok(all_metrics)
    }
}
