use crate::engines::ranking::argsort;
use crate::engines::scoring::Predictor;
use crate::error::Result;
use crate::types::FeatureRow;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One work item waiting to be ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    #[serde(default)]
    pub estimate: Option<f64>,
    #[serde(default)]
    pub features: FeatureRow,
}

/// Read puzzles from a JSON array
pub fn load_puzzles<P: AsRef<Path>>(path: P) -> Result<Vec<Puzzle>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Puzzle indices from smallest to largest estimate; unestimated puzzles go last.
pub fn rank_by_estimate(puzzles: &[Puzzle]) -> Vec<usize> {
    let estimates: Vec<f64> = puzzles
        .iter()
        .map(|p| p.estimate.unwrap_or(f64::INFINITY))
        .collect();
    argsort(&estimates)
}

/// Puzzle indices from lowest to highest model score.
pub fn rank_by_model(predictor: &Predictor, weights: &[f64], puzzles: &[Puzzle]) -> Result<Vec<usize>> {
    let rows: Vec<FeatureRow> = puzzles.iter().map(|p| p.features.clone()).collect();
    let scores = predictor.predict(weights, &rows, &[], false)?;
    Ok(argsort(&scores))
}

/// Rank by model score when weights are configured, by estimate otherwise.
pub fn rank(predictor: &Predictor, weights: Option<&[f64]>, puzzles: &[Puzzle]) -> Result<Vec<usize>> {
    match weights {
        Some(weights) => rank_by_model(predictor, weights, puzzles),
        None => Ok(rank_by_estimate(puzzles)),
    }
}

/// Write ranks as space separated indices
pub fn write_ranks<P: AsRef<Path>>(path: P, ranks: &[usize]) -> Result<()> {
    let line = ranks
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    std::fs::write(path, line)?;
    Ok(())
}
