use super::traits::ConfigSection;
use crate::error::PuzzleRankError;
use crate::model::LayerSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub layers: Vec<LayerSpec>,
    /// Weights to score with. When absent, fitness is logged for zero weights
    /// and puzzles are ranked by their estimates.
    pub weights: Option<Vec<f64>>,
    /// Log predicted and true rank permutations while scoring
    pub debug: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            weights: None,
            debug: false,
        }
    }
}

impl ConfigSection for ModelConfig {
    fn section_name() -> &'static str {
        "model"
    }

    fn validate(&self) -> Result<(), PuzzleRankError> {
        let mut seen = HashSet::new();
        for layer in &self.layers {
            if layer.name.is_empty() {
                return Err(PuzzleRankError::Configuration(
                    "Layer name must not be empty".to_string()
                ));
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(PuzzleRankError::Configuration(format!(
                    "Duplicate layer name '{}'",
                    layer.name
                )));
            }
        }
        if let Some(weights) = &self.weights {
            if weights.iter().any(|w| !w.is_finite()) {
                return Err(PuzzleRankError::Configuration(
                    "Weights must be finite numbers".to_string()
                ));
            }
        }
        Ok(())
    }
}
