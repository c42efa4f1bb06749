use super::traits::ConfigSection;
use crate::error::PuzzleRankError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub csv_path: Option<PathBuf>,
    pub train_test_split: f64,
    pub shuffle_seed: Option<u64>,
    pub success_epsilon: f64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            train_test_split: 0.8,
            shuffle_seed: None,
            success_epsilon: 0.1,
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), PuzzleRankError> {
        if self.train_test_split <= 0.0 || self.train_test_split > 1.0 {
            return Err(PuzzleRankError::Configuration(
                "Train/test split must be in (0, 1]".to_string()
            ));
        }
        if self.success_epsilon < 0.0 {
            return Err(PuzzleRankError::Configuration(
                "Success epsilon must not be negative".to_string()
            ));
        }
        Ok(())
    }
}
