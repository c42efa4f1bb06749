use super::traits::ConfigSection;
use crate::error::PuzzleRankError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON array of puzzles to rank
    pub puzzles_path: Option<PathBuf>,
    pub ranks_path: Option<PathBuf>,
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), PuzzleRankError> {
        if self.puzzles_path.is_some() && self.ranks_path.is_none() {
            return Err(PuzzleRankError::Configuration(
                "ranks_path is required when puzzles_path is set".to_string()
            ));
        }
        Ok(())
    }
}
