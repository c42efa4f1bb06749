use crate::error::PuzzleRankError;

/// Objective an external optimizer minimizes.
///
/// Implementations must be pure: the same weights always give the same
/// cost, and calls may arrive concurrently from many workers.
pub trait CostFunction: Send + Sync {
    /// Length of the weight vectors this cost function expects.
    fn dimensions(&self) -> usize;

    fn cost(&self, weights: &[f64]) -> Result<f64, PuzzleRankError>;
}
