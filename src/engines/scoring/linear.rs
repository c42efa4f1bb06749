// src/engines/scoring/linear.rs
use crate::error::{PuzzleRankError, Result};
use crate::types::FeatureRow;

/// First `length` weights of a flat weight vector.
///
/// Rows of different lengths consume different prefixes of the same vector.
/// Asking for more weights than exist is a `DimensionMismatch`, never a
/// silent truncation.
pub fn weight_prefix(weights: &[f64], length: usize) -> Result<&[f64]> {
    if length > weights.len() {
        return Err(PuzzleRankError::DimensionMismatch {
            required: length,
            available: weights.len(),
        });
    }
    Ok(&weights[..length])
}

/// Linear score of one row: `dot(row, weights) + weights[0]`.
///
/// `weights` must already be the prefix matching the flattened row.
pub fn score(weights: &[f64], row: &FeatureRow) -> Result<f64> {
    score_flat(weights, &row.flatten())
}

/// Same as [`score`] over an already flattened row. An empty row scores 0.
pub fn score_flat(weights: &[f64], row: &[f64]) -> Result<f64> {
    if weights.len() != row.len() {
        return Err(PuzzleRankError::DimensionMismatch {
            required: row.len(),
            available: weights.len(),
        });
    }

    let Some(&first) = weights.first() else {
        return Ok(0.0);
    };

    let dot: f64 = row.iter().zip(weights).map(|(x, w)| x * w).sum();

    // Only the leading weight is added back, not a separate bias term.
    Ok(dot + first)
}
