// src/engines/ranking/distance.rs
use crate::error::{PuzzleRankError, Result};

/// Indices that sort `values` ascending.
///
/// The sort is stable under IEEE total ordering, so equal values keep
/// their original index order and NaNs sort after every number.
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&i, &j| values[i].total_cmp(&values[j]));
    indices
}

/// Normalized Kendall-tau distance between two orderings.
///
/// Both sequences are reduced to their rank permutations first. A pair of
/// positions is discordant when the permutations order it differently.
/// Returns `0.0` for identical relative order, `1.0` for a full reversal,
/// and `0.0` when there are fewer than two elements (nothing to disagree on).
pub fn kendall_tau_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(PuzzleRankError::length_mismatch("rank distance", a.len(), b.len()));
    }

    let n = a.len();
    if n < 2 {
        return Ok(0.0);
    }

    let ra = argsort(a);
    let rb = argsort(b);

    let mut discordant = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            if (ra[i] > ra[j]) != (rb[i] > rb[j]) {
                discordant += 1;
            }
        }
    }

    Ok((2.0 * discordant as f64) / (n as f64 * (n as f64 - 1.0)))
}
