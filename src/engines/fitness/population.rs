use crate::engines::fitness::traits::CostFunction;
use crate::error::Result;
use rayon::prelude::*;

/// Score a population of candidate weight vectors in parallel.
///
/// Results line up with `candidates`; one failing candidate does not stop
/// the others.
pub fn evaluate_population<C: CostFunction + ?Sized>(
    cost: &C,
    candidates: &[Vec<f64>],
) -> Vec<Result<f64>> {
    candidates
        .par_iter()
        .map(|weights| cost.cost(weights))
        .collect()
}

/// Index and cost of the lowest-cost candidate, skipping failed ones.
pub fn best_candidate(costs: &[Result<f64>]) -> Option<(usize, f64)> {
    costs
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.as_ref().ok().map(|&v| (i, v)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
