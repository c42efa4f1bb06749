use crate::error::{PuzzleRankError, Result};
use crate::types::Dataset;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle samples and split them into (train, test).
///
/// The train side receives `round(ratio * n)` samples. Pass a seed for a
/// reproducible split.
pub fn split_dataset(dataset: &Dataset, ratio: f64, seed: Option<u64>) -> Result<(Dataset, Dataset)> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(PuzzleRankError::Validation(format!(
            "Train/test split must be between 0 and 1, got {}",
            ratio
        )));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut samples = dataset.samples.clone();
    samples.shuffle(&mut rng);

    let train_size = (ratio * samples.len() as f64).round() as usize;
    let test = samples.split_off(train_size);

    Ok((Dataset::new(samples), Dataset::new(test)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeatureRow, Sample};

    fn dataset(n: usize) -> Dataset {
        let samples = (0..n)
            .map(|i| {
                Sample::new(
                    format!("repo-{}", i),
                    vec![FeatureRow::from(vec![i as f64])],
                    vec![1.0],
                )
                .unwrap()
            })
            .collect();
        Dataset::new(samples)
    }

    #[test]
    fn test_split_sizes() {
        let (train, test) = split_dataset(&dataset(10), 0.8, Some(42)).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
    }

    #[test]
    fn test_seeded_split_is_reproducible() {
        let data = dataset(12);
        let (a, _) = split_dataset(&data, 0.5, Some(7)).unwrap();
        let (b, _) = split_dataset(&data, 0.5, Some(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_keeps_every_sample() {
        let data = dataset(9);
        let (train, test) = split_dataset(&data, 0.3, None).unwrap();
        let mut groups: Vec<String> = train
            .samples
            .iter()
            .chain(test.samples.iter())
            .map(|s| s.group.clone())
            .collect();
        groups.sort();
        let mut expected: Vec<String> = data.samples.iter().map(|s| s.group.clone()).collect();
        expected.sort();
        assert_eq!(groups, expected);
    }

    #[test]
    fn test_invalid_ratio() {
        assert!(split_dataset(&dataset(3), 1.5, Some(1)).is_err());
    }
}
