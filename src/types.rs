use crate::error::{PuzzleRankError, Result};
use serde::{Deserialize, Serialize};

/// Flat vector of model weights, owned by the optimizer.
pub type WeightVector = Vec<f64>;

/// One scored prediction per feature row, in input order (not sorted).
pub type PredictedRanking = Vec<f64>;

/// A single feature attribute. Attributes may nest; scoring only ever
/// sees the depth-first flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Scalar(f64),
    Nested(Vec<FeatureValue>),
}

impl FeatureValue {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        match self {
            Self::Scalar(v) => out.push(*v),
            Self::Nested(values) => {
                for value in values {
                    value.flatten_into(out);
                }
            }
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

/// Attributes of one puzzle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureRow {
    pub values: Vec<FeatureValue>,
}

impl FeatureRow {
    pub fn new(values: Vec<FeatureValue>) -> Self {
        Self { values }
    }

    pub fn flatten(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.values.len());
        for value in &self.values {
            value.flatten_into(&mut out);
        }
        out
    }

    /// Number of scalars after flattening
    pub fn flat_len(&self) -> usize {
        fn count(value: &FeatureValue) -> usize {
            match value {
                FeatureValue::Scalar(_) => 1,
                FeatureValue::Nested(values) => values.iter().map(count).sum(),
            }
        }
        self.values.iter().map(count).sum()
    }
}

impl From<Vec<f64>> for FeatureRow {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values: values.into_iter().map(FeatureValue::Scalar).collect(),
        }
    }
}

/// One group of puzzles (typically one repository) with its ground-truth order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub group: String,
    pub rows: Vec<FeatureRow>,
    pub true_order: Vec<f64>,
}

impl Sample {
    pub fn new(group: impl Into<String>, rows: Vec<FeatureRow>, true_order: Vec<f64>) -> Result<Self> {
        if rows.len() != true_order.len() {
            return Err(PuzzleRankError::length_mismatch(
                "sample true order",
                rows.len(),
                true_order.len(),
            ));
        }
        Ok(Self {
            group: group.into(),
            rows,
            true_order,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Longest flattened row, i.e. the weight count this sample needs.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(FeatureRow::flat_len).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Feature rows per sample, in the shape the fitness entry point takes.
    pub fn data(&self) -> Vec<Vec<FeatureRow>> {
        self.samples.iter().map(|s| s.rows.clone()).collect()
    }

    pub fn true_orders(&self) -> Vec<Vec<f64>> {
        self.samples.iter().map(|s| s.true_order.clone()).collect()
    }

    pub fn max_row_len(&self) -> usize {
        self.samples.iter().map(Sample::max_row_len).max().unwrap_or(0)
    }
}
