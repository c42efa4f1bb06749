use serde::{Deserialize, Serialize};

/// Column roles in a training CSV: group id first, target last,
/// features in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub group_column: String,
    pub feature_columns: Vec<String>,
    pub target_column: String,
}

impl ColumnLayout {
    pub fn from_columns(columns: &[String]) -> Option<Self> {
        if columns.len() < 3 {
            return None;
        }
        let last = columns.len() - 1;
        Some(Self {
            group_column: columns[0].clone(),
            feature_columns: columns[1..last].to_vec(),
            target_column: columns[last].clone(),
        })
    }
}

/// Metadata about a loaded training CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_groups: usize,
    pub num_features: usize,
    pub layout: ColumnLayout,
    pub target_range: (f64, f64), // (min, max)
}
