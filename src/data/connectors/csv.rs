use crate::error::{PuzzleRankError, Result};
use crate::types::{Dataset, FeatureRow, Sample};
use polars::prelude::*;
use std::path::Path;
use super::{
    types::{ColumnLayout, DatasetMetadata},
    validator::DataValidator,
};
use std::collections::HashMap;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| PuzzleRankError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load a training CSV and group its rows into samples
    pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<(Dataset, DatasetMetadata)> {
        let df = Self::load(&path)?;
        DataValidator::validate_minimum_rows(&df, 1)?;

        // Warn about nulls but don't fail
        let null_report = DataValidator::check_nulls(&df);
        if !null_report.is_empty() {
            log::warn!("Null values detected, treating them as 0: {:?}", null_report);
        }

        let layout = DataValidator::validate_layout(&df)?;
        DataValidator::validate_group_ids(&df, &layout)?;
        let dataset = Self::to_dataset(&df, &layout)?;
        let metadata = Self::create_metadata(&path, &df, &layout, &dataset)?;

        log::info!(
            "Loaded {} rows in {} groups with {} features from {}",
            metadata.num_rows,
            metadata.num_groups,
            metadata.num_features,
            metadata.file_path
        );

        Ok((dataset, metadata))
    }

    /// Group rows by the group column, keeping groups in order of first appearance
    pub fn to_dataset(df: &DataFrame, layout: &ColumnLayout) -> Result<Dataset> {
        let groups = df.column(&layout.group_column)?.cast(&DataType::String)?;
        let groups = groups.str()?;

        let features = layout
            .feature_columns
            .iter()
            .map(|name| Self::numeric_column(df, name))
            .collect::<Result<Vec<_>>>()?;
        let targets = Self::numeric_column(df, &layout.target_column)?;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut grouped: Vec<(String, Vec<FeatureRow>, Vec<f64>)> = Vec::new();

        for i in 0..df.height() {
            let group = groups
                .get(i)
                .ok_or_else(|| PuzzleRankError::DataLoading(format!("Row {} has no group id", i)))?
                .to_string();
            let row: Vec<f64> = features.iter().map(|column| column[i]).collect();

            let slot = *index.entry(group.clone()).or_insert_with(|| {
                grouped.push((group, Vec::new(), Vec::new()));
                grouped.len() - 1
            });
            grouped[slot].1.push(FeatureRow::from(row));
            grouped[slot].2.push(targets[i]);
        }

        let samples = grouped
            .into_iter()
            .map(|(group, rows, true_order)| Sample::new(group, rows, true_order))
            .collect::<Result<Vec<_>>>()?;

        Ok(Dataset::new(samples))
    }

    fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
        let column = df.column(name)?.cast(&DataType::Float64)?;
        Ok(column.f64()?.into_iter().map(|v| v.unwrap_or(0.0)).collect())
    }

    fn create_metadata<P: AsRef<Path>>(
        path: P,
        df: &DataFrame,
        layout: &ColumnLayout,
        dataset: &Dataset,
    ) -> Result<DatasetMetadata> {
        let target = df.column(&layout.target_column)?.cast(&DataType::Float64)?;
        let target = target.f64()?;
        let target_range = (target.min().unwrap_or(0.0), target.max().unwrap_or(0.0));

        Ok(DatasetMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_groups: dataset.len(),
            num_features: layout.feature_columns.len(),
            layout: layout.clone(),
            target_range,
        })
    }
}
