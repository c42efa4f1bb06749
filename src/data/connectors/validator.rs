use crate::error::{PuzzleRankError, Result};
use polars::prelude::*;
use super::types::ColumnLayout;
use std::collections::HashMap;

pub struct DataValidator;

impl DataValidator {
    /// Resolve the column layout and check feature/target columns are numeric
    pub fn validate_layout(df: &DataFrame) -> Result<ColumnLayout> {
        let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();

        let layout = ColumnLayout::from_columns(&columns).ok_or_else(|| {
            PuzzleRankError::DataLoading(format!(
                "Expected a group column, at least one feature and a target, found {} columns",
                columns.len()
            ))
        })?;

        for name in layout.feature_columns.iter().chain(std::iter::once(&layout.target_column)) {
            let column = df.column(name)?;
            if !Self::is_numeric(column.dtype()) {
                return Err(PuzzleRankError::DataLoading(format!(
                    "Column '{}' must be numeric, found {:?}",
                    name,
                    column.dtype()
                )));
            }
        }

        Ok(layout)
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::Int16
                | DataType::Int8
                | DataType::UInt64
                | DataType::UInt32
                | DataType::UInt16
                | DataType::UInt8
        )
    }

    /// Check for minimum required rows
    pub fn validate_minimum_rows(df: &DataFrame, min_rows: usize) -> Result<()> {
        if df.height() < min_rows {
            return Err(PuzzleRankError::DataLoading(format!(
                "Insufficient data: {} rows, minimum {} required",
                df.height(),
                min_rows
            )));
        }
        Ok(())
    }

    /// Every row must name its group; a null id would silently form a group of its own
    pub fn validate_group_ids(df: &DataFrame, layout: &ColumnLayout) -> Result<()> {
        let nulls = df.column(&layout.group_column)?.null_count();
        if nulls > 0 {
            return Err(PuzzleRankError::DataLoading(format!(
                "Group column '{}' has {} null values",
                layout.group_column, nulls
            )));
        }
        Ok(())
    }

    /// Null counts per column, only for columns that have any
    pub fn check_nulls(df: &DataFrame) -> HashMap<String, usize> {
        df.get_columns()
            .iter()
            .filter(|c| c.null_count() > 0)
            .map(|c| (c.name().to_string(), c.null_count()))
            .collect()
    }
}
