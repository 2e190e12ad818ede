use crate::models::{ColumnType, OutputSchema};

/// Assigns the final logical types of the output dataset. Values are not
/// touched; this is the metadata half of the terminal artifact.
pub struct Retyper;

impl Retyper {
    pub fn new() -> Self {
        Self
    }

    /// Identifier columns stay text, timestamps stay timestamps, and the
    /// low-cardinality normalized columns become categorical.
    pub fn assign_types(&self) -> OutputSchema {
        OutputSchema {
            columns: vec![
                ("zip", ColumnType::Text),
                ("incident_number", ColumnType::Text),
                ("date_reported", ColumnType::Datetime),
                ("date_occurred", ColumnType::Datetime),
                ("offense_classification", ColumnType::Categorical),
                ("location_category", ColumnType::Categorical),
                ("was_offense_completed", ColumnType::Categorical),
                ("value_range", ColumnType::Categorical),
                ("week_day_reported", ColumnType::Categorical),
                ("week_day_occurred", ColumnType::Categorical),
            ],
        }
    }
}

impl Default for Retyper {
    fn default() -> Self {
        Self::new()
    }
}
