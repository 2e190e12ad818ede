use std::fmt;

/// Logical column type of the output dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Free-text or identifier column.
    Text,
    /// Naive local timestamp column.
    Datetime,
    /// Low-cardinality categorical column.
    Categorical,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Text => "string",
            ColumnType::Datetime => "datetime64",
            ColumnType::Categorical => "category",
        };
        write!(f, "{}", name)
    }
}

/// The column-to-type mapping of the final dataset, reported as a
/// diagnostic after the output file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSchema {
    pub columns: Vec<(&'static str, ColumnType)>,
}

impl OutputSchema {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|(name, _)| *name).collect()
    }

    pub fn summary(&self) -> String {
        let width = self
            .columns
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for (name, column_type) in &self.columns {
            out.push_str(&format!("{:<width$}  {}\n", name, column_type, width = width));
        }
        out
    }
}
