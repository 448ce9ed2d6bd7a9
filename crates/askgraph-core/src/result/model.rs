//! Query result models.

use serde::Serialize;
use serde_json::Value;

/// One row as returned by the driver: column name to value.
pub type Record = serde_json::Map<String, Value>;

/// All rows of one query, in driver order.
pub type ResultSet = Vec<Record>;

/// A result shaped for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedValue {
    /// The sole column of every row, in row order.
    Values(Vec<Value>),
    /// Rows kept as they came back (zero or several columns).
    Rows(Vec<Record>),
}

impl NormalizedValue {
    /// Number of rows behind this value.
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compact JSON rendering, used in prompts and console output.
    pub fn render(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}
