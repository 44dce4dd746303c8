use thiserror::Error;

use crate::table::ColumnKey;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("missing column key {key}; available columns: {}", format_keys(.available))]
    MissingColumn {
        key: ColumnKey,
        available: Vec<ColumnKey>,
    },

    #[error("duplicate column key {0}")]
    DuplicateColumn(ColumnKey),

    #[error("display name '{0}' is mapped from more than one column")]
    DuplicateDisplayName(String),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_keys(keys: &[ColumnKey]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
