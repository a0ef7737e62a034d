use thiserror::Error;

use crate::cell::CellKind;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("unsupported cell type: {name:?} (expected int, float or text)")]
    UnsupportedType { name: String },

    #[error("error converting value {value:?} at position ({row}, {column}): {reason}")]
    Conversion { value: String, row: usize, column: usize, reason: String },

    #[error("cannot search a {kind} grid for {value:?}: {reason}")]
    Needle { value: String, kind: CellKind, reason: String },

    #[error("row {index} out of range (grid has {total} rows)")]
    RowOutOfRange { index: usize, total: usize },

    #[error("column {index} out of range (grid has {total} columns)")]
    ColumnOutOfRange { index: usize, total: usize },

    #[error("grid input is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}
