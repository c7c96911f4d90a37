//! Module: block
//! Responsibility: immutable in-memory column blocks and row locators.
//! Does not own: block scheduling, spilling, or output materialization.
//! Boundary: the as-of index references rows here but never copies columns.

mod column;
mod locator;

#[cfg(test)]
mod tests;

use crate::{types::ColumnType, value::ValueTag};
use std::sync::Arc;
use thiserror::Error as ThisError;

// re-exports
pub use column::{Column, ColumnData};
pub use locator::RowLocator;

///
/// BlockError
///
/// Structural faults in block construction or row addressing.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BlockError {
    #[error("column '{name}' declared as {column_type} cannot hold {found} data")]
    ColumnDataMismatch {
        name: String,
        column_type: ColumnType,
        found: &'static str,
    },

    #[error("column '{name}' holds a {found} value but is declared as {column_type}")]
    ColumnValueMismatch {
        name: String,
        column_type: ColumnType,
        found: ValueTag,
    },

    #[error("column '{name}' has {rows} rows, expected {expected}")]
    RaggedColumn {
        name: String,
        rows: usize,
        expected: usize,
    },

    #[error("column index {index} out of range for block with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error("row offset {offset} out of range for block with {rows} rows")]
    RowOutOfRange { offset: usize, rows: usize },
}

///
/// Block
///
/// Immutable set of equally sized columns.
/// Shared through `Arc` so row locators keep it alive.
///

#[derive(Clone, Debug)]
pub struct Block {
    columns: Vec<Column>,
    rows: usize,
}

impl Block {
    /// Build a block, requiring every column to have the same row count.
    pub fn new(columns: Vec<Column>) -> Result<Self, BlockError> {
        let rows = columns.first().map_or(0, Column::len);

        if let Some(ragged) = columns.iter().find(|column| column.len() != rows) {
            return Err(BlockError::RaggedColumn {
                name: ragged.name().to_string(),
                rows: ragged.len(),
                expected: rows,
            });
        }

        Ok(Self { columns, rows })
    }

    /// Build a block and wrap it for sharing with row locators.
    pub fn shared(columns: Vec<Column>) -> Result<Arc<Self>, BlockError> {
        Self::new(columns).map(Arc::new)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column by position.
    pub fn column(&self, index: usize) -> Result<&Column, BlockError> {
        self.columns
            .get(index)
            .ok_or(BlockError::ColumnOutOfRange {
                index,
                columns: self.columns.len(),
            })
    }

    /// Column position and column by name.
    #[must_use]
    pub fn column_by_name(&self, name: &str) -> Option<(usize, &Column)> {
        self.columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.name() == name)
    }

    /// Locate one row of a shared block.
    pub fn locate(self: &Arc<Self>, offset: usize) -> Result<RowLocator, BlockError> {
        RowLocator::new(Arc::clone(self), offset)
    }

    /// Locators for every row, in offset order.
    #[must_use]
    pub fn locators(self: &Arc<Self>) -> Vec<RowLocator> {
        (0..self.rows)
            .map(|offset| RowLocator::new_unchecked(Arc::clone(self), offset))
            .collect()
    }
}
