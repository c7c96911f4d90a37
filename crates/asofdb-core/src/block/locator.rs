use crate::{
    block::{Block, BlockError, Column},
    value::Value,
};
use std::{fmt, sync::Arc};

///
/// RowLocator
///
/// Opaque reference to one stored row: (shared block, row offset).
///
/// Holding a locator keeps its block alive; any number of locators may share
/// one block. Locators are identities, not values: they have no content
/// equality or ordering. Use [`RowLocator::same_row`] to compare identity.
///

#[derive(Clone)]
pub struct RowLocator {
    block: Arc<Block>,
    offset: usize,
}

impl RowLocator {
    /// Locate `offset` within `block`, rejecting offsets past the last row.
    pub fn new(block: Arc<Block>, offset: usize) -> Result<Self, BlockError> {
        if offset >= block.rows() {
            return Err(BlockError::RowOutOfRange {
                offset,
                rows: block.rows(),
            });
        }

        Ok(Self::new_unchecked(block, offset))
    }

    // Caller guarantees `offset < block.rows()`.
    pub(crate) fn new_unchecked(block: Arc<Block>, offset: usize) -> Self {
        debug_assert!(offset < block.rows(), "row offset out of range");

        Self { block, offset }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn block(&self) -> &Arc<Block> {
        &self.block
    }

    /// Borrow a column of the located row's block.
    pub fn column(&self, index: usize) -> Result<&Column, BlockError> {
        self.block.column(index)
    }

    /// Read the located row's value in column `index`.
    pub fn value(&self, index: usize) -> Result<Value, BlockError> {
        let column = self.block.column(index)?;

        column.value(self.offset).ok_or(BlockError::RowOutOfRange {
            offset: self.offset,
            rows: column.len(),
        })
    }

    /// Read every column of the located row.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.block
            .columns()
            .iter()
            .filter_map(|column| column.value(self.offset))
            .collect()
    }

    /// Returns true when both locators address the same row of the same block.
    #[must_use]
    pub fn same_row(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.block, &other.block) && self.offset == other.offset
    }
}

impl fmt::Debug for RowLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowLocator")
            .field("block", &Arc::as_ptr(&self.block))
            .field("offset", &self.offset)
            .finish()
    }
}
