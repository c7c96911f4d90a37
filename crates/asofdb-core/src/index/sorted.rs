use crate::{
    block::{BlockError, Column, RowLocator},
    index::{
        IndexError, IndexOperation, IndexPhase, inequality::FixedInequality,
        ordering::OrderingValue,
    },
};
use std::marker::PhantomData;

///
/// Entry
///
/// Ordering value plus the position of its locator in `locators`.
/// Sorting moves these small records, never the locators.
///

#[derive(Clone, Copy, Debug)]
struct Entry<T> {
    value: T,
    row: usize,
}

///
/// SortedIndex
///
/// Per-join-key as-of index over one ordering kind `T` and one inequality `I`.
///
/// Two phases:
/// - building: `append` only, no ordering maintained
/// - finalized: `lookup` only, entries ascending by value
///
/// Ties keep append order (stable sort). Under `<=` and `>` the last tie
/// wins, under `<` and `>=` the first; either way a lookup against a fixed
/// index always returns the same locator.
///

#[derive(Clone, Debug)]
pub struct SortedIndex<T: OrderingValue, I: FixedInequality> {
    entries: Vec<Entry<T>>,
    locators: Vec<RowLocator>,
    skipped: usize,
    phase: IndexPhase,
    _inequality: PhantomData<I>,
}

impl<T: OrderingValue, I: FixedInequality> SortedIndex<T, I> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            locators: Vec::new(),
            skipped: 0,
            phase: IndexPhase::Building,
            _inequality: PhantomData,
        }
    }

    /// Pre-size for `capacity` build rows.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            locators: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    ///
    /// BUILD
    ///

    /// Add one build row. Values that can never match (NaN) are counted and
    /// dropped.
    pub fn append(&mut self, value: T, locator: RowLocator) -> Result<(), IndexError> {
        self.require(IndexOperation::Append)?;

        if !value.is_orderable() {
            self.skipped += 1;
            return Ok(());
        }

        self.entries.push(Entry {
            value,
            row: self.locators.len(),
        });
        self.locators.push(locator);

        Ok(())
    }

    /// Add the located row, reading its ordering value straight from `column`
    /// storage. The column must hold `T` at the scale this index was built
    /// for; NULLs cannot occur in dense storage.
    pub fn append_row(&mut self, column: &Column, locator: RowLocator) -> Result<(), IndexError> {
        self.require(IndexOperation::Append)?;

        let offset = locator.offset();
        if offset >= column.len() {
            return Err(BlockError::RowOutOfRange {
                offset,
                rows: column.len(),
            }
            .into());
        }

        let value = T::from_column(column.data(), offset).ok_or_else(|| {
            IndexError::ColumnMismatch {
                name: column.name().to_string(),
                expected: T::KIND,
                found: column.column_type(),
            }
        })?;

        self.append(value, locator)
    }

    /// Record a build row whose ordering value is NULL.
    pub fn skip(&mut self) -> Result<(), IndexError> {
        self.require(IndexOperation::Append)?;
        self.skipped += 1;

        Ok(())
    }

    /// Sort entries and switch to the query phase. Idempotent.
    pub fn finalize(&mut self) {
        if self.phase == IndexPhase::Finalized {
            return;
        }

        self.entries
            .sort_by(|left, right| left.value.cmp_ordering(&right.value));
        self.entries.shrink_to_fit();
        self.locators.shrink_to_fit();
        self.phase = IndexPhase::Finalized;
    }

    ///
    /// PROBE
    ///

    /// Nearest entry satisfying `entry I probe`, if any.
    pub fn lookup(&self, probe: T) -> Result<Option<&RowLocator>, IndexError> {
        self.require(IndexOperation::Lookup)?;

        if !probe.is_orderable() {
            return Ok(None);
        }

        Ok(self
            .position(&probe)
            .map(|i| &self.locators[self.entries[i].row]))
    }

    /// Like [`Self::lookup`], also returning the matched ordering value.
    pub fn lookup_entry(&self, probe: T) -> Result<Option<(T, &RowLocator)>, IndexError> {
        self.require(IndexOperation::Lookup)?;

        if !probe.is_orderable() {
            return Ok(None);
        }

        Ok(self.position(&probe).map(|i| {
            let entry = self.entries[i];
            (entry.value, &self.locators[entry.row])
        }))
    }

    // `I::INEQUALITY` is a constant, so both branches fold away per
    // instantiation.
    fn position(&self, probe: &T) -> Option<usize> {
        let inequality = I::INEQUALITY;

        let split = if inequality.splits_after_ties() {
            self.entries
                .partition_point(|entry| entry.value.cmp_ordering(probe).is_le())
        } else {
            self.entries
                .partition_point(|entry| entry.value.cmp_ordering(probe).is_lt())
        };

        if inequality.is_floor() {
            split.checked_sub(1)
        } else {
            (split < self.entries.len()).then_some(split)
        }
    }

    ///
    /// INSPECTION
    ///

    /// Indexed (matchable) entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build rows dropped because their value can never match.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub const fn phase(&self) -> IndexPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.phase == IndexPhase::Finalized
    }

    /// Entries in current order: append order while building, ascending once
    /// finalized.
    pub fn iter(&self) -> impl Iterator<Item = (T, &RowLocator)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.value, &self.locators[entry.row]))
    }

    pub(crate) fn require(&self, operation: IndexOperation) -> Result<(), IndexError> {
        if self.phase.permits(operation) {
            return Ok(());
        }

        tracing::error!(
            %operation,
            phase = %self.phase,
            kind = %T::KIND,
            inequality = %I::INEQUALITY,
            "as-of index phase violation"
        );

        Err(IndexError::InvalidState {
            operation,
            phase: self.phase,
        })
    }
}

impl<T: OrderingValue, I: FixedInequality> Default for SortedIndex<T, I> {
    fn default() -> Self {
        Self::new()
    }
}
