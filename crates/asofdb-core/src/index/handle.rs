use crate::{
    block::{BlockError, RowLocator},
    config::IndexConfig,
    index::{
        IndexError, IndexPhase, Inequality, OrderingKind,
        select::{InequalityIndex, OrderingType, OrderingTypeVisitor, TypedIndex, with_ordering_type},
    },
    obs::sink::{self, MetricsEvent},
    types::ColumnType,
    value::Value,
};
use std::sync::Arc;

///
/// TypedIndexHandle
///
/// Type-erased as-of index for one join key, built for a runtime column
/// type and inequality.
///
/// The handle owns exactly one `SortedIndex` instantiation; generic values
/// are converted to its concrete kind on the way in, so the search itself
/// never branches on type.
///

#[derive(Clone, Debug)]
pub struct TypedIndexHandle {
    column_type: ColumnType,
    inequality: Inequality,
    record_metrics: bool,
    index: TypedIndex,
}

impl TypedIndexHandle {
    /// Build an empty index with default configuration.
    pub fn new(column_type: ColumnType, inequality: Inequality) -> Result<Self, IndexError> {
        Self::with_config(column_type, inequality, &IndexConfig::default())
    }

    pub fn with_config(
        column_type: ColumnType,
        inequality: Inequality,
        config: &IndexConfig,
    ) -> Result<Self, IndexError> {
        let visitor = BuildIndex {
            inequality,
            capacity: config.initial_capacity,
        };

        let index = match with_ordering_type(column_type, visitor) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(%column_type, %inequality, "as-of index rejected column type");
                if config.record_metrics {
                    sink::record(MetricsEvent::UnsupportedType { column_type });
                }
                return Err(err);
            }
        };

        let kind = index.kind();
        tracing::debug!(
            %column_type,
            %inequality,
            capacity = config.initial_capacity,
            "as-of index created"
        );
        if config.record_metrics {
            sink::record(MetricsEvent::IndexCreated { kind, inequality });
        }

        Ok(Self {
            column_type,
            inequality,
            record_metrics: config.record_metrics,
            index,
        })
    }

    ///
    /// BUILD
    ///

    /// Add one build row keyed by `value`. NULL rows are counted and skipped.
    pub fn append(&mut self, value: &Value, locator: RowLocator) -> Result<(), IndexError> {
        let result = self.index.append_value(self.column_type, value, locator);
        self.observe(result)
    }

    /// Add the located row, reading its ordering value from column
    /// `column_index` of the row's own block.
    ///
    /// Columns stored as this index's exact type are read natively; any other
    /// column goes through the lossless value conversion.
    pub fn append_row(&mut self, locator: RowLocator, column_index: usize) -> Result<(), IndexError> {
        let block = Arc::clone(locator.block());
        let column = block.column(column_index)?;

        let result = if column.column_type() == self.column_type {
            self.index.append_row(column, locator)
        } else {
            let offset = locator.offset();
            let value = column.value(offset).ok_or(BlockError::RowOutOfRange {
                offset,
                rows: column.len(),
            })?;

            self.index.append_value(self.column_type, &value, locator)
        };

        self.observe(result)
    }

    /// Sort the build rows and open the index for lookups. Idempotent.
    pub fn finalize(&mut self) {
        if self.is_finalized() {
            return;
        }

        self.index.finalize();

        let (entries, skipped) = (self.len(), self.skipped());
        tracing::debug!(
            column_type = %self.column_type,
            inequality = %self.inequality,
            entries,
            skipped,
            "as-of index finalized"
        );
        if self.record_metrics {
            sink::record(MetricsEvent::Finalized {
                kind: self.kind(),
                entries: u64::try_from(entries).unwrap_or(u64::MAX),
                skipped: u64::try_from(skipped).unwrap_or(u64::MAX),
            });
        }
    }

    ///
    /// PROBE
    ///

    /// Locator of the nearest build row satisfying `entry ⊙ probe`.
    ///
    /// NULL and NaN probes match nothing.
    pub fn lookup(&self, probe: &Value) -> Result<Option<&RowLocator>, IndexError> {
        let found = self.observe(self.index.lookup_value(self.column_type, probe))?;

        if self.record_metrics {
            sink::record(MetricsEvent::Lookup {
                kind: self.kind(),
                matched: found.is_some(),
            });
        }

        Ok(found)
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        self.column_type
    }

    #[must_use]
    pub const fn inequality(&self) -> Inequality {
        self.inequality
    }

    #[must_use]
    pub const fn kind(&self) -> OrderingKind {
        self.index.kind()
    }

    /// Indexed (matchable) build rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build rows dropped for NULL or NaN ordering values.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.index.skipped()
    }

    #[must_use]
    pub fn phase(&self) -> IndexPhase {
        self.index.phase()
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.phase() == IndexPhase::Finalized
    }

    fn observe<T>(&self, result: Result<T, IndexError>) -> Result<T, IndexError> {
        if self.record_metrics
            && let Err(IndexError::InvalidState { operation, .. }) = &result
        {
            sink::record(MetricsEvent::PhaseViolation {
                operation: *operation,
            });
        }

        result
    }
}

///
/// BuildIndex
///

struct BuildIndex {
    inequality: Inequality,
    capacity: usize,
}

impl OrderingTypeVisitor for BuildIndex {
    type Output = TypedIndex;

    fn visit<T: OrderingType>(self) -> TypedIndex {
        T::wrap(InequalityIndex::with_capacity(self.inequality, self.capacity))
    }
}
