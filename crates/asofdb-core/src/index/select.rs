//! Module: index::select
//! Responsibility: map runtime column types onto the closed set of typed
//! index instantiations.
//! Does not own: search semantics (see `sorted`) or value conversion rules
//! (see `ordering` and `value`).
//! Boundary: the only place a `ColumnType` becomes a concrete Rust type.

use crate::{
    block::{Column, RowLocator},
    index::{
        IndexError, IndexOperation, IndexPhase, SortedIndex,
        inequality::{Inequality, markers},
        ordering::OrderingValue,
    },
    types::{ColumnType, DateTime64, Decimal32, Decimal64, Decimal128},
    value::Value,
};
use asofdb_primitives::ScalarKind;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ORDERING TYPE REGISTRY
///
/// One entry per supported ordering kind: (kind, Rust type).
/// Kind names match `ScalarKind` and `ColumnData` variants.
///

macro_rules! ordering_type_registry {
    ($macro:ident) => {
        $macro! {
            (UInt8, u8),
            (UInt16, u16),
            (UInt32, u32),
            (UInt64, u64),
            (Int8, i8),
            (Int16, i16),
            (Int32, i32),
            (Int64, i64),
            (Float32, f32),
            (Float64, f64),
            (Decimal32, Decimal32),
            (Decimal64, Decimal64),
            (Decimal128, Decimal128),
            (DateTime64, DateTime64),
        }
    };
}

///
/// OrderingTypeVisitor
///
/// Operation generic over the concrete ordering type, run once per
/// resolved column type.
///

pub(crate) trait OrderingTypeVisitor {
    type Output;

    fn visit<T: OrderingType>(self) -> Self::Output;
}

///
/// OrderingType
///
/// Ordering value with a slot in `TypedIndex`.
///

pub(crate) trait OrderingType: OrderingValue {
    fn wrap(index: InequalityIndex<Self>) -> TypedIndex;
}

/// Resolve `column_type` and run `visitor` for its concrete ordering type.
pub(crate) fn with_ordering_type<V: OrderingTypeVisitor>(
    column_type: ColumnType,
    visitor: V,
) -> Result<V::Output, IndexError> {
    let kind = OrderingKind::try_from(column_type)?;

    Ok(visit_ordering_kind(kind, visitor))
}

macro_rules! define_ordering_types {
    ( $( ($kind:ident, $ty:ty) ),* $(,)? ) => {
        ///
        /// OrderingKind
        ///
        /// Column types an as-of index can order by, without scale.
        ///

        #[derive(
            Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
        )]
        pub enum OrderingKind {
            $( $kind, )*
        }

        impl OrderingKind {
            /// Every supported kind, in registry order.
            pub const ALL: &[Self] = &[ $( Self::$kind, )* ];

            #[must_use]
            pub const fn scalar_kind(self) -> ScalarKind {
                match self {
                    $( Self::$kind => ScalarKind::$kind, )*
                }
            }

            const fn from_scalar_kind(kind: ScalarKind) -> Option<Self> {
                match kind {
                    $( ScalarKind::$kind => Some(Self::$kind), )*
                    _ => None,
                }
            }
        }

        $(
            impl OrderingType for $ty {
                fn wrap(index: InequalityIndex<Self>) -> TypedIndex {
                    TypedIndex::$kind(index)
                }
            }
        )*

        fn visit_ordering_kind<V: OrderingTypeVisitor>(kind: OrderingKind, visitor: V) -> V::Output {
            match kind {
                $( OrderingKind::$kind => visitor.visit::<$ty>(), )*
            }
        }

        ///
        /// TypedIndex
        ///
        /// Closed sum over every (kind, inequality) instantiation.
        ///

        #[derive(Clone, Debug)]
        pub(crate) enum TypedIndex {
            $( $kind(InequalityIndex<$ty>), )*
        }

        impl TypedIndex {
            pub(crate) const fn kind(&self) -> OrderingKind {
                match self {
                    $( Self::$kind(_) => OrderingKind::$kind, )*
                }
            }

            pub(crate) fn append_value(
                &mut self,
                column_type: ColumnType,
                value: &Value,
                locator: RowLocator,
            ) -> Result<(), IndexError> {
                match self {
                    $( Self::$kind(index) => index.append_value(column_type, value, locator), )*
                }
            }

            pub(crate) fn append_row(
                &mut self,
                column: &Column,
                locator: RowLocator,
            ) -> Result<(), IndexError> {
                match self {
                    $( Self::$kind(index) => index.append_row(column, locator), )*
                }
            }

            pub(crate) fn finalize(&mut self) {
                match self {
                    $( Self::$kind(index) => index.finalize(), )*
                }
            }

            pub(crate) fn lookup_value(
                &self,
                column_type: ColumnType,
                probe: &Value,
            ) -> Result<Option<&RowLocator>, IndexError> {
                match self {
                    $( Self::$kind(index) => index.lookup_value(column_type, probe), )*
                }
            }

            pub(crate) fn len(&self) -> usize {
                match self {
                    $( Self::$kind(index) => index.len(), )*
                }
            }

            pub(crate) fn skipped(&self) -> usize {
                match self {
                    $( Self::$kind(index) => index.skipped(), )*
                }
            }

            pub(crate) fn phase(&self) -> IndexPhase {
                match self {
                    $( Self::$kind(index) => index.phase(), )*
                }
            }
        }
    };
}

ordering_type_registry!(define_ordering_types);

impl OrderingKind {
    /// Fixed width of one ordering value in bytes.
    #[must_use]
    pub const fn value_size(self) -> usize {
        self.scalar_kind().value_size()
    }
}

impl TryFrom<ColumnType> for OrderingKind {
    type Error = IndexError;

    fn try_from(column_type: ColumnType) -> Result<Self, Self::Error> {
        if !column_type.has_valid_scale() {
            return Err(IndexError::UnsupportedType { column_type });
        }

        Self::from_scalar_kind(column_type.scalar_kind())
            .ok_or(IndexError::UnsupportedType { column_type })
    }
}

impl fmt::Display for OrderingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar_kind())
    }
}

///
/// InequalityIndex
///
/// One ordering type across the four inequality instantiations.
///

#[derive(Clone, Debug)]
pub(crate) enum InequalityIndex<T: OrderingValue> {
    LessOrEquals(SortedIndex<T, markers::LessOrEquals>),
    Less(SortedIndex<T, markers::Less>),
    GreaterOrEquals(SortedIndex<T, markers::GreaterOrEquals>),
    Greater(SortedIndex<T, markers::Greater>),
}

macro_rules! with_sorted {
    ($target:expr, $index:ident => $body:expr) => {
        match $target {
            InequalityIndex::LessOrEquals($index) => $body,
            InequalityIndex::Less($index) => $body,
            InequalityIndex::GreaterOrEquals($index) => $body,
            InequalityIndex::Greater($index) => $body,
        }
    };
}

impl<T: OrderingValue> InequalityIndex<T> {
    pub(crate) fn with_capacity(inequality: Inequality, capacity: usize) -> Self {
        match inequality {
            Inequality::LessOrEquals => Self::LessOrEquals(SortedIndex::with_capacity(capacity)),
            Inequality::Less => Self::Less(SortedIndex::with_capacity(capacity)),
            Inequality::GreaterOrEquals => {
                Self::GreaterOrEquals(SortedIndex::with_capacity(capacity))
            }
            Inequality::Greater => Self::Greater(SortedIndex::with_capacity(capacity)),
        }
    }

    // NULL rows are counted, never indexed.
    fn append_value(
        &mut self,
        column_type: ColumnType,
        value: &Value,
        locator: RowLocator,
    ) -> Result<(), IndexError> {
        with_sorted!(self, index => {
            if value.is_null() {
                return index.skip();
            }

            match T::from_value(value, column_type.scale()) {
                Some(converted) => index.append(converted, locator),
                None => {
                    index.require(IndexOperation::Append)?;
                    Err(type_mismatch(column_type, value))
                }
            }
        })
    }

    fn append_row(&mut self, column: &Column, locator: RowLocator) -> Result<(), IndexError> {
        with_sorted!(self, index => index.append_row(column, locator))
    }

    fn finalize(&mut self) {
        with_sorted!(self, index => index.finalize());
    }

    fn lookup_value(
        &self,
        column_type: ColumnType,
        probe: &Value,
    ) -> Result<Option<&RowLocator>, IndexError> {
        with_sorted!(self, index => {
            index.require(IndexOperation::Lookup)?;
            if probe.is_null() {
                return Ok(None);
            }

            let converted = T::from_value(probe, column_type.scale())
                .ok_or_else(|| type_mismatch(column_type, probe))?;

            index.lookup(converted)
        })
    }

    fn len(&self) -> usize {
        with_sorted!(self, index => index.len())
    }

    fn skipped(&self) -> usize {
        with_sorted!(self, index => index.skipped())
    }

    fn phase(&self) -> IndexPhase {
        with_sorted!(self, index => index.phase())
    }
}

const fn type_mismatch(expected: ColumnType, value: &Value) -> IndexError {
    IndexError::TypeMismatch {
        expected,
        found: value.tag(),
    }
}
