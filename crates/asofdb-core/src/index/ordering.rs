use crate::{
    block::ColumnData,
    types::{DateTime64, Decimal32, Decimal64, Decimal128},
    value::Value,
};
use asofdb_primitives::ScalarKind;
use std::{cmp::Ordering, fmt::Debug};

///
/// OrderingValue
///
/// Concrete scalar an as-of index can be keyed by.
///
/// Implementations exist for the closed kind set only; the column scale
/// (decimals) or precision (`DateTime64`) is supplied by the caller because
/// it belongs to the column type, not to each value.
///

pub trait OrderingValue: Copy + Debug + Send + Sync + 'static {
    /// Scalar tag this Rust type represents.
    const KIND: ScalarKind;

    /// Lossless conversion from a non-null generic value at `scale`.
    fn from_value(value: &Value, scale: u32) -> Option<Self>;

    /// Read row `row` from column storage of the matching dense variant.
    fn from_column(data: &ColumnData, row: usize) -> Option<Self>;

    /// Total order over orderable values.
    fn cmp_ordering(&self, other: &Self) -> Ordering;

    /// False for values that must never match (floating NaN).
    fn is_orderable(&self) -> bool {
        true
    }
}

macro_rules! integer_ordering_value {
    ( $( $ty:ty => $kind:ident ),* $(,)? ) => {
        $(
            impl OrderingValue for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn from_value(value: &Value, _scale: u32) -> Option<Self> {
                    value
                        .to_exact_integer()
                        .and_then(|n| Self::try_from(n).ok())
                }

                fn from_column(data: &ColumnData, row: usize) -> Option<Self> {
                    match data {
                        ColumnData::$kind(values) => values.get(row).copied(),
                        _ => None,
                    }
                }

                fn cmp_ordering(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

integer_ordering_value! {
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
}

macro_rules! float_ordering_value {
    ( $( $ty:ty => $kind:ident, $exact:ident ),* $(,)? ) => {
        $(
            impl OrderingValue for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn from_value(value: &Value, _scale: u32) -> Option<Self> {
                    value.$exact()
                }

                fn from_column(data: &ColumnData, row: usize) -> Option<Self> {
                    match data {
                        ColumnData::$kind(values) => values.get(row).copied(),
                        _ => None,
                    }
                }

                // NaN never reaches a comparison: appends drop it and probes
                // short-circuit, so partial_cmp is total here. -0.0 == +0.0.
                fn cmp_ordering(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or(Ordering::Equal)
                }

                fn is_orderable(&self) -> bool {
                    !self.is_nan()
                }
            }
        )*
    };
}

float_ordering_value! {
    f32 => Float32, to_exact_f32,
    f64 => Float64, to_exact_f64,
}

macro_rules! scaled_ordering_value {
    ( $( $ty:ident($repr:ty) ),* $(,)? ) => {
        $(
            impl OrderingValue for $ty {
                const KIND: ScalarKind = ScalarKind::$ty;

                fn from_value(value: &Value, scale: u32) -> Option<Self> {
                    let mantissa = value.to_exact_mantissa(scale)?;
                    <$repr>::try_from(mantissa).ok().map(Self::from)
                }

                fn from_column(data: &ColumnData, row: usize) -> Option<Self> {
                    match data {
                        ColumnData::$ty(values) => values.get(row).copied().map(Self::from),
                        _ => None,
                    }
                }

                fn cmp_ordering(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

scaled_ordering_value! {
    Decimal32(i32),
    Decimal64(i64),
    Decimal128(i128),
}

impl OrderingValue for DateTime64 {
    const KIND: ScalarKind = ScalarKind::DateTime64;

    // Only instants convert: a bare integer carries no unit.
    fn from_value(value: &Value, precision: u32) -> Option<Self> {
        match value {
            Value::Timestamp(ts) => ts.rescale(precision).map(Self::from_ticks),
            _ => None,
        }
    }

    fn from_column(data: &ColumnData, row: usize) -> Option<Self> {
        match data {
            ColumnData::DateTime64(values) => values.get(row).copied().map(Self::from_ticks),
            _ => None,
        }
    }

    fn cmp_ordering(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
