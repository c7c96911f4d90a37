use asofdb_primitives::ScalarKind;
use std::fmt;

///
/// ColumnType
///
/// Runtime type tag of a stored column.
///
/// Scaled kinds carry their parameter inline: decimals their fractional
/// digit count, `DateTime64` its sub-second precision (0 = seconds,
/// 3 = milliseconds, 6 = microseconds, 9 = nanoseconds).
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnType {
    Blob,
    Bool,
    Date,
    DateTime,
    DateTime64 { precision: u32 },
    Decimal32 { scale: u32 },
    Decimal64 { scale: u32 },
    Decimal128 { scale: u32 },
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Text,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    Uuid,
}

impl ColumnType {
    /// Canonical scalar tag, dropping any scale parameter.
    #[must_use]
    pub const fn scalar_kind(self) -> ScalarKind {
        match self {
            Self::Blob => ScalarKind::Blob,
            Self::Bool => ScalarKind::Bool,
            Self::Date => ScalarKind::Date,
            Self::DateTime => ScalarKind::DateTime,
            Self::DateTime64 { .. } => ScalarKind::DateTime64,
            Self::Decimal32 { .. } => ScalarKind::Decimal32,
            Self::Decimal64 { .. } => ScalarKind::Decimal64,
            Self::Decimal128 { .. } => ScalarKind::Decimal128,
            Self::Float32 => ScalarKind::Float32,
            Self::Float64 => ScalarKind::Float64,
            Self::Int8 => ScalarKind::Int8,
            Self::Int16 => ScalarKind::Int16,
            Self::Int32 => ScalarKind::Int32,
            Self::Int64 => ScalarKind::Int64,
            Self::Int128 => ScalarKind::Int128,
            Self::Text => ScalarKind::Text,
            Self::UInt8 => ScalarKind::UInt8,
            Self::UInt16 => ScalarKind::UInt16,
            Self::UInt32 => ScalarKind::UInt32,
            Self::UInt64 => ScalarKind::UInt64,
            Self::UInt128 => ScalarKind::UInt128,
            Self::Uuid => ScalarKind::Uuid,
        }
    }

    /// Scale (decimals) or precision (`DateTime64`); 0 for unscaled kinds.
    #[must_use]
    pub const fn scale(self) -> u32 {
        match self {
            Self::DateTime64 { precision } => precision,
            Self::Decimal32 { scale } | Self::Decimal64 { scale } | Self::Decimal128 { scale } => {
                scale
            }
            _ => 0,
        }
    }

    /// Largest scale the kind's storage width can carry, if scaled.
    #[must_use]
    pub const fn max_scale(self) -> Option<u32> {
        match self {
            Self::Decimal32 { .. } => Some(9),
            Self::Decimal64 { .. } => Some(18),
            Self::Decimal128 { .. } => Some(38),
            Self::DateTime64 { .. } => Some(9),
            _ => None,
        }
    }

    /// Returns true when the scale parameter fits the storage width.
    #[must_use]
    pub const fn has_valid_scale(self) -> bool {
        match self.max_scale() {
            Some(max) => self.scale() <= max,
            None => true,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.scalar_kind();
        if kind.is_scaled() {
            write!(f, "{kind}({})", self.scale())
        } else {
            write!(f, "{kind}")
        }
    }
}
