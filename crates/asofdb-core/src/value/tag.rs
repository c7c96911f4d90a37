use crate::value::Value;
use std::fmt;

///
/// ValueTag
///
/// Canonical value-variant tag used by diagnostics and conversion errors.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Blob = 1,
    Bool = 2,
    Decimal = 3,
    Float32 = 4,
    Float64 = 5,
    Int = 6,
    Int128 = 7,
    Null = 8,
    Text = 9,
    Timestamp = 10,
    Uint = 11,
    Uint128 = 12,
    Uuid = 13,
}

impl ValueTag {
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Decimal => "Decimal",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Int => "Int",
            Self::Int128 => "Int128",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Timestamp => "Timestamp",
            Self::Uint => "Uint",
            Self::Uint128 => "Uint128",
            Self::Uuid => "Uuid",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Blob(_) => ValueTag::Blob,
        Value::Bool(_) => ValueTag::Bool,
        Value::Decimal(_) => ValueTag::Decimal,
        Value::Float32(_) => ValueTag::Float32,
        Value::Float64(_) => ValueTag::Float64,
        Value::Int(_) => ValueTag::Int,
        Value::Int128(_) => ValueTag::Int128,
        Value::Null => ValueTag::Null,
        Value::Text(_) => ValueTag::Text,
        Value::Timestamp(_) => ValueTag::Timestamp,
        Value::Uint(_) => ValueTag::Uint,
        Value::Uint128(_) => ValueTag::Uint128,
        Value::Uuid(_) => ValueTag::Uuid,
    }
}
