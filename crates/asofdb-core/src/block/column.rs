use crate::{
    block::BlockError,
    types::{ColumnType, Decimal, Timestamp},
    value::{Value, ValueTag},
};

///
/// ColumnData
///
/// Typed column storage. Each ordering kind has a dense native vector;
/// every other column type is carried as generic values.
///

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Decimal32(Vec<i32>),
    Decimal64(Vec<i64>),
    Decimal128(Vec<i128>),
    DateTime64(Vec<i64>),
    Values(Vec<Value>),
}

impl ColumnData {
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::UInt8(v) => v.len(),
            Self::UInt16(v) => v.len(),
            Self::UInt32(v) => v.len(),
            Self::UInt64(v) => v.len(),
            Self::Int8(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::Int32(v) | Self::Decimal32(v) => v.len(),
            Self::Int64(v) | Self::Decimal64(v) | Self::DateTime64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Decimal128(v) => v.len(),
            Self::Values(v) => v.len(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Diagnostic label of the storage variant.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UInt8(_) => "UInt8",
            Self::UInt16(_) => "UInt16",
            Self::UInt32(_) => "UInt32",
            Self::UInt64(_) => "UInt64",
            Self::Int8(_) => "Int8",
            Self::Int16(_) => "Int16",
            Self::Int32(_) => "Int32",
            Self::Int64(_) => "Int64",
            Self::Float32(_) => "Float32",
            Self::Float64(_) => "Float64",
            Self::Decimal32(_) => "Decimal32",
            Self::Decimal64(_) => "Decimal64",
            Self::Decimal128(_) => "Decimal128",
            Self::DateTime64(_) => "DateTime64",
            Self::Values(_) => "Values",
        }
    }

    // Storage variant required for a column type; `Values` for every type
    // without a dense representation.
    const fn accepts(&self, column_type: ColumnType) -> bool {
        matches!(
            (column_type, self),
            (ColumnType::UInt8, Self::UInt8(_))
                | (ColumnType::UInt16, Self::UInt16(_))
                | (ColumnType::UInt32, Self::UInt32(_))
                | (ColumnType::UInt64, Self::UInt64(_))
                | (ColumnType::Int8, Self::Int8(_))
                | (ColumnType::Int16, Self::Int16(_))
                | (ColumnType::Int32, Self::Int32(_))
                | (ColumnType::Int64, Self::Int64(_))
                | (ColumnType::Float32, Self::Float32(_))
                | (ColumnType::Float64, Self::Float64(_))
                | (ColumnType::Decimal32 { .. }, Self::Decimal32(_))
                | (ColumnType::Decimal64 { .. }, Self::Decimal64(_))
                | (ColumnType::Decimal128 { .. }, Self::Decimal128(_))
                | (ColumnType::DateTime64 { .. }, Self::DateTime64(_))
                | (
                    ColumnType::Blob
                        | ColumnType::Bool
                        | ColumnType::Date
                        | ColumnType::DateTime
                        | ColumnType::Int128
                        | ColumnType::Text
                        | ColumnType::UInt128
                        | ColumnType::Uuid,
                    Self::Values(_)
                )
        )
    }
}

///
/// Column
///

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    data: ColumnData,
}

impl Column {
    /// Build a column, checking the storage variant against the declared type.
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        data: ColumnData,
    ) -> Result<Self, BlockError> {
        let name = name.into();

        if !data.accepts(column_type) {
            return Err(BlockError::ColumnDataMismatch {
                name,
                column_type,
                found: data.label(),
            });
        }
        if let ColumnData::Values(values) = &data
            && let Some(bad) = values
                .iter()
                .find(|value| !value_fits(column_type, value.tag()))
        {
            return Err(BlockError::ColumnValueMismatch {
                name,
                column_type,
                found: bad.tag(),
            });
        }

        Ok(Self {
            name,
            column_type,
            data,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        self.column_type
    }

    #[must_use]
    pub const fn data(&self) -> &ColumnData {
        &self.data
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read one row as a generic value, or `None` past the end.
    #[must_use]
    pub fn value(&self, row: usize) -> Option<Value> {
        let scale = self.column_type.scale();

        let value = match &self.data {
            ColumnData::UInt8(v) => Value::Uint(u64::from(*v.get(row)?)),
            ColumnData::UInt16(v) => Value::Uint(u64::from(*v.get(row)?)),
            ColumnData::UInt32(v) => Value::Uint(u64::from(*v.get(row)?)),
            ColumnData::UInt64(v) => Value::Uint(*v.get(row)?),
            ColumnData::Int8(v) => Value::Int(i64::from(*v.get(row)?)),
            ColumnData::Int16(v) => Value::Int(i64::from(*v.get(row)?)),
            ColumnData::Int32(v) => Value::Int(i64::from(*v.get(row)?)),
            ColumnData::Int64(v) => Value::Int(*v.get(row)?),
            ColumnData::Float32(v) => Value::Float32(*v.get(row)?),
            ColumnData::Float64(v) => Value::Float64(*v.get(row)?),
            ColumnData::Decimal32(v) => {
                Value::Decimal(Decimal::new(i128::from(*v.get(row)?), scale))
            }
            ColumnData::Decimal64(v) => {
                Value::Decimal(Decimal::new(i128::from(*v.get(row)?), scale))
            }
            ColumnData::Decimal128(v) => Value::Decimal(Decimal::new(*v.get(row)?, scale)),
            ColumnData::DateTime64(v) => Value::Timestamp(Timestamp::new(*v.get(row)?, scale)),
            ColumnData::Values(v) => v.get(row)?.clone(),
        };

        Some(value)
    }
}

// Generic-value columns accept NULL plus the tag natural to their type.
const fn value_fits(column_type: ColumnType, tag: ValueTag) -> bool {
    matches!(
        (column_type, tag),
        (_, ValueTag::Null)
            | (ColumnType::Blob, ValueTag::Blob)
            | (ColumnType::Bool, ValueTag::Bool)
            | (ColumnType::Date | ColumnType::DateTime, ValueTag::Timestamp)
            | (ColumnType::Int128, ValueTag::Int128)
            | (ColumnType::Text, ValueTag::Text)
            | (ColumnType::UInt128, ValueTag::Uint128)
            | (ColumnType::Uuid, ValueTag::Uuid)
    )
}
