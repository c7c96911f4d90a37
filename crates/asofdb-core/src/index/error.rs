use crate::{block::BlockError, types::ColumnType, value::ValueTag};
use asofdb_primitives::ScalarKind;
use std::fmt;
use thiserror::Error as ThisError;

///
/// IndexError
///
/// Failures surfaced by as-of index construction, build and probe.
/// Every variant is deterministic; nothing here is transient or retried.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IndexError {
    #[error("unsupported type for as-of join: {column_type}")]
    UnsupportedType { column_type: ColumnType },

    #[error("cannot {operation} while the as-of index is {phase}")]
    InvalidState {
        operation: IndexOperation,
        phase: IndexPhase,
    },

    #[error("cannot convert {found} value to {expected} without loss")]
    TypeMismatch {
        expected: ColumnType,
        found: ValueTag,
    },

    #[error("as-of index over {expected} cannot read column '{name}' of type {found}")]
    ColumnMismatch {
        name: String,
        expected: ScalarKind,
        found: ColumnType,
    },

    #[error(transparent)]
    Block(#[from] BlockError),
}

///
/// IndexOperation
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexOperation {
    Append,
    Lookup,
}

impl fmt::Display for IndexOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Append => "append",
            Self::Lookup => "lookup",
        };
        write!(f, "{label}")
    }
}

///
/// IndexPhase
///
/// Build phase accepts appends; the finalized phase accepts lookups.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IndexPhase {
    #[default]
    Building,
    Finalized,
}

impl IndexPhase {
    /// Operation this phase permits.
    #[must_use]
    pub const fn permits(self, operation: IndexOperation) -> bool {
        matches!(
            (self, operation),
            (Self::Building, IndexOperation::Append) | (Self::Finalized, IndexOperation::Lookup)
        )
    }
}

impl fmt::Display for IndexPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Building => "building",
            Self::Finalized => "finalized",
        };
        write!(f, "{label}")
    }
}
