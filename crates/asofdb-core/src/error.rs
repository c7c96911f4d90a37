use crate::{
    block::BlockError,
    config::ConfigError,
    index::IndexError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured error with a stable classification, for callers that route
/// failures from several layers through one type.
///

#[derive(Clone, Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Source error. The variant always corresponds to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct an index-origin invariant violation.
    pub fn index_invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvariantViolation, ErrorOrigin::Index, message)
    }

    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.class, ErrorClass::Unsupported)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///

#[derive(Clone, Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Block(BlockError),

    #[error("{0}")]
    Config(ConfigError),

    #[error("{0}")]
    Index(IndexError),
}

impl From<BlockError> for InternalError {
    fn from(err: BlockError) -> Self {
        let class = match err {
            BlockError::ColumnOutOfRange { .. } | BlockError::RowOutOfRange { .. } => {
                ErrorClass::NotFound
            }
            BlockError::ColumnDataMismatch { .. }
            | BlockError::ColumnValueMismatch { .. }
            | BlockError::RaggedColumn { .. } => ErrorClass::Corruption,
        };

        Self {
            class,
            origin: ErrorOrigin::Block,
            message: err.to_string(),
            detail: Some(ErrorDetail::Block(err)),
        }
    }
}

impl From<IndexError> for InternalError {
    fn from(err: IndexError) -> Self {
        // Storage faults surfaced through the index keep their block origin.
        if let IndexError::Block(inner) = err {
            return inner.into();
        }

        let class = match err {
            IndexError::UnsupportedType { .. } => ErrorClass::Unsupported,
            IndexError::InvalidState { .. } => ErrorClass::InvariantViolation,
            _ => ErrorClass::Conflict,
        };

        Self {
            class,
            origin: ErrorOrigin::Index,
            message: err.to_string(),
            detail: Some(ErrorDetail::Index(err)),
        }
    }
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        Self {
            class: ErrorClass::Invalid,
            origin: ErrorOrigin::Config,
            message: err.to_string(),
            detail: Some(ErrorDetail::Config(err)),
        }
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Conflict,
    Corruption,
    Invalid,
    InvariantViolation,
    NotFound,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Conflict => "conflict",
            Self::Corruption => "corruption",
            Self::Invalid => "invalid",
            Self::InvariantViolation => "invariant_violation",
            Self::NotFound => "not_found",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Layer an error was raised in.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Block,
    Config,
    Index,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Block => "block",
            Self::Config => "config",
            Self::Index => "index",
        };
        write!(f, "{label}")
    }
}
