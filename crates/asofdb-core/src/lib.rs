//! Core runtime for asofdb: typed as-of join indexes over immutable column
//! blocks, plus the values, storage and observability they rely on.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod block;
pub mod config;
pub mod error;
pub mod index;
pub mod obs;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Vocabulary needed to build and probe an as-of index.
///

pub mod prelude {
    pub use crate::{
        block::{Block, Column, ColumnData, RowLocator},
        config::IndexConfig,
        index::{Inequality, TypedIndexHandle},
        types::ColumnType,
        value::Value,
    };
}
