//! Module: index
//! Responsibility: per-join-key as-of indexes: build, finalize, and
//! nearest-match lookup under one inequality.
//! Does not own: join-key hashing, probe iteration, or output assembly.
//! Boundary: consumes block rows through `RowLocator`; hands locators back.

mod error;
mod handle;
mod inequality;
mod ordering;
pub(crate) mod select;
mod sorted;


// re-exports
pub use error::{IndexError, IndexOperation, IndexPhase};
pub use handle::TypedIndexHandle;
pub use inequality::{FixedInequality, Inequality, markers};
pub use ordering::OrderingValue;
pub use select::OrderingKind;
pub use sorted::SortedIndex;
