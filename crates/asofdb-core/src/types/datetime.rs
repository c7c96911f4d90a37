use crate::types::{Decimal, rescale_exact};
use derive_more::{Display, From};
use std::fmt;

///
/// Timestamp
///
/// Precision-carrying instant used for generic values: `ticks` units of
/// 10^-precision seconds since the Unix epoch.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Timestamp {
    ticks: i64,
    precision: u32,
}

impl Timestamp {
    /// Construct from raw ticks at the given sub-second precision.
    #[must_use]
    pub const fn new(ticks: i64, precision: u32) -> Self {
        Self { ticks, precision }
    }

    /// Construct from whole seconds.
    #[must_use]
    pub const fn from_seconds(secs: i64) -> Self {
        Self::new(secs, 0)
    }

    /// Construct from milliseconds.
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self::new(ms, 3)
    }

    /// Construct from microseconds.
    #[must_use]
    pub const fn from_micros(us: i64) -> Self {
        Self::new(us, 6)
    }

    /// Construct from nanoseconds.
    #[must_use]
    pub const fn from_nanos(ns: i64) -> Self {
        Self::new(ns, 9)
    }

    #[must_use]
    pub const fn ticks(self) -> i64 {
        self.ticks
    }

    #[must_use]
    pub const fn precision(self) -> u32 {
        self.precision
    }

    /// Ticks at `target_precision`, or `None` when sub-unit ticks would be
    /// dropped or the result leaves the `i64` range.
    #[must_use]
    pub fn rescale(self, target_precision: u32) -> Option<i64> {
        let ticks = rescale_exact(i128::from(self.ticks), self.precision, target_precision)?;
        i64::try_from(ticks).ok()
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        let precision = self.precision.max(other.precision);
        match (self.rescale(precision), other.rescale(precision)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = Decimal::new(i128::from(self.ticks), self.precision);
        write!(f, "{seconds}s")
    }
}

///
/// DateTime64
///
/// Column-native 64-bit tick count; precision lives on the column type.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct DateTime64(i64);

impl DateTime64 {
    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    #[must_use]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Attach a column precision to produce a generic timestamp.
    #[must_use]
    pub const fn to_timestamp(self, precision: u32) -> Timestamp {
        Timestamp::new(self.0, precision)
    }
}
