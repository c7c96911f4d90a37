use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Inequality
///
/// Relation an indexed value must satisfy against the probe value.
/// `LessOrEquals` reads as "entry ≤ probe": the most recent row at or
/// before the probe. `GreaterOrEquals` is the earliest row at or after it.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inequality {
    LessOrEquals,
    Less,
    GreaterOrEquals,
    Greater,
}

impl Inequality {
    pub const ALL: [Self; 4] = [
        Self::LessOrEquals,
        Self::Less,
        Self::GreaterOrEquals,
        Self::Greater,
    ];

    /// Parse a comparison operator as written in a join condition.
    #[must_use]
    pub fn from_operator(operator: &str) -> Option<Self> {
        match operator.trim() {
            "<=" => Some(Self::LessOrEquals),
            "<" => Some(Self::Less),
            ">=" => Some(Self::GreaterOrEquals),
            ">" => Some(Self::Greater),
            _ => None,
        }
    }

    /// Operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LessOrEquals => "<=",
            Self::Less => "<",
            Self::GreaterOrEquals => ">=",
            Self::Greater => ">",
        }
    }

    /// Same relation with its operands swapped (`a <= b` ⇔ `b >= a`).
    ///
    /// Join conditions name the probe column on either side; the index always
    /// evaluates "entry ⊙ probe".
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::LessOrEquals => Self::GreaterOrEquals,
            Self::Less => Self::Greater,
            Self::GreaterOrEquals => Self::LessOrEquals,
            Self::Greater => Self::Less,
        }
    }

    /// Floor searches pick the greatest match; ceiling searches the smallest.
    #[must_use]
    pub const fn is_floor(self) -> bool {
        matches!(self, Self::LessOrEquals | Self::Less)
    }

    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Less | Self::Greater)
    }

    // Partition point lands after entries equal to the probe for `<=` (last
    // tie is the floor) and `>` (first entry past the ties is the ceiling).
    pub(crate) const fn splits_after_ties(self) -> bool {
        self.is_floor() != self.is_strict()
    }
}

impl fmt::Display for Inequality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// FixedInequality
///
/// Type-level inequality. `SortedIndex` is generic over it so the search
/// direction is resolved at compile time rather than per probe.
///

pub trait FixedInequality: Send + Sync + 'static {
    const INEQUALITY: Inequality;
}

pub mod markers {
    //! Marker types selecting an [`Inequality`](super::Inequality) at compile time.

    use super::{FixedInequality, Inequality};

    macro_rules! inequality_marker {
        ( $( $name:ident ),* $(,)? ) => {
            $(
                #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
                pub struct $name;

                impl FixedInequality for $name {
                    const INEQUALITY: Inequality = Inequality::$name;
                }
            )*
        };
    }

    inequality_marker!(LessOrEquals, Less, GreaterOrEquals, Greater);
}
