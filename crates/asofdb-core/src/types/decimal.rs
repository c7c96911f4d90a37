use crate::types::rescale_exact;
use derive_more::{Display, From};
use std::fmt;

///
/// DecimalParts
///
/// Canonical decomposition of a Decimal.
///
/// Invariant:
/// - value == mantissa * 10^-scale
/// - mantissa carries the sign
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecimalParts {
    pub mantissa: i128,
    pub scale: u32,
}

///
/// Decimal
///
/// Scale-carrying fixed-point scalar used for generic values.
/// Equality is numeric: `1.50` and `1.5` compare equal.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

impl Decimal {
    pub const ZERO: Self = Self {
        mantissa: 0,
        scale: 0,
    };

    /// Construct a decimal from mantissa and scale.
    #[must_use]
    pub const fn new(mantissa: i128, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Decompose into mantissa and scale.
    #[must_use]
    pub const fn parts(&self) -> DecimalParts {
        DecimalParts {
            mantissa: self.mantissa,
            scale: self.scale,
        }
    }

    /// Returns the mantissa component.
    #[must_use]
    pub const fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Returns the number of fractional decimal places.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns true if the decimal has no fractional component.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.to_integer().is_some()
    }

    /// Integral value, or `None` if a fractional remainder exists.
    #[must_use]
    pub fn to_integer(&self) -> Option<i128> {
        rescale_exact(self.mantissa, self.scale, 0)
    }

    /// Mantissa at `target_scale`, or `None` if digits would be lost or the
    /// result overflows.
    #[must_use]
    pub fn rescale(&self, target_scale: u32) -> Option<i128> {
        rescale_exact(self.mantissa, self.scale, target_scale)
    }

    /// Strip trailing fractional zeros.
    #[must_use]
    pub const fn normalize(&self) -> Self {
        let mut mantissa = self.mantissa;
        let mut scale = self.scale;
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }

        Self { mantissa, scale }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.normalize().parts() == other.normalize().parts()
    }
}

impl Eq for Decimal {}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);

        write!(f, "{sign}{whole}.{fraction}")
    }
}

// Column-native decimal mantissas. The scale lives on the column type, so
// values of one column compare as plain integers.
macro_rules! native_decimal {
    ( $( $(#[$meta:meta])* $name:ident($repr:ty) ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
            #[repr(transparent)]
            pub struct $name($repr);

            impl $name {
                #[must_use]
                pub const fn from_mantissa(mantissa: $repr) -> Self {
                    Self(mantissa)
                }

                #[must_use]
                pub const fn mantissa(self) -> $repr {
                    self.0
                }

                /// Attach a column scale to produce a generic decimal.
                #[must_use]
                pub fn to_decimal(self, scale: u32) -> Decimal {
                    Decimal::new(i128::from(self.0), scale)
                }
            }
        )*
    };
}

native_decimal! {
    /// 32-bit fixed-point mantissa.
    Decimal32(i32),
    /// 64-bit fixed-point mantissa.
    Decimal64(i64),
    /// 128-bit fixed-point mantissa.
    Decimal128(i128),
}
