mod tag;


use crate::types::{Decimal, DecimalParts, Timestamp};
use std::fmt;

// re-exports
pub use tag::ValueTag;

///
/// CONSTANTS
///

// 2^127; every finite integral f64 strictly below this (and at or above its
// negation) converts to i128 without saturation.
#[allow(clippy::cast_precision_loss)]
const I128_LIMIT: f64 = i128::MAX as f64;

///
/// Value
///
/// Generic scalar exchanged with the join engine: build-side ordering
/// values, probe values, and row read-back.
///
/// Null → SQL NULL; never satisfies an as-of inequality.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Decimal(Decimal),
    Float32(f32),
    Float64(f64),
    Int(i64),
    Int128(i128),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
    Uint128(u128),
    Uuid(u128),
}

impl Value {
    /// Canonical variant tag.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    ///
    /// EXACT NUMERIC VIEWS
    ///
    /// Each view succeeds only when the value is represented without loss;
    /// otherwise the caller reports a type mismatch.
    ///

    /// Exact integral value.
    #[must_use]
    pub fn to_exact_integer(&self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(i128::from(*v)),
            Self::Uint(v) => Some(i128::from(*v)),
            Self::Int128(v) => Some(*v),
            Self::Uint128(v) => i128::try_from(*v).ok(),
            Self::Float32(v) => float_to_exact_integer(f64::from(*v)),
            Self::Float64(v) => float_to_exact_integer(*v),
            Self::Decimal(d) => d.to_integer(),
            _ => None,
        }
    }

    /// Exact `f64` view. NaN passes through unchanged.
    #[must_use]
    pub fn to_exact_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(v) => Some(*v),
            Self::Float32(v) => Some(f64::from(*v)),
            Self::Decimal(d) => decimal_to_exact_f64(*d),
            other => other.to_exact_integer().and_then(integer_to_exact_f64),
        }
    }

    /// Exact `f32` view. NaN passes through unchanged.
    #[must_use]
    pub fn to_exact_f32(&self) -> Option<f32> {
        match self {
            Self::Float32(v) => Some(*v),
            Self::Float64(v) => f64_to_exact_f32(*v),
            Self::Decimal(d) => decimal_to_exact_f64(*d).and_then(f64_to_exact_f32),
            other => other.to_exact_integer().and_then(integer_to_exact_f32),
        }
    }

    /// Exact fixed-point mantissa at `scale`.
    #[must_use]
    pub fn to_exact_mantissa(&self, scale: u32) -> Option<i128> {
        match self {
            Self::Decimal(d) => d.rescale(scale),
            Self::Float32(v) => float_to_exact_mantissa(f64::from(*v), scale),
            Self::Float64(v) => float_to_exact_mantissa(*v, scale),
            other => {
                let integer = other.to_exact_integer()?;
                Decimal::new(integer, 0).rescale(scale)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob(bytes) => write!(f, "blob({} bytes)", bytes.len()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Int128(v) => write!(f, "{v}"),
            Self::Null => f.write_str("NULL"),
            Self::Text(v) => write!(f, "'{v}'"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Uint128(v) => write!(f, "{v}"),
            Self::Uuid(v) => write!(f, "{v:032x}"),
        }
    }
}

macro_rules! value_from {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    Decimal => Decimal,
    f32 => Float32,
    f64 => Float64,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    i128 => Int128,
    String => Text,
    &str => Text,
    Timestamp => Timestamp,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
}

///
/// NUMERIC HELPERS
///

#[allow(clippy::cast_possible_truncation)]
fn float_to_exact_integer(v: f64) -> Option<i128> {
    if !v.is_finite() || v.fract() != 0.0 {
        return None;
    }
    if v >= I128_LIMIT || v < -I128_LIMIT {
        return None;
    }

    Some(v as i128)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
fn integer_to_exact_f64(n: i128) -> Option<f64> {
    let f = n as f64;
    if f >= I128_LIMIT {
        return None;
    }

    (f as i128 == n).then_some(f)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn integer_to_exact_f32(n: i128) -> Option<f32> {
    let f = n as f32;
    if f64::from(f) >= I128_LIMIT {
        return None;
    }

    (f as i128 == n).then_some(f)
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn f64_to_exact_f32(v: f64) -> Option<f32> {
    if v.is_nan() {
        return Some(f32::NAN);
    }

    let narrowed = v as f32;
    (f64::from(narrowed) == v).then_some(narrowed)
}

// Fixed-point mantissa at `scale` equal to `v`, computed on the binary
// decomposition `v = significand * 2^exponent`.
#[allow(clippy::float_cmp)]
fn float_to_exact_mantissa(v: f64, scale: u32) -> Option<i128> {
    if !v.is_finite() {
        return None;
    }
    if v == 0.0 {
        return Some(0);
    }

    let bits = v.to_bits();
    let biased = i32::try_from((bits >> 52) & 0x7ff).ok()?;
    let fraction = i128::from(bits & ((1u64 << 52) - 1));
    let (mut significand, mut exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };

    let zeros = significand.trailing_zeros();
    significand >>= zeros;
    exponent += i32::try_from(zeros).ok()?;

    // v * 10^scale = significand * 5^scale * 2^(exponent + scale), and the
    // significand is odd, so the product is integral iff the shift is >= 0.
    let shift = u32::try_from(i64::from(exponent) + i64::from(scale)).ok()?;
    let magnitude = significand
        .checked_mul(5i128.checked_pow(scale)?)?
        .checked_mul(2i128.checked_pow(shift)?)?;

    Some(if v.is_sign_negative() { -magnitude } else { magnitude })
}

// A reduced decimal m / 10^s is binary-representable only when 5^s divides m.
fn decimal_to_exact_f64(d: Decimal) -> Option<f64> {
    let DecimalParts { mantissa, scale } = d.normalize().parts();
    if scale == 0 {
        return integer_to_exact_f64(mantissa);
    }

    let fives = 5i128.checked_pow(scale)?;
    if mantissa % fives != 0 {
        return None;
    }

    let whole = integer_to_exact_f64(mantissa / fives)?;
    let v = whole / 2f64.powi(i32::try_from(scale).ok()?);

    (float_to_exact_mantissa(v, scale) == Some(mantissa)).then_some(v)
}
