mod column_type;
mod datetime;
mod decimal;

#[cfg(test)]
mod tests;

pub use column_type::ColumnType;
pub use datetime::{DateTime64, Timestamp};
pub use decimal::{Decimal, Decimal32, Decimal64, Decimal128, DecimalParts};

///
/// CONSTANTS
///

/// Powers of ten addressable by an `i128` mantissa (10^0 ..= 10^38).
pub(crate) const MAX_POW10_EXPONENT: u32 = 38;

/// Exact power of ten, or `None` once it no longer fits an `i128`.
#[must_use]
pub(crate) fn pow10(exponent: u32) -> Option<i128> {
    if exponent > MAX_POW10_EXPONENT {
        return None;
    }

    10i128.checked_pow(exponent)
}

/// Move a fixed-point mantissa between scales without losing digits.
///
/// Returns `None` when downscaling would drop a non-zero remainder or
/// upscaling overflows.
#[must_use]
pub(crate) fn rescale_exact(mantissa: i128, from_scale: u32, to_scale: u32) -> Option<i128> {
    if mantissa == 0 {
        return Some(0);
    }

    if to_scale >= from_scale {
        let factor = pow10(to_scale - from_scale)?;
        return mantissa.checked_mul(factor);
    }

    let divisor = pow10(from_scale - to_scale)?;
    if mantissa % divisor != 0 {
        return None;
    }

    Some(mantissa / divisor)
}
