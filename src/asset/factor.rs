// ============================================================================
// Integer Factors
// Scalars accepted by asset multiplication and division
// ============================================================================

use super::errors::{AssetError, AssetResult};
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

/// A scalar that can multiply or divide an asset.
///
/// Only whole numbers qualify: fixed-point precision is never extended
/// implicitly, so `3.0` is accepted while `3.14` fails with
/// `NonIntegerFactor`.
pub trait Factor {
    fn into_factor(self) -> AssetResult<BigInt>;
}

macro_rules! impl_factor_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Factor for $t {
                #[inline]
                fn into_factor(self) -> AssetResult<BigInt> {
                    Ok(BigInt::from(self))
                }
            }
        )*
    };
}

impl_factor_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Factor for BigInt {
    fn into_factor(self) -> AssetResult<BigInt> {
        Ok(self)
    }
}

impl Factor for &BigInt {
    fn into_factor(self) -> AssetResult<BigInt> {
        Ok(self.clone())
    }
}

impl Factor for f64 {
    fn into_factor(self) -> AssetResult<BigInt> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(AssetError::NonIntegerFactor);
        }
        BigInt::from_f64(self).ok_or(AssetError::NonIntegerFactor)
    }
}

impl Factor for f32 {
    fn into_factor(self) -> AssetResult<BigInt> {
        f64::from(self).into_factor()
    }
}

impl Factor for Decimal {
    /// Integral decimals only, whatever their scale (`3.00` is fine).
    fn into_factor(self) -> AssetResult<BigInt> {
        let normalized = self.normalize();
        if normalized.scale() != 0 {
            return Err(AssetError::NonIntegerFactor);
        }
        Ok(BigInt::from(normalized.mantissa()))
    }
}

impl Factor for &str {
    /// An optionally negative run of ASCII digits, e.g. `"-3"`.
    fn into_factor(self) -> AssetResult<BigInt> {
        let digits = self.strip_prefix('-').unwrap_or(self);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AssetError::NonIntegerFactor);
        }
        BigInt::parse_bytes(self.as_bytes(), 10).ok_or(AssetError::NonIntegerFactor)
    }
}

impl Factor for &String {
    fn into_factor(self) -> AssetResult<BigInt> {
        self.as_str().into_factor()
    }
}
