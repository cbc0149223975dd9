// ============================================================================
// Asset Arithmetic
// Exact scaled-integer operations and unit-aware comparison
// ============================================================================

use super::errors::{AssetError, AssetResult};
use super::factor::Factor;
use super::parse::IntoAsset;
use super::value::Asset;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

impl Asset {
    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition of a unit-compatible operand.
    ///
    /// # Errors
    /// - `UnitMismatch` if symbol or precision differ
    /// - `MagnitudeOutOfRange` if the sum leaves the protocol range
    /// - any parse error of a textual operand
    pub fn checked_add<'a>(&self, rhs: impl IntoAsset<'a>) -> AssetResult<Self> {
        let rhs = rhs.into_asset()?;
        self.ensure_compatible(&rhs)?;
        let result = self.with_magnitude(&self.magnitude + &rhs.magnitude)?;
        tracing::trace!(lhs = %self, rhs = %rhs, result = %result, "asset add");
        Ok(result)
    }

    /// Checked subtraction of a unit-compatible operand.
    ///
    /// # Errors
    /// Same as [`Asset::checked_add`].
    pub fn checked_sub<'a>(&self, rhs: impl IntoAsset<'a>) -> AssetResult<Self> {
        let rhs = rhs.into_asset()?;
        self.ensure_compatible(&rhs)?;
        let result = self.with_magnitude(&self.magnitude - &rhs.magnitude)?;
        tracing::trace!(lhs = %self, rhs = %rhs, result = %result, "asset sub");
        Ok(result)
    }

    /// Multiply by an integer; symbol and precision are unchanged.
    ///
    /// # Errors
    /// - `NonIntegerFactor` if `factor` is not a whole number
    /// - `MagnitudeOutOfRange` if the product leaves the protocol range
    pub fn checked_mul(&self, factor: impl Factor) -> AssetResult<Self> {
        let factor = factor.into_factor()?;
        let result = self.with_magnitude(&self.magnitude * &factor)?;
        tracing::trace!(lhs = %self, %factor, result = %result, "asset mul");
        Ok(result)
    }

    /// Divide by an integer, truncating toward zero.
    ///
    /// The precision is kept, so `6.00 USD / 4` is `1.50 USD` while
    /// `1.23 EOS / 10` is `0.12 EOS`.
    ///
    /// # Errors
    /// - `NonIntegerFactor` if `divisor` is not a whole number
    /// - `DivisionByZero` if `divisor` is zero
    pub fn checked_div(&self, divisor: impl Factor) -> AssetResult<Self> {
        let divisor = divisor.into_factor()?;
        if divisor.is_zero() {
            tracing::debug!(asset = %self, "asset division by zero");
            return Err(AssetError::DivisionByZero);
        }
        let result = self.with_magnitude(&self.magnitude / &divisor)?;
        tracing::trace!(lhs = %self, %divisor, result = %result, "asset div");
        Ok(result)
    }

    /// Negation; the range is symmetric so this only fails on a corrupt value.
    pub fn checked_neg(&self) -> AssetResult<Self> {
        self.with_magnitude(-&self.magnitude)
    }

    /// Absolute value.
    pub fn abs(&self) -> AssetResult<Self> {
        self.with_magnitude(self.magnitude.abs())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Order two unit-compatible assets by magnitude.
    ///
    /// # Errors
    /// `UnitMismatch` if symbol or precision differ.
    pub fn compare<'a>(&self, other: impl IntoAsset<'a>) -> AssetResult<Ordering> {
        let other = other.into_asset()?;
        self.ensure_compatible(&other)?;
        Ok(self.magnitude.cmp(&other.magnitude))
    }

    /// Structural equality; assets of different units are simply unequal.
    ///
    /// Fails only when a textual operand does not parse.
    pub fn equals<'a>(&self, other: impl IntoAsset<'a>) -> AssetResult<bool> {
        let other = other.into_asset()?;
        Ok(*self == *other)
    }

    pub fn greater_than<'a>(&self, other: impl IntoAsset<'a>) -> AssetResult<bool> {
        self.compare(other).map(Ordering::is_gt)
    }

    pub fn less_than<'a>(&self, other: impl IntoAsset<'a>) -> AssetResult<bool> {
        self.compare(other).map(Ordering::is_lt)
    }

    pub fn greater_or_equal<'a>(&self, other: impl IntoAsset<'a>) -> AssetResult<bool> {
        self.compare(other).map(Ordering::is_ge)
    }

    pub fn less_or_equal<'a>(&self, other: impl IntoAsset<'a>) -> AssetResult<bool> {
        self.compare(other).map(Ordering::is_le)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Asset {
    /// `None` unless the units match.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_compatible(other) {
            Some(self.magnitude.cmp(&other.magnitude))
        } else {
            None
        }
    }
}
