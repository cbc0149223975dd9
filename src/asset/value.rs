// ============================================================================
// Asset Core
// Symbol-tagged fixed-point amount and its validation rules
// ============================================================================

use super::errors::{AssetError, AssetResult, Mismatch};
use super::symbol::Symbol;
use crate::config::AssetLimits;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// Maximum number of digits after the decimal point
pub const MAX_PRECISION: u8 = 18;

/// Largest magnitude a chain accepts: 2^62 - 1
pub const MAX_AMOUNT: i64 = (1 << 62) - 1;

/// Fixed-point token amount tagged with its symbol, e.g. `10.0012 EOS`.
///
/// Stores `value × 10^precision` as an arbitrary-precision signed integer,
/// so `10.0012 EOS` is magnitude `100012`, precision `4`, symbol `EOS`.
///
/// Every live instance satisfies:
/// - the symbol matches `^[A-Z]{1,7}$`
/// - `precision <= MAX_PRECISION`
/// - `-MAX_AMOUNT <= magnitude <= MAX_AMOUNT`
///
/// All operations are non-destructive and return a freshly validated value.
///
/// # Example
/// ```
/// use eos_asset::Asset;
///
/// let balance: Asset = "10.0012 EOS".parse()?;
/// let fee: Asset = "0.0012 EOS".parse()?;
/// assert_eq!(balance.checked_sub(&fee)?.to_string(), "10.0000 EOS");
/// # Ok::<(), eos_asset::AssetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asset {
    pub(super) magnitude: BigInt,
    pub(super) symbol: Symbol,
    pub(super) precision: u8,
}

impl Asset {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an explicit (magnitude, symbol, precision) triple.
    ///
    /// # Errors
    /// - `InvalidSymbol` if `symbol` fails the grammar
    /// - `InvalidPrecision` if `precision > MAX_PRECISION`
    /// - `MagnitudeOutOfRange` if `|magnitude| > MAX_AMOUNT`
    pub fn new(magnitude: impl Into<BigInt>, symbol: &str, precision: u8) -> AssetResult<Self> {
        let symbol = Symbol::new(symbol).inspect_err(|_| {
            tracing::debug!(symbol, "rejected asset symbol");
        })?;
        Self::with_symbol(magnitude, symbol, precision)
    }

    /// Create from an already validated symbol.
    pub fn with_symbol(
        magnitude: impl Into<BigInt>,
        symbol: Symbol,
        precision: u8,
    ) -> AssetResult<Self> {
        let asset = Self {
            magnitude: magnitude.into(),
            symbol,
            precision,
        };
        asset.validate()?;
        Ok(asset)
    }

    /// Zero amount of the given unit.
    pub fn zero(symbol: &str, precision: u8) -> AssetResult<Self> {
        Self::new(BigInt::zero(), symbol, precision)
    }

    /// Same unit as `self`, new magnitude, validated.
    pub(super) fn with_magnitude(&self, magnitude: BigInt) -> AssetResult<Self> {
        Self::with_symbol(magnitude, self.symbol, self.precision)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The amount scaled by `10^precision`.
    #[inline]
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    #[inline]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check every invariant against the protocol bounds.
    ///
    /// Checks run in order: symbol, precision, magnitude.
    pub fn validate(&self) -> AssetResult<()> {
        self.check_limits(&AssetLimits::eosio())
    }

    /// Check every invariant against caller-supplied (usually tighter) limits.
    ///
    /// # Errors
    /// `InvalidSymbol`, `InvalidPrecision` or `MagnitudeOutOfRange`, whichever
    /// fails first.
    pub fn check_limits(&self, limits: &AssetLimits) -> AssetResult<()> {
        if !Symbol::is_valid(self.symbol.as_str()) {
            tracing::debug!(symbol = %self.symbol, "asset symbol fails the grammar");
            return Err(AssetError::InvalidSymbol);
        }
        if self.precision > limits.max_precision.min(MAX_PRECISION) {
            tracing::debug!(
                symbol = %self.symbol,
                precision = self.precision,
                max_precision = limits.max_precision,
                "asset precision out of bounds"
            );
            return Err(AssetError::InvalidPrecision);
        }
        if !magnitude_within(&self.magnitude, limits.max_amount.min(MAX_AMOUNT)) {
            tracing::debug!(
                symbol = %self.symbol,
                magnitude = %self.magnitude,
                "asset magnitude out of range"
            );
            return Err(AssetError::MagnitudeOutOfRange);
        }
        Ok(())
    }

    /// Two assets are unit-compatible when symbol and precision both match.
    #[inline]
    pub fn is_compatible(&self, other: &Asset) -> bool {
        self.symbol == other.symbol && self.precision == other.precision
    }

    /// Require unit compatibility, reporting which half of the unit differs.
    pub fn ensure_compatible(&self, other: &Asset) -> AssetResult<()> {
        let mismatch = if self.precision != other.precision {
            Mismatch::Precision
        } else if self.symbol != other.symbol {
            Mismatch::Symbol
        } else {
            return Ok(());
        };
        tracing::debug!(
            left = %self,
            right = %other,
            ?mismatch,
            "operands are not unit-compatible"
        );
        Err(AssetError::UnitMismatch(mismatch))
    }
}

/// `-max <= magnitude <= max` without allocating a bound.
fn magnitude_within(magnitude: &BigInt, max: i64) -> bool {
    match magnitude.to_i64() {
        Some(value) => max >= 0 && value.unsigned_abs() <= max as u64,
        None => false,
    }
}
