// ============================================================================
// Asset Limits
// Validation bounds applied when parsing or re-checking assets
// ============================================================================

use crate::asset::{MAX_AMOUNT, MAX_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounds an asset must satisfy.
///
/// The protocol bounds (`MAX_PRECISION`, `MAX_AMOUNT`) always apply; limits
/// can only tighten them, e.g. to accept amounts for a token whose contract
/// allows fewer decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssetLimits {
    /// Maximum number of digits after the decimal point
    pub max_precision: u8,

    /// Maximum absolute magnitude (scaled value)
    pub max_amount: i64,
}

impl AssetLimits {
    /// Protocol limits: 18 decimals, magnitude up to 2^62 - 1
    pub const fn eosio() -> Self {
        Self {
            max_precision: MAX_PRECISION,
            max_amount: MAX_AMOUNT,
        }
    }

    /// Limits of the first generation of the type: at most 8 decimals
    pub const fn legacy() -> Self {
        Self {
            max_precision: 8,
            max_amount: MAX_AMOUNT,
        }
    }

    /// Builder method: Set maximum precision
    pub fn with_max_precision(mut self, max_precision: u8) -> Self {
        self.max_precision = max_precision;
        self
    }

    /// Builder method: Set maximum magnitude
    pub fn with_max_amount(mut self, max_amount: i64) -> Self {
        self.max_amount = max_amount;
        self
    }

    /// Validate the limits themselves
    pub fn validate(&self) -> Result<(), String> {
        if self.max_precision > MAX_PRECISION {
            return Err(format!(
                "max_precision {} exceeds protocol maximum {}",
                self.max_precision, MAX_PRECISION
            ));
        }
        if self.max_amount < 0 {
            return Err("max_amount must not be negative".to_string());
        }
        if self.max_amount > MAX_AMOUNT {
            return Err(format!(
                "max_amount {} exceeds protocol maximum {}",
                self.max_amount, MAX_AMOUNT
            ));
        }
        Ok(())
    }
}

impl Default for AssetLimits {
    fn default() -> Self {
        Self::eosio()
    }
}
