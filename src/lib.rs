// ============================================================================
// EOS Asset Library
// Exact fixed-point token amounts with symbol and precision
// ============================================================================

//! # EOS Asset
//!
//! A symbol-tagged, fixed-point amount type for EOSIO-style chains, such as
//! `10.0012 EOS`.
//!
//! ## Features
//!
//! - **Exact arithmetic** on arbitrary-precision scaled integers (no floats)
//! - **Canonical formatting**: leading zeros trimmed, `-0` normalized
//! - **Protocol bounds** enforced on every value: precision <= 18 and
//!   `|magnitude| <= 2^62 - 1`
//! - **Unit safety**: addition, subtraction and ordering require matching
//!   symbol and precision
//!
//! ## Example
//!
//! ```rust
//! use eos_asset::prelude::*;
//!
//! let price: Asset = "2.00 USD".parse()?;
//! let total = price.checked_mul(3)?;
//! assert_eq!(total.to_string(), "6.00 USD");
//!
//! // Division truncates toward zero and keeps the precision
//! assert_eq!(total.checked_div(4)?.to_string(), "1.50 USD");
//!
//! // Textual operands are parsed on the fly
//! assert!(total.greater_than("5.99 USD")?);
//!
//! // Units must match
//! assert!(total.checked_add("1 USD").is_err());
//! # Ok::<(), AssetError>(())
//! ```

pub mod asset;
pub mod config;
#[cfg(feature = "logging")]
pub mod logging;

pub use asset::{
    Asset, AssetError, AssetResult, Factor, IntoAsset, Mismatch, Symbol, MAX_AMOUNT,
    MAX_PRECISION,
};
pub use config::AssetLimits;

// Re-exports for convenience
pub mod prelude {
    pub use crate::asset::{Asset, AssetError, AssetResult, Factor, IntoAsset, Symbol};
    pub use crate::config::AssetLimits;
}
