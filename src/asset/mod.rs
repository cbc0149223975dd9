// ============================================================================
// Asset Module
// Exact fixed-point token amounts tagged with a symbol
// ============================================================================
//
// This module provides:
// - Asset: arbitrary-precision scaled amount + symbol + precision
// - Symbol: validated 1-7 letter unit code
// - Factor / IntoAsset: operand capabilities for arithmetic and comparison
// - AssetError: error type shared by parsing, validation and arithmetic
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Every result is re-validated against the protocol range
// - Value semantics: operands are never mutated

mod arithmetic;
mod conversion;
mod errors;
mod factor;
mod format;
mod parse;
mod symbol;
#[cfg(test)]
pub(crate) mod test_support;
mod value;

pub use errors::{AssetError, AssetResult, Mismatch};
pub use factor::Factor;
pub use parse::IntoAsset;
pub use symbol::{Symbol, MAX_SYMBOL_LEN};
pub use value::{Asset, MAX_AMOUNT, MAX_PRECISION};
