// ============================================================================
// Asset Symbol
// Short uppercase token naming an asset's unit
// ============================================================================

use super::errors::{AssetError, AssetResult};
use arrayvec::ArrayString;
use std::fmt;
use std::str::FromStr;

/// Maximum number of letters in a symbol
pub const MAX_SYMBOL_LEN: usize = 7;

/// Validated asset symbol, e.g. `EOS` or `USD`.
///
/// Always matches `^[A-Z]{1,7}$`, so it is stored inline without allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(ArrayString<MAX_SYMBOL_LEN>);

impl Symbol {
    /// Validate and wrap a symbol code.
    ///
    /// # Errors
    /// Returns `InvalidSymbol` unless `code` is 1-7 uppercase ASCII letters.
    pub fn new(code: &str) -> AssetResult<Self> {
        if !Self::is_valid(code) {
            return Err(AssetError::InvalidSymbol);
        }
        ArrayString::from(code)
            .map(Self)
            .map_err(|_| AssetError::InvalidSymbol)
    }

    /// Check a candidate code against the symbol grammar.
    #[inline]
    pub fn is_valid(code: &str) -> bool {
        (1..=MAX_SYMBOL_LEN).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_uppercase())
    }

    /// Wrap a code without checking the grammar.
    #[cfg(test)]
    pub(super) fn new_unchecked(code: &str) -> Self {
        Self(ArrayString::from(code).unwrap())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Symbol {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
