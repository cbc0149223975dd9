// ============================================================================
// Asset Errors
// Error types for parsing, validating and operating on assets
// ============================================================================

use std::fmt;

/// Which part of the unit differed between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mismatch {
    /// Operands carry different symbols
    Symbol,
    /// Operands carry different precisions
    Precision,
}

/// Errors that can occur while parsing, validating or operating on an asset.
///
/// Parser and validator failures share this enum so that a textual operand's
/// parse error propagates unchanged out of an arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetError {
    /// Wrong token count, stray decimal points or an empty digit string
    MalformedAsset,
    /// Symbol is not 1-7 uppercase ASCII letters
    InvalidSymbol,
    /// Precision exceeds the allowed number of fractional digits
    InvalidPrecision,
    /// Magnitude lies outside `[-MAX_AMOUNT, MAX_AMOUNT]`
    MagnitudeOutOfRange,
    /// Operands are not unit-compatible
    UnitMismatch(Mismatch),
    /// Multiplier or divisor is not an integer
    NonIntegerFactor,
    /// Attempted division by zero
    DivisionByZero,
}

impl AssetError {
    /// Returns true for both flavours of unit mismatch.
    #[inline]
    pub const fn is_unit_mismatch(&self) -> bool {
        matches!(self, AssetError::UnitMismatch(_))
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::MalformedAsset => write!(f, "malformed asset"),
            AssetError::InvalidSymbol => {
                write!(f, "invalid symbol: expected 1 to 7 uppercase letters")
            },
            AssetError::InvalidPrecision => write!(f, "invalid precision"),
            AssetError::MagnitudeOutOfRange => {
                write!(f, "magnitude of asset amount must be less than 2^62")
            },
            AssetError::UnitMismatch(Mismatch::Symbol) => write!(f, "symbol mismatch"),
            AssetError::UnitMismatch(Mismatch::Precision) => write!(f, "precision mismatch"),
            AssetError::NonIntegerFactor => write!(f, "factor must be an integer"),
            AssetError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for AssetError {}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;
