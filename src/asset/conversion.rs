// ============================================================================
// Asset Conversion
// rust_decimal and serde interop for API boundaries
// ============================================================================

use super::errors::{AssetError, AssetResult};
use super::value::Asset;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

impl Asset {
    /// Convert from rust_decimal::Decimal, using its scale as the precision.
    ///
    /// `Decimal::new(100012, 4)` with symbol `EOS` becomes `10.0012 EOS`;
    /// trailing zeros are significant and are kept.
    ///
    /// # Errors
    /// - `InvalidSymbol` if `symbol` fails the grammar
    /// - `InvalidPrecision` if the scale exceeds `MAX_PRECISION`
    /// - `MagnitudeOutOfRange` if the mantissa exceeds `MAX_AMOUNT`
    pub fn from_decimal(decimal: Decimal, symbol: &str) -> AssetResult<Self> {
        let precision = u8::try_from(decimal.scale()).map_err(|_| AssetError::InvalidPrecision)?;
        Self::new(BigInt::from(decimal.mantissa()), symbol, precision)
    }

    /// Convert to rust_decimal::Decimal with scale equal to the precision.
    ///
    /// Exact for every valid asset: the magnitude fits in 63 bits and the
    /// precision is well below rust_decimal's maximum scale.
    pub fn to_decimal(&self) -> AssetResult<Decimal> {
        let mantissa = self
            .magnitude
            .to_i64()
            .ok_or(AssetError::MagnitudeOutOfRange)?;
        Decimal::try_new(mantissa, u32::from(self.precision))
            .map_err(|_| AssetError::InvalidPrecision)
    }
}

// ============================================================================
// Serde (canonical string form)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Asset;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Asset {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Asset {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            Asset::parse(&text).map_err(de::Error::custom)
        }
    }

    impl Asset {
        /// Canonical string as a JSON value, ready to embed in action data.
        pub fn to_json(&self) -> serde_json::Value {
            serde_json::Value::String(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        let asset = Asset::from_decimal(Decimal::new(100_012, 4), "EOS").unwrap();
        assert_eq!(asset.to_string(), "10.0012 EOS");

        let trailing = Asset::from_decimal(Decimal::new(1000, 2), "USD").unwrap();
        assert_eq!(trailing.to_string(), "10.00 USD");

        let negative = Asset::from_decimal(Decimal::new(-5, 1), "USD").unwrap();
        assert_eq!(negative.to_string(), "-0.5 USD");
    }

    #[test]
    fn test_from_decimal_errors() {
        assert_eq!(
            Asset::from_decimal(Decimal::new(1, 19), "EOS"),
            Err(AssetError::InvalidPrecision)
        );
        assert_eq!(
            Asset::from_decimal(Decimal::MAX, "EOS"),
            Err(AssetError::MagnitudeOutOfRange)
        );
        assert_eq!(
            Asset::from_decimal(Decimal::ONE, "eos"),
            Err(AssetError::InvalidSymbol)
        );
    }

    #[test]
    fn test_to_decimal() {
        let asset = Asset::parse("123.4560 EOS").unwrap();
        let decimal = asset.to_decimal().unwrap();
        assert_eq!(decimal.to_string(), "123.4560");
        assert_eq!(decimal.scale(), 4);

        let max = Asset::parse("-4.611686018427387903 EOS").unwrap();
        assert_eq!(max.to_decimal().unwrap().to_string(), "-4.611686018427387903");
    }

    #[test]
    fn test_decimal_round_trip() {
        let asset = Asset::parse("-0.0012 EOS").unwrap();
        let back = Asset::from_decimal(asset.to_decimal().unwrap(), "EOS").unwrap();
        assert_eq!(back, asset);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_form() {
        let asset = Asset::parse("10.0012 EOS").unwrap();
        let json = serde_json::to_string(&asset).unwrap();
        assert_eq!(json, "\"10.0012 EOS\"");
        assert_eq!(asset.to_json(), serde_json::json!("10.0012 EOS"));

        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, asset);

        let canonical: Asset = serde_json::from_str("\"0010.0012 EOS\"").unwrap();
        assert_eq!(serde_json::to_string(&canonical).unwrap(), json);

        assert!(serde_json::from_str::<Asset>("\"10.0012\"").is_err());
        assert!(serde_json::from_str::<Asset>("100012").is_err());
    }
}
