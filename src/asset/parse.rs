// ============================================================================
// Asset Parsing
// Decimal string -> scaled integer, symbol and precision
// ============================================================================

use super::errors::{AssetError, AssetResult};
use super::symbol::Symbol;
use super::value::{Asset, MAX_AMOUNT, MAX_PRECISION};
use crate::config::AssetLimits;
use num_bigint::BigInt;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::str::FromStr;

/// Decimal digits in `MAX_AMOUNT`; longer magnitudes are out of range
const MAX_AMOUNT_DIGITS: usize = MAX_AMOUNT.ilog10() as usize + 1;

/// Characters of a rejected input echoed into the log
const LOGGED_INPUT_CHARS: usize = 64;

impl Asset {
    /// Parse `[-]digits[.[digits]] SYMBOL`.
    ///
    /// Leading zeros, a missing integer part (`.5 EOS`) and a bare trailing
    /// decimal point (`1. EOS`) are accepted; the digits are kept exactly, so
    /// the precision is the length of the fractional part.
    ///
    /// # Errors
    /// - `MalformedAsset` for a wrong token count, more than one decimal
    ///   point, a stray character or an empty digit string
    /// - `InvalidSymbol`, `InvalidPrecision`, `MagnitudeOutOfRange` from
    ///   validation
    pub fn parse(text: &str) -> AssetResult<Self> {
        Self::parse_with_limits(text, &AssetLimits::eosio())
    }

    /// Parse, then also enforce `limits`.
    pub fn parse_with_limits(text: &str, limits: &AssetLimits) -> AssetResult<Self> {
        let asset = parse_tokens(text, limits).inspect_err(|err| {
            tracing::debug!(
                input = excerpt(text),
                input_len = text.len(),
                error = %err,
                "failed to parse asset"
            );
        })?;
        asset.check_limits(limits)?;
        Ok(asset)
    }
}

fn parse_tokens(text: &str, limits: &AssetLimits) -> AssetResult<Asset> {
    let tokens: SmallVec<[&str; 2]> = text.split(' ').collect();
    let &[amount, symbol] = tokens.as_slice() else {
        return Err(AssetError::MalformedAsset);
    };
    let symbol = Symbol::new(symbol)?;

    let parts: SmallVec<[&str; 2]> = amount.split('.').collect();
    let (integer, fraction) = match *parts.as_slice() {
        [integer] => (integer, ""),
        [integer, fraction] => (integer, fraction),
        _ => return Err(AssetError::MalformedAsset),
    };

    // The sign belongs to the whole amount and is applied once at the end
    let (negative, integer) = match integer.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, integer),
    };

    let mut digits = String::with_capacity(integer.len() + fraction.len());
    digits.push_str(integer);
    digits.push_str(fraction);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AssetError::MalformedAsset);
    }

    let precision = u8::try_from(fraction.len()).map_err(|_| AssetError::InvalidPrecision)?;
    if precision > limits.max_precision.min(MAX_PRECISION) {
        return Err(AssetError::InvalidPrecision);
    }

    // Bound the big-integer work by the range before converting
    let significant = match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };
    if significant.len() > MAX_AMOUNT_DIGITS {
        return Err(AssetError::MagnitudeOutOfRange);
    }
    let unsigned =
        BigInt::parse_bytes(significant.as_bytes(), 10).ok_or(AssetError::MalformedAsset)?;
    let magnitude = if negative { -unsigned } else { unsigned };

    Asset::with_symbol(magnitude, symbol, precision)
}

/// Leading part of `text`, cut on a char boundary.
fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(LOGGED_INPUT_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

impl FromStr for Asset {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Asset {
    type Error = AssetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

// ============================================================================
// Operand Conversion
// ============================================================================

/// Anything usable where an asset operand is expected.
///
/// Implemented for assets (owned or borrowed) and for their textual form,
/// which goes through [`Asset::parse`].
pub trait IntoAsset<'a> {
    fn into_asset(self) -> AssetResult<Cow<'a, Asset>>;
}

impl<'a> IntoAsset<'a> for Asset {
    fn into_asset(self) -> AssetResult<Cow<'a, Asset>> {
        Ok(Cow::Owned(self))
    }
}

impl<'a> IntoAsset<'a> for &'a Asset {
    fn into_asset(self) -> AssetResult<Cow<'a, Asset>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<'a> IntoAsset<'a> for &str {
    fn into_asset(self) -> AssetResult<Cow<'a, Asset>> {
        Asset::parse(self).map(Cow::Owned)
    }
}

impl<'a> IntoAsset<'a> for String {
    fn into_asset(self) -> AssetResult<Cow<'a, Asset>> {
        Asset::parse(&self).map(Cow::Owned)
    }
}

impl<'a> IntoAsset<'a> for &String {
    fn into_asset(self) -> AssetResult<Cow<'a, Asset>> {
        Asset::parse(self).map(Cow::Owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::test_support::capture_logs;

    fn parts(text: &str) -> (BigInt, String, u8) {
        let asset = Asset::parse(text).unwrap();
        (
            asset.magnitude().clone(),
            asset.symbol().to_string(),
            asset.precision(),
        )
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parts("10.0012 EOS"), (BigInt::from(100_012), "EOS".into(), 4));
        assert_eq!(parts("10 OK"), (BigInt::from(10), "OK".into(), 0));
        assert_eq!(parts("10.0 OK"), (BigInt::from(100), "OK".into(), 1));
        assert_eq!(parts("-10.3 BYE"), (BigInt::from(-103), "BYE".into(), 1));
    }

    #[test]
    fn test_parse_lenient_forms() {
        assert_eq!(parts(".0012 EOS"), (BigInt::from(12), "EOS".into(), 4));
        assert_eq!(parts("-.5 EOS"), (BigInt::from(-5), "EOS".into(), 1));
        assert_eq!(parts("1. EOS"), (BigInt::from(1), "EOS".into(), 0));
        assert_eq!(parts("0010.0012 EOS"), (BigInt::from(100_012), "EOS".into(), 4));
        assert_eq!(parts("-0.00 EOS"), (BigInt::from(0), "EOS".into(), 2));
    }

    #[test]
    fn test_parse_malformed() {
        for text in [
            "",
            "10",
            "10  EOS",
            "10 EOS extra",
            " 10 EOS",
            "1.2.3 EOS",
            ". EOS",
            "- EOS",
            "-. EOS",
            "+1 EOS",
            "--1 EOS",
            "1-0 EOS",
            "1_000 EOS",
            "abc EOS",
            "1e5 EOS",
        ] {
            assert_eq!(Asset::parse(text), Err(AssetError::MalformedAsset), "{text:?}");
        }
    }

    #[test]
    fn test_parse_invalid_symbol() {
        assert_eq!(Asset::parse("1.0 eos"), Err(AssetError::InvalidSymbol));
        assert_eq!(Asset::parse("1.0 ABCDEFGH"), Err(AssetError::InvalidSymbol));
        // Symbol is checked before the amount
        assert_eq!(Asset::parse("1.2.3 eos"), Err(AssetError::InvalidSymbol));
    }

    #[test]
    fn test_parse_precision_bound() {
        assert!(Asset::parse("0.000000000000000001 EOS").is_ok());
        assert_eq!(
            Asset::parse("0.0000000000000000001 EOS"),
            Err(AssetError::InvalidPrecision)
        );
        let long = format!("0.{} EOS", "0".repeat(300));
        assert_eq!(Asset::parse(&long), Err(AssetError::InvalidPrecision));
    }

    #[test]
    fn test_parse_range() {
        assert!(Asset::parse("4611686018427387903 EOS").is_ok());
        assert!(Asset::parse("-461168601842738790.3 EOS").is_ok());
        assert_eq!(
            Asset::parse("4611686018427387904 EOS"),
            Err(AssetError::MagnitudeOutOfRange)
        );
        assert_eq!(
            Asset::parse("-99999999999999999999999999 EOS"),
            Err(AssetError::MagnitudeOutOfRange)
        );
    }

    #[test]
    fn test_parse_long_digit_strings() {
        let nines = format!("{} EOS", "9".repeat(1_000_000));
        assert_eq!(Asset::parse(&nines), Err(AssetError::MagnitudeOutOfRange));

        let negative = format!("-{}.5 EOS", "1".repeat(100_000));
        assert_eq!(Asset::parse(&negative), Err(AssetError::MagnitudeOutOfRange));

        // Leading zeros do not count toward the range
        let padded = format!("{}1.0000 EOS", "0".repeat(1_000_000));
        assert_eq!(parts(&padded), (BigInt::from(10_000), "EOS".into(), 4));
        let zeros = format!("{} EOS", "0".repeat(1_000_000));
        assert_eq!(parts(&zeros), (BigInt::from(0), "EOS".into(), 0));

        // Precision is still reported ahead of range
        let both = format!("{}.{} EOS", "9".repeat(1_000), "9".repeat(19));
        assert_eq!(Asset::parse(&both), Err(AssetError::InvalidPrecision));

        // Twenty significant digits is one too many; 19 is decided by value
        assert_eq!(
            Asset::parse("10000000000000000000 EOS"),
            Err(AssetError::MagnitudeOutOfRange)
        );
        assert_eq!(
            Asset::parse("9999999999999999999 EOS"),
            Err(AssetError::MagnitudeOutOfRange)
        );
    }

    #[test]
    fn test_rejected_input_is_logged_as_excerpt() {
        assert_eq!(excerpt("1.0 eos"), "1.0 eos");
        let long = "é".repeat(100);
        assert_eq!(excerpt(&long).chars().count(), LOGGED_INPUT_CHARS);

        let input = format!("{} EOS", "9".repeat(10_000));
        let logs = capture_logs(|| {
            assert_eq!(Asset::parse(&input), Err(AssetError::MagnitudeOutOfRange));
        });
        assert!(logs.contains("failed to parse asset"), "{logs}");
        assert!(logs.contains("input_len=10004"), "{logs}");
        assert!(!logs.contains(&"9".repeat(LOGGED_INPUT_CHARS + 1)), "{logs}");
    }

    #[test]
    fn test_parse_with_limits() {
        let legacy = AssetLimits::legacy();
        assert!(Asset::parse_with_limits("1.00000000 EOS", &legacy).is_ok());
        assert_eq!(
            Asset::parse_with_limits("1.000000000 EOS", &legacy),
            Err(AssetError::InvalidPrecision)
        );
        let oversized = format!("{}.000000000 EOS", "9".repeat(40));
        assert_eq!(
            Asset::parse_with_limits(&oversized, &legacy),
            Err(AssetError::InvalidPrecision)
        );
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: Asset = "2.00 USD".parse().unwrap();
        let b = Asset::try_from("2.00 USD").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_asset() {
        let asset = Asset::parse("6.00 EOS").unwrap();
        assert!(matches!((&asset).into_asset(), Ok(Cow::Borrowed(_))));
        assert_eq!(*"6.00 EOS".into_asset().unwrap(), asset);
        assert_eq!(*String::from("6.00 EOS").into_asset().unwrap(), asset);
        assert_eq!("6.00".into_asset(), Err(AssetError::MalformedAsset));
    }
}
