// ============================================================================
// Asset Formatting
// Scaled integer -> canonical decimal string
// ============================================================================

use super::value::Asset;
use num_traits::Signed;
use std::fmt;

impl fmt::Display for Asset {
    /// Canonical form: one mandatory integer digit, no other leading zeros,
    /// exactly `precision` fractional digits, no point when `precision == 0`,
    /// and a `-` only for a non-zero negative magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.precision as usize;
        let digits = self.magnitude.magnitude().to_string();
        let padded = format!("{:0>width$}", digits, width = precision + 1);
        let (integer, fraction) = padded.split_at(padded.len() - precision);

        if self.magnitude.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(integer)?;
        if precision > 0 {
            write!(f, ".{}", fraction)?;
        }
        write!(f, " {}", self.symbol)
    }
}
