// ============================================================================
// SD59x18 Conversions
// Decimal strings, rust_decimal and serde at API boundaries
// ============================================================================
//
// Inputs with more than 18 fractional digits are truncated toward zero, the
// same policy mul and div follow.

use super::constants::DECIMALS;
use super::math;
use super::value::SD59x18;
use crate::numeric::diagnostics::range_error;
use crate::numeric::{MathError, MathResult, I256};
use primitive_types::U256;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for SD59x18 {
    /// Whole part, a dot, then all 18 fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.raw_value();
        let int_part = math::to_int(raw);
        let frac_part = math::frac(raw).unsigned_abs().low_u64();

        if raw.is_negative() && int_part.is_zero() {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = DECIMALS as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = DECIMALS as usize)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for SD59x18 {
    type Err = MathError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123.000000000000000000
    /// - "-0.001" -> -0.001000000000000000
    /// - "1.0000000000000000009" -> 1.000000000000000000 (truncated)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(MathError::InvalidInput);
        }
        if !int_str.bytes().chain(frac_str.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(MathError::InvalidInput);
        }

        let int_val = if int_str.is_empty() {
            U256::zero()
        } else {
            U256::from_dec_str(int_str).map_err(|_| range_error(negative))?
        };

        // Keep 18 digits, drop the rest, right-pad with zeros.
        let kept = &frac_str[..frac_str.len().min(DECIMALS as usize)];
        let frac_val = if kept.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", kept, width = DECIMALS as usize);
            padded.parse::<u64>().map_err(|_| MathError::InvalidInput)?
        };

        int_val
            .checked_mul(U256::exp10(DECIMALS as usize))
            .and_then(|scaled| scaled.checked_add(U256::from(frac_val)))
            .and_then(|magnitude| I256::from_sign_magnitude(negative, magnitude))
            .map(SD59x18::from_raw)
            .ok_or(range_error(negative))
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl SD59x18 {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Every `Decimal` fits; digits past the 18th decimal are truncated
    /// toward zero.
    pub fn from_decimal(d: Decimal) -> Self {
        let mantissa = U256::from(d.mantissa().unsigned_abs());
        let scale = d.scale();

        // |mantissa| < 2^96, so the scaled magnitude stays below 2^156.
        let magnitude = if scale <= DECIMALS {
            mantissa * U256::exp10((DECIMALS - scale) as usize)
        } else {
            mantissa / U256::exp10((scale - DECIMALS) as usize)
        };

        let raw = I256::from_bits(magnitude);
        if d.is_sign_negative() {
            SD59x18::from_raw(raw.wrapping_neg())
        } else {
            SD59x18::from_raw(raw)
        }
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Keeps as many fractional digits as a 96-bit mantissa allows,
    /// truncating the rest toward zero.
    ///
    /// # Errors
    /// `RangeOverflow` / `RangeUnderflow` if the whole part alone needs more
    /// than 96 bits.
    pub fn to_decimal(self) -> MathResult<Decimal> {
        let raw = self.raw_value();
        let negative = raw.is_negative();
        let magnitude = raw.unsigned_abs();

        // Fewest dropped digits that leave a 96-bit mantissa; every candidate
        // is tried so the work does not depend on the value.
        let mut fit = None;
        for dropped in (0..=DECIMALS).rev() {
            let mantissa = magnitude / U256::exp10(dropped as usize);
            if mantissa.bits() <= 96 {
                fit = Some((dropped, mantissa.low_u128() as i128));
            }
        }

        let (dropped, mantissa) = fit.ok_or(range_error(negative))?;
        let signed = if negative { -mantissa } else { mantissa };
        Decimal::try_from_i128_with_scale(signed, DECIMALS - dropped)
            .map_err(|_| range_error(negative))
    }
}

impl From<Decimal> for SD59x18 {
    #[inline]
    fn from(d: Decimal) -> Self {
        SD59x18::from_decimal(d)
    }
}

impl TryFrom<SD59x18> for Decimal {
    type Error = MathError;

    #[inline]
    fn try_from(value: SD59x18) -> MathResult<Decimal> {
        value.to_decimal()
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SD59x18 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SD59x18 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
