// ============================================================================
// 256-bit Signed Integer
// Two's-complement signed integer on top of primitive_types::U256
// ============================================================================

use super::diagnostics::range_error;
use super::errors::{MathError, MathResult};
use primitive_types::U256;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitXor, Shr};
use std::str::FromStr;

/// Bit 255, the sign bit of a two's-complement 256-bit word.
const SIGN_BIT: U256 = U256([0, 0, 0, 0x8000_0000_0000_0000]);

/// Signed 256-bit integer in two's-complement form.
///
/// This is the working width of SD59x18. Only the operations the fixed-point
/// kernel needs are provided; every fallible one is checked and returns
/// `None` (or a `MathError`) instead of wrapping. Wrapping behaviour is only
/// exposed where the caller has proven the result is in range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct I256(U256);

impl I256 {
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));
    pub const ONE: Self = Self(U256([1, 0, 0, 0]));
    pub const MINUS_ONE: Self = Self(U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX]));

    /// 2^255 - 1
    pub const MAX: Self = Self(U256([
        u64::MAX,
        u64::MAX,
        u64::MAX,
        0x7fff_ffff_ffff_ffff,
    ]));

    /// -2^255
    pub const MIN: Self = Self(SIGN_BIT);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from little-endian two's-complement limbs.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(U256(limbs))
    }

    /// Reinterpret a 256-bit word as two's complement.
    #[inline]
    pub const fn from_bits(bits: U256) -> Self {
        Self(bits)
    }

    /// Sign-extend an `i128`.
    #[inline]
    pub const fn from_i128(value: i128) -> Self {
        let low = value as u128;
        let ext = if value < 0 { u64::MAX } else { 0 };
        Self(U256([low as u64, (low >> 64) as u64, ext, ext]))
    }

    /// Build from a sign and a magnitude.
    ///
    /// Returns `None` when the magnitude does not fit: above `2^255 - 1` for
    /// non-negative values, above `2^255` for negative ones.
    #[inline]
    pub fn from_sign_magnitude(negative: bool, magnitude: U256) -> Option<Self> {
        if negative {
            if magnitude > SIGN_BIT {
                None
            } else {
                Some(Self(twos_complement(magnitude)))
            }
        } else if magnitude >= SIGN_BIT {
            None
        } else {
            Some(Self(magnitude))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The underlying two's-complement word.
    #[inline]
    pub const fn to_bits(self) -> U256 {
        self.0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        (self.0).0[3] >> 63 == 1
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        let l = (self.0).0;
        (l[0] | l[1] | l[2] | l[3]) == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Magnitude as an unsigned word. `MIN` maps to `2^255`.
    #[inline]
    pub fn unsigned_abs(self) -> U256 {
        if self.is_negative() {
            twos_complement(self.0)
        } else {
            self.0
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition; `None` when the 256-bit range is left.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = self.wrapping_add(rhs);
        if self.is_negative() == rhs.is_negative() && sum.is_negative() != self.is_negative() {
            None
        } else {
            Some(sum)
        }
    }

    /// Checked subtraction; `None` when the 256-bit range is left.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let diff = Self(self.0.overflowing_sub(rhs.0).0);
        if self.is_negative() != rhs.is_negative() && diff.is_negative() != self.is_negative() {
            None
        } else {
            Some(diff)
        }
    }

    /// Checked negation; `None` for `MIN`.
    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        if self == Self::MIN {
            None
        } else {
            Some(Self(twos_complement(self.0)))
        }
    }

    /// Modular addition. Only for callers that have proven the sum fits.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.overflowing_add(rhs.0).0)
    }

    /// Modular negation; `MIN` maps to itself.
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        Self(twos_complement(self.0))
    }

    /// Truncating division with remainder.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// the dividend. `None` on a zero divisor or for `MIN / -1`.
    pub fn checked_div_rem(self, rhs: Self) -> Option<(Self, Self)> {
        if rhs.is_zero() {
            return None;
        }
        let (q, r) = self.unsigned_abs().div_mod(rhs.unsigned_abs());
        let quotient = Self::from_sign_magnitude(self.is_negative() != rhs.is_negative(), q)?;
        let remainder = Self::from_sign_magnitude(self.is_negative(), r)?;
        Some((quotient, remainder))
    }
}

/// Two's-complement negation of a raw word (wrapping).
#[inline]
fn twos_complement(bits: U256) -> U256 {
    (!bits).overflowing_add(U256::one()).0
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for I256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for I256 {
    /// Flipping the sign bit maps two's complement onto unsigned order.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0 ^ SIGN_BIT).cmp(&(other.0 ^ SIGN_BIT))
    }
}

impl BitAnd for I256 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitXor for I256 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Shr<u32> for I256 {
    type Output = Self;

    /// Arithmetic (sign-extending) shift, i.e. floor division by `2^shift`.
    #[inline]
    fn shr(self, shift: u32) -> Self::Output {
        if shift >= 255 {
            return if self.is_negative() { Self::MINUS_ONE } else { Self::ZERO };
        }
        let shift = shift as usize;
        if self.is_negative() {
            Self(!((!self.0) >> shift))
        } else {
            Self(self.0 >> shift)
        }
    }
}

impl From<i128> for I256 {
    #[inline]
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl From<i64> for I256 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i128(value as i128)
    }
}

impl TryFrom<I256> for i128 {
    type Error = MathError;

    fn try_from(value: I256) -> MathResult<i128> {
        if value > I256::from_i128(i128::MAX) {
            Err(MathError::RangeOverflow)
        } else if value < I256::from_i128(i128::MIN) {
            Err(MathError::RangeUnderflow)
        } else {
            Ok(value.0.low_u128() as i128)
        }
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Debug for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I256({})", self)
    }
}

impl FromStr for I256 {
    type Err = MathError;

    /// Parse a base-10 integer with an optional leading sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MathError::InvalidInput);
        }

        let magnitude = U256::from_dec_str(digits).map_err(|_| range_error(negative))?;
        Self::from_sign_magnitude(negative, magnitude).ok_or(range_error(negative))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn i(v: i128) -> I256 {
        I256::from_i128(v)
    }

    #[test]
    fn test_constants() {
        assert_eq!(I256::MAX.to_string(), format!("{}", (U256::one() << 255usize) - U256::one()));
        assert_eq!(
            I256::MIN.to_string(),
            "-57896044618658097711785492504343953926634992332820282019728792003956564819968"
        );
        assert!(I256::MIN.is_negative());
        assert!(!I256::MAX.is_negative());
        assert!(I256::ZERO.is_zero());
        assert_eq!(I256::MINUS_ONE, i(-1));
    }

    #[test]
    fn test_from_i128_sign_extension() {
        assert_eq!(i(-5).to_string(), "-5");
        assert_eq!(i(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(i(i128::MAX).to_string(), i128::MAX.to_string());
        assert_eq!(i128::try_from(i(-42)), Ok(-42));
    }

    #[test]
    fn test_try_into_i128_out_of_range() {
        assert_eq!(i128::try_from(I256::MAX), Err(MathError::RangeOverflow));
        assert_eq!(i128::try_from(I256::MIN), Err(MathError::RangeUnderflow));
    }

    #[test]
    fn test_ordering() {
        assert!(I256::MIN < i(-1));
        assert!(i(-1) < I256::ZERO);
        assert!(I256::ZERO < I256::ONE);
        assert!(I256::ONE < I256::MAX);
        assert_eq!(i(-3).max(i(-7)), i(-3));
    }

    #[test]
    fn test_checked_add_sub() {
        assert_eq!(i(2).checked_add(i(-5)), Some(i(-3)));
        assert_eq!(I256::MAX.checked_add(I256::ONE), None);
        assert_eq!(I256::MIN.checked_add(I256::MINUS_ONE), None);
        assert_eq!(I256::MIN.checked_add(I256::MAX), Some(I256::MINUS_ONE));

        assert_eq!(i(2).checked_sub(i(5)), Some(i(-3)));
        assert_eq!(I256::MIN.checked_sub(I256::ONE), None);
        assert_eq!(I256::MAX.checked_sub(I256::MINUS_ONE), None);
        assert_eq!(I256::ZERO.checked_sub(I256::MAX), Some(i(1).checked_add(I256::MIN).unwrap()));
    }

    #[test]
    fn test_checked_neg() {
        assert_eq!(i(7).checked_neg(), Some(i(-7)));
        assert_eq!(I256::ZERO.checked_neg(), Some(I256::ZERO));
        assert_eq!(I256::MIN.checked_neg(), None);
    }

    #[test]
    fn test_arithmetic_shift() {
        assert_eq!(i(-3) >> 1, i(-2));
        assert_eq!(i(3) >> 1, i(1));
        assert_eq!(i(-1) >> 1, i(-1));
        assert_eq!(i(-4) >> 1, i(-2));
        assert_eq!(I256::MIN >> 255, I256::MINUS_ONE);
        assert_eq!(I256::MAX >> 300, I256::ZERO);
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(i(-4) & i(-2), i(-4));
        assert_eq!(i(-4) ^ i(-2), i(2));
        assert_eq!(I256::MAX ^ I256::MIN, I256::MINUS_ONE);
    }

    #[test]
    fn test_div_rem_truncates_toward_zero() {
        assert_eq!(i(7).checked_div_rem(i(2)), Some((i(3), i(1))));
        assert_eq!(i(-7).checked_div_rem(i(2)), Some((i(-3), i(-1))));
        assert_eq!(i(7).checked_div_rem(i(-2)), Some((i(-3), i(1))));
        assert_eq!(i(7).checked_div_rem(I256::ZERO), None);
        assert_eq!(I256::MIN.checked_div_rem(I256::MINUS_ONE), None);
    }

    #[test]
    fn test_sign_magnitude_bounds() {
        assert_eq!(I256::from_sign_magnitude(true, SIGN_BIT), Some(I256::MIN));
        assert_eq!(I256::from_sign_magnitude(false, SIGN_BIT), None);
        assert_eq!(I256::from_sign_magnitude(true, U256::zero()), Some(I256::ZERO));
        assert_eq!(I256::MIN.unsigned_abs(), SIGN_BIT);
    }

    #[test]
    fn test_parse() {
        assert_eq!("-123".parse::<I256>(), Ok(i(-123)));
        assert_eq!("+9".parse::<I256>(), Ok(i(9)));
        assert_eq!(I256::MIN.to_string().parse::<I256>(), Ok(I256::MIN));
        assert_eq!("".parse::<I256>(), Err(MathError::InvalidInput));
        assert_eq!("-".parse::<I256>(), Err(MathError::InvalidInput));
        assert_eq!("12a".parse::<I256>(), Err(MathError::InvalidInput));
        assert_eq!(
            "57896044618658097711785492504343953926634992332820282019728792003956564819968"
                .parse::<I256>(),
            Err(MathError::RangeOverflow)
        );
    }
}
