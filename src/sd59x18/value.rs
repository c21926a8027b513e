// ============================================================================
// SD59x18 Value Type
// Type-safe wrapper over the raw surface
// ============================================================================

use super::constants::{
    HALF_UNIT, MAX_SD59X18, MAX_WHOLE_SD59X18, MIN_SD59X18, MIN_WHOLE_SD59X18, SCALE, UNIT,
};
use super::math;
use crate::numeric::{MathResult, I256};
use primitive_types::U256;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Signed fixed-point decimal with 18 fractional digits.
///
/// Internally stores `value × 10^18` as an [`I256`]. Every method delegates
/// to the matching function in [`math`](super::math), so results and errors
/// are identical to the raw surface.
///
/// # Value Range
/// - Minimum: -57896044618658097711785492504343953926634992332820282019728.792003956564819968
/// - Maximum: +57896044618658097711785492504343953926634992332820282019728.792003956564819967
/// - Precision: 0.000000000000000001
///
/// # Example
/// ```
/// use sd59x18::SD59x18;
///
/// let price = SD59x18::from_i128(100);
/// let qty: SD59x18 = "2.5".parse().unwrap();
/// let total = price.checked_mul(qty).unwrap();
/// assert_eq!(total, SD59x18::from_i128(250));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SD59x18(I256);

impl SD59x18 {
    /// The scale factor (10^18) as a value, i.e. 1.0
    pub const SCALE: Self = Self(SCALE);

    /// Zero value
    pub const ZERO: Self = Self(I256::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self(UNIT);

    /// One half (0.5)
    pub const HALF: Self = Self(HALF_UNIT);

    /// Maximum representable value
    pub const MAX: Self = Self(MAX_SD59X18);

    /// Minimum representable value
    pub const MIN: Self = Self(MIN_SD59X18);

    /// Largest whole value
    pub const MAX_WHOLE: Self = Self(MAX_WHOLE_SD59X18);

    /// Smallest whole value
    pub const MIN_WHOLE: Self = Self(MIN_WHOLE_SD59X18);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    ///
    /// Never fails: every `I256` is a valid SD59x18.
    #[inline]
    pub const fn from_raw(raw: I256) -> Self {
        Self(raw)
    }

    /// Create from a whole number held in an `I256`.
    ///
    /// # Errors
    /// Returns `RangeOverflow` / `RangeUnderflow` if `x * 10^18` is out of range.
    #[inline]
    pub fn from_int(x: I256) -> MathResult<Self> {
        math::from_int(x).map(Self)
    }

    /// Create from a whole `i128`. Always representable.
    #[inline]
    pub fn from_i128(value: i128) -> Self {
        // |i128| * 10^18 < 2^188
        let scaled = I256::from_bits(U256::from(value.unsigned_abs()) * SCALE.to_bits());
        if value < 0 {
            Self(scaled.wrapping_neg())
        } else {
            Self(scaled)
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub const fn raw_value(self) -> I256 {
        self.0
    }

    /// Whole part, truncated toward zero, as a plain integer.
    #[inline]
    pub fn to_int(self) -> I256 {
        math::to_int(self.0)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `RangeOverflow` or `RangeUnderflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        math::add(self.0, rhs.0).map(Self)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `RangeOverflow` or `RangeUnderflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> MathResult<Self> {
        math::sub(self.0, rhs.0).map(Self)
    }

    /// Checked multiplication, truncated toward zero.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> MathResult<Self> {
        math::mul(self.0, rhs.0).map(Self)
    }

    /// Checked division, truncated toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor, a range error otherwise.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> MathResult<Self> {
        math::div(self.0, rhs.0).map(Self)
    }

    /// Checked remainder with the sign of `self`.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> MathResult<Self> {
        math::rem(self.0, rhs.0).map(Self)
    }

    /// Checked negation; fails for `MIN`.
    #[inline]
    pub fn checked_neg(self) -> MathResult<Self> {
        math::neg(self.0).map(Self)
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `InvalidAbsoluteValue` for `MIN`.
    #[inline]
    pub fn abs(self) -> MathResult<Self> {
        math::abs(self.0).map(Self)
    }

    /// Overflow-free average, rounded toward negative infinity.
    #[inline]
    pub fn avg(self, other: Self) -> Self {
        Self(math::avg(self.0, other.0))
    }

    #[inline]
    pub fn inv(self) -> MathResult<Self> {
        math::inv(self.0).map(Self)
    }

    #[inline]
    pub fn powu(self, exponent: u64) -> MathResult<Self> {
        math::powu(self.0, exponent).map(Self)
    }

    #[inline]
    pub fn sqrt(self) -> MathResult<Self> {
        math::sqrt(self.0).map(Self)
    }

    /// Geometric mean of `self` and `other`.
    #[inline]
    pub fn gm(self, other: Self) -> MathResult<Self> {
        math::gm(self.0, other.0).map(Self)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round down to a whole value.
    ///
    /// # Errors
    /// Returns `WholeRangeUnderflow` below `MIN_WHOLE`.
    #[inline]
    pub fn floor(self) -> MathResult<Self> {
        math::floor(self.0).map(Self)
    }

    /// Round up to a whole value.
    ///
    /// # Errors
    /// Returns `WholeRangeOverflow` above `MAX_WHOLE`.
    #[inline]
    pub fn ceil(self) -> MathResult<Self> {
        math::ceil(self.0).map(Self)
    }

    /// Fractional part with the sign of `self`.
    #[inline]
    pub fn frac(self) -> Self {
        Self(math::frac(self.0))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<I256> for SD59x18 {
    #[inline]
    fn from(raw: I256) -> Self {
        Self(raw)
    }
}

impl From<SD59x18> for I256 {
    #[inline]
    fn from(value: SD59x18) -> Self {
        value.0
    }
}

impl Neg for SD59x18 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("SD59x18 negation overflow")
    }
}

// Infallible operators for ergonomics (panic on failure - use checked_* in production)
impl Add for SD59x18 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("SD59x18 addition overflow")
    }
}

impl Sub for SD59x18 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("SD59x18 subtraction overflow")
    }
}

impl Mul for SD59x18 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("SD59x18 multiplication overflow")
    }
}

impl Div for SD59x18 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("SD59x18 division failed")
    }
}

impl Rem for SD59x18 {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).expect("SD59x18 remainder by zero")
    }
}

impl fmt::Debug for SD59x18 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SD59x18({}, raw={})", self, self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::MathError;

    fn raw(v: i128) -> SD59x18 {
        SD59x18::from_raw(I256::from_i128(v))
    }

    #[test]
    fn test_constants() {
        assert_eq!(SD59x18::ONE.raw_value(), I256::from_i128(1_000_000_000_000_000_000));
        assert_eq!(SD59x18::ZERO.raw_value(), I256::ZERO);
        assert_eq!(SD59x18::SCALE, SD59x18::ONE);
        assert!(SD59x18::MIN < SD59x18::MIN_WHOLE);
        assert!(SD59x18::MAX_WHOLE < SD59x18::MAX);
    }

    #[test]
    fn test_from_i128() {
        let x = SD59x18::from_i128(100);
        assert_eq!(x.raw_value(), I256::from_i128(100_000_000_000_000_000_000));
        assert_eq!(x.to_int(), I256::from_i128(100));
        assert!(SD59x18::from_i128(i128::MIN).is_negative());
        assert_eq!(SD59x18::from_i128(i128::MAX).to_int(), I256::from_i128(i128::MAX));
    }

    #[test]
    fn test_from_int_out_of_range() {
        assert_eq!(SD59x18::from_int(I256::MAX), Err(MathError::RangeOverflow));
        assert_eq!(SD59x18::from_int(I256::MIN), Err(MathError::RangeUnderflow));
    }

    #[test]
    fn test_checked_add() {
        let a = SD59x18::from_i128(100);
        let b = SD59x18::from_i128(50);
        assert_eq!(a.checked_add(b), Ok(SD59x18::from_i128(150)));
        assert_eq!(SD59x18::MAX.checked_add(raw(1)), Err(MathError::RangeOverflow));
    }

    #[test]
    fn test_checked_sub() {
        let a = SD59x18::from_i128(100);
        let b = SD59x18::from_i128(30);
        assert_eq!(b.checked_sub(a), Ok(SD59x18::from_i128(-70)));
        assert_eq!(SD59x18::MIN.checked_sub(raw(1)), Err(MathError::RangeUnderflow));
    }

    #[test]
    fn test_checked_mul_div() {
        let x = raw(1_500_000_000_000_000_000);
        assert_eq!(x.checked_mul(x), Ok(raw(2_250_000_000_000_000_000)));
        assert_eq!(
            SD59x18::from_i128(10).checked_div(SD59x18::from_i128(4)),
            Ok(raw(2_500_000_000_000_000_000))
        );
        assert_eq!(SD59x18::ONE.checked_div(SD59x18::ZERO), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_operators() {
        let a = SD59x18::from_i128(6);
        let b = SD59x18::from_i128(4);
        assert_eq!(a + b, SD59x18::from_i128(10));
        assert_eq!(a - b, SD59x18::from_i128(2));
        assert_eq!(a * b, SD59x18::from_i128(24));
        assert_eq!(a / b, raw(1_500_000_000_000_000_000));
        assert_eq!(a % b, SD59x18::from_i128(2));
        assert_eq!(-a, SD59x18::from_i128(-6));
    }

    #[test]
    #[should_panic(expected = "SD59x18 addition overflow")]
    fn test_add_operator_panics_on_overflow() {
        let _ = SD59x18::MAX + SD59x18::ONE;
    }

    #[test]
    #[should_panic(expected = "SD59x18 division failed")]
    fn test_div_operator_panics_on_zero() {
        let _ = SD59x18::ONE / SD59x18::ZERO;
    }

    #[test]
    fn test_comparison() {
        let a = SD59x18::from_i128(100);
        let b = SD59x18::from_i128(-50);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
        assert!(SD59x18::MIN < b);
    }

    #[test]
    fn test_abs() {
        assert_eq!(SD59x18::from_i128(-100).abs(), Ok(SD59x18::from_i128(100)));
        assert_eq!(SD59x18::MIN.abs(), Err(MathError::InvalidAbsoluteValue));
    }

    #[test]
    fn test_avg() {
        assert_eq!(SD59x18::MAX.avg(SD59x18::MAX), SD59x18::MAX);
        assert_eq!(
            SD59x18::from_i128(100).avg(SD59x18::from_i128(200)),
            SD59x18::from_i128(150)
        );
        assert_eq!(raw(-3).avg(SD59x18::ZERO), raw(-2));
    }

    #[test]
    fn test_rounding() {
        let x = raw(-2_500_000_000_000_000_000);
        assert_eq!(x.floor(), Ok(SD59x18::from_i128(-3)));
        assert_eq!(x.ceil(), Ok(SD59x18::from_i128(-2)));
        assert_eq!(x.frac(), raw(-500_000_000_000_000_000));
        assert_eq!(SD59x18::MIN.floor(), Err(MathError::WholeRangeUnderflow));
        assert_eq!(SD59x18::MAX.ceil(), Err(MathError::WholeRangeOverflow));
    }

    #[test]
    fn test_powers_and_roots() {
        assert_eq!(SD59x18::from_i128(3).powu(3), Ok(SD59x18::from_i128(27)));
        assert_eq!(SD59x18::from_i128(9).sqrt(), Ok(SD59x18::from_i128(3)));
        assert_eq!(
            SD59x18::from_i128(-1).sqrt(),
            Err(MathError::SqrtNegativeInput)
        );
        assert_eq!(
            SD59x18::from_i128(3).gm(SD59x18::from_i128(12)),
            Ok(SD59x18::from_i128(6))
        );
        assert_eq!(SD59x18::from_i128(2).inv(), Ok(SD59x18::HALF));
    }

    #[test]
    fn test_zero_operations() {
        let zero = SD59x18::ZERO;
        let one = SD59x18::ONE;

        assert_eq!(zero.checked_add(one), Ok(one));
        assert_eq!(one.checked_sub(one), Ok(zero));
        assert_eq!(zero.checked_mul(one), Ok(zero));
        assert_eq!(zero.avg(zero), zero);
    }
}
