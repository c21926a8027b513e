// ============================================================================
// SD59x18 Raw Surface
// Checked free functions over the raw scaled I256
// ============================================================================
//
// This is the single implementation of every SD59x18 algorithm. The typed
// `SD59x18` wrapper delegates here, so both surfaces agree bit for bit and
// fail with the same error kind.
//
// Rounding: mul, div, inv and powu truncate toward zero; sqrt and gm return
// the floor of the exact root; floor, ceil and avg round as their names say.
//
// All algorithms run a fixed sequence of 256/512-bit word operations. Loops
// are bounded by the operand width, never by the operand value.

use super::constants::{MAX_WHOLE_SD59X18, MIN_WHOLE_SD59X18, SCALE, UNIT};
use crate::numeric::diagnostics::{range_error, reject_binary, reject_unary};
use crate::numeric::{MathError, MathResult, I256};
use primitive_types::{U256, U512};

/// SCALE as an unsigned word.
const SCALE_U256: U256 = SCALE.to_bits();

/// Newton rounds for a 512-bit radicand starting within a factor of two.
const SQRT_NEWTON_ROUNDS: usize = 8;

// ============================================================================
// Conversion
// ============================================================================

/// Convert a whole number into SD59x18 (`x * SCALE`).
///
/// # Errors
/// `RangeOverflow` / `RangeUnderflow` when `|x|` exceeds the whole bounds.
pub fn from_int(x: I256) -> MathResult<I256> {
    x.unsigned_abs()
        .checked_mul(SCALE_U256)
        .and_then(|magnitude| I256::from_sign_magnitude(x.is_negative(), magnitude))
        .ok_or_else(|| reject_unary("from_int", x, range_error(x.is_negative())))
}

/// Convert SD59x18 back into a whole number, truncating toward zero.
pub fn to_int(x: I256) -> I256 {
    let whole = I256::from_bits(x.unsigned_abs() / SCALE_U256);
    if x.is_negative() {
        whole.wrapping_neg()
    } else {
        whole
    }
}

// ============================================================================
// Additive Operations
// ============================================================================

/// Checked addition.
///
/// # Errors
/// `RangeOverflow` or `RangeUnderflow` if the result is out of range.
pub fn add(x: I256, y: I256) -> MathResult<I256> {
    x.checked_add(y)
        .ok_or_else(|| reject_binary("add", x, y, range_error(y.is_negative())))
}

/// Checked subtraction.
///
/// # Errors
/// `RangeOverflow` or `RangeUnderflow` if the result is out of range.
pub fn sub(x: I256, y: I256) -> MathResult<I256> {
    x.checked_sub(y)
        .ok_or_else(|| reject_binary("sub", x, y, range_error(!y.is_negative())))
}

/// Checked negation.
///
/// # Errors
/// `RangeOverflow` for `MIN_SD59X18`.
pub fn neg(x: I256) -> MathResult<I256> {
    x.checked_neg()
        .ok_or_else(|| reject_unary("neg", x, MathError::RangeOverflow))
}

/// Absolute value.
///
/// # Errors
/// `InvalidAbsoluteValue` for `MIN_SD59X18`.
pub fn abs(x: I256) -> MathResult<I256> {
    if !x.is_negative() {
        return Ok(x);
    }
    x.checked_neg()
        .ok_or_else(|| reject_unary("abs", x, MathError::InvalidAbsoluteValue))
}

/// Arithmetic mean, rounded toward negative infinity.
///
/// Computed as `(x & y) + ((x ^ y) >> 1)` with a sign-extending shift: the
/// AND keeps the bits both operands share, the shifted XOR contributes half
/// of the bits they differ in. `x + y` is never formed, so the result is
/// exact and total for every pair of inputs, including the range extremes.
pub fn avg(x: I256, y: I256) -> I256 {
    (x & y).wrapping_add((x ^ y) >> 1)
}

// ============================================================================
// Multiplicative Operations
// ============================================================================

/// Fixed-point multiplication, `x * y / SCALE` truncated toward zero.
///
/// The product is formed in 512 bits, so only a result that is itself out of
/// range can fail.
///
/// # Errors
/// `RangeOverflow` or `RangeUnderflow` if the result is out of range.
pub fn mul(x: I256, y: I256) -> MathResult<I256> {
    let negative = x.is_negative() != y.is_negative();
    mul_div(x.unsigned_abs(), y.unsigned_abs(), SCALE_U256)
        .and_then(|magnitude| I256::from_sign_magnitude(negative, magnitude))
        .ok_or_else(|| reject_binary("mul", x, y, range_error(negative)))
}

/// Fixed-point division, `x * SCALE / y` truncated toward zero.
///
/// # Errors
/// - `DivisionByZero` if `y` is zero
/// - `RangeOverflow` or `RangeUnderflow` if the result is out of range
pub fn div(x: I256, y: I256) -> MathResult<I256> {
    scaled_div("div", x, y)
}

/// Reciprocal, `UNIT / x` truncated toward zero.
///
/// # Errors
/// `DivisionByZero` if `x` is zero.
pub fn inv(x: I256) -> MathResult<I256> {
    scaled_div("inv", UNIT, x)
}

/// Remainder of truncated division; carries the sign of `x`.
///
/// Works on raw values, so the result is in the same units as the operands.
///
/// # Errors
/// `DivisionByZero` if `y` is zero.
pub fn rem(x: I256, y: I256) -> MathResult<I256> {
    if y.is_zero() {
        return Err(reject_binary("rem", x, y, MathError::DivisionByZero));
    }
    let remainder = x.unsigned_abs() % y.unsigned_abs();
    I256::from_sign_magnitude(x.is_negative(), remainder)
        .ok_or_else(|| reject_binary("rem", x, y, range_error(x.is_negative())))
}

/// Raise `x` to an unsigned integer power by repeated squaring.
///
/// `powu(x, 0)` is `UNIT` for every `x`, zero included. Each step truncates
/// toward zero like `mul`.
///
/// # Errors
/// `RangeOverflow` or `RangeUnderflow` if the result is out of range.
pub fn powu(x: I256, y: u64) -> MathResult<I256> {
    let negative = x.is_negative() && y & 1 == 1;
    let overflow = || reject_binary("powu", x, I256::from_i128(y as i128), range_error(negative));

    let mut base = x.unsigned_abs();
    let mut result = if y & 1 == 1 { base } else { SCALE_U256 };

    // One round per exponent bit above bit 0, whatever the value of `y`.
    // Rounds past the highest set bit do no word work.
    for bit in 1..u64::BITS {
        if y >> bit == 0 {
            continue;
        }
        base = mul_div(base, base, SCALE_U256).ok_or_else(overflow)?;
        if (y >> bit) & 1 == 1 {
            result = mul_div(result, base, SCALE_U256).ok_or_else(overflow)?;
        }
    }

    I256::from_sign_magnitude(negative, result).ok_or_else(overflow)
}

// ============================================================================
// Roots
// ============================================================================

/// Square root, rounded down.
///
/// The radicand `x * SCALE` is formed in 512 bits, so every non-negative
/// input has a representable root.
///
/// # Errors
/// `SqrtNegativeInput` if `x` is negative.
pub fn sqrt(x: I256) -> MathResult<I256> {
    if x.is_negative() {
        return Err(reject_unary("sqrt", x, MathError::SqrtNegativeInput));
    }
    let root = isqrt(x.unsigned_abs().full_mul(SCALE_U256));
    narrow(root)
        .and_then(|magnitude| I256::from_sign_magnitude(false, magnitude))
        .ok_or_else(|| reject_unary("sqrt", x, MathError::RangeOverflow))
}

/// Geometric mean `sqrt(x * y)`, rounded down.
///
/// Returns zero when either operand is zero.
///
/// # Errors
/// - `GmNegativeProduct` if the operands have opposite signs
/// - `RangeOverflow` for `gm(MIN_SD59X18, MIN_SD59X18)`, whose root is 2^255
pub fn gm(x: I256, y: I256) -> MathResult<I256> {
    if x.is_zero() || y.is_zero() {
        return Ok(I256::ZERO);
    }
    if x.is_negative() != y.is_negative() {
        return Err(reject_binary("gm", x, y, MathError::GmNegativeProduct));
    }
    let root = isqrt(x.unsigned_abs().full_mul(y.unsigned_abs()));
    narrow(root)
        .and_then(|magnitude| I256::from_sign_magnitude(false, magnitude))
        .ok_or_else(|| reject_binary("gm", x, y, MathError::RangeOverflow))
}

// ============================================================================
// Rounding
// ============================================================================

/// Fractional part, `x mod SCALE` with the sign of `x`.
///
/// Total: the truncated whole part of any representable value is itself
/// within the whole-number bounds, so `frac(MIN_SD59X18)` succeeds even
/// though `floor(MIN_SD59X18)` fails.
pub fn frac(x: I256) -> I256 {
    let fraction = I256::from_bits(x.unsigned_abs() % SCALE_U256);
    if x.is_negative() {
        fraction.wrapping_neg()
    } else {
        fraction
    }
}

/// Round toward negative infinity to a whole number.
///
/// # Errors
/// `WholeRangeUnderflow` if `x < MIN_WHOLE_SD59X18`.
pub fn floor(x: I256) -> MathResult<I256> {
    let underflow = || reject_unary("floor", x, MathError::WholeRangeUnderflow);
    if x < MIN_WHOLE_SD59X18 {
        return Err(underflow());
    }

    let fraction = frac(x);
    if fraction.is_zero() {
        return Ok(x);
    }
    let truncated = x.checked_sub(fraction).ok_or_else(underflow)?;
    if x.is_negative() {
        truncated.checked_sub(SCALE).ok_or_else(underflow)
    } else {
        Ok(truncated)
    }
}

/// Round toward positive infinity to a whole number.
///
/// # Errors
/// `WholeRangeOverflow` if `x > MAX_WHOLE_SD59X18`.
pub fn ceil(x: I256) -> MathResult<I256> {
    let overflow = || reject_unary("ceil", x, MathError::WholeRangeOverflow);
    if x > MAX_WHOLE_SD59X18 {
        return Err(overflow());
    }

    let fraction = frac(x);
    if fraction.is_zero() {
        return Ok(x);
    }
    let truncated = x.checked_sub(fraction).ok_or_else(overflow)?;
    if x.is_negative() {
        Ok(truncated)
    } else {
        truncated.checked_add(SCALE).ok_or_else(overflow)
    }
}

// ============================================================================
// Word Helpers
// ============================================================================

fn scaled_div(op: &'static str, x: I256, y: I256) -> MathResult<I256> {
    if y.is_zero() {
        return Err(reject_binary(op, x, y, MathError::DivisionByZero));
    }
    let negative = x.is_negative() != y.is_negative();
    mul_div(x.unsigned_abs(), SCALE_U256, y.unsigned_abs())
        .and_then(|magnitude| I256::from_sign_magnitude(negative, magnitude))
        .ok_or_else(|| reject_binary(op, x, y, range_error(negative)))
}

/// `a * b / denominator` with a 512-bit product, truncated.
/// `None` if the quotient does not fit in 256 bits. `denominator` is non-zero.
#[inline]
fn mul_div(a: U256, b: U256, denominator: U256) -> Option<U256> {
    narrow(a.full_mul(b) / widen(denominator))
}

#[inline]
fn widen(value: U256) -> U512 {
    let U256(l) = value;
    U512([l[0], l[1], l[2], l[3], 0, 0, 0, 0])
}

#[inline]
fn narrow(value: U512) -> Option<U256> {
    let U512(l) = value;
    if (l[4] | l[5] | l[6] | l[7]) != 0 {
        None
    } else {
        Some(U256([l[0], l[1], l[2], l[3]]))
    }
}

/// Integer square root, rounded down.
///
/// Starts from `2^ceil(bits/2)`, which is never below the root, and runs a
/// fixed number of Newton rounds; the sequence decreases monotonically onto
/// the floor root and the final `min` removes the one-off overshoot.
fn isqrt(n: U512) -> U512 {
    if n.is_zero() {
        return n;
    }
    let mut root = U512::one() << n.bits().div_ceil(2);
    for _ in 0..SQRT_NEWTON_ROUNDS {
        root = (root + n / root) >> 1usize;
    }
    let down = n / root;
    if root > down {
        down
    } else {
        root
    }
}

// ============================================================================
// Tests
// ============================================================================
