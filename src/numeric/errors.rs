// ============================================================================
// Numeric Errors
// Error kinds for checked SD59x18 arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point arithmetic operations.
///
/// Both call surfaces (raw `I256` functions and the `SD59x18` wrapper) report
/// failures through this type, so a given input always fails with the same
/// kind regardless of the surface used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Result exceeded MAX_SD59X18
    RangeOverflow,
    /// Result below MIN_SD59X18
    RangeUnderflow,
    /// Attempted division (or remainder) by zero
    DivisionByZero,
    /// Absolute value of MIN_SD59X18 has no positive counterpart
    InvalidAbsoluteValue,
    /// Ceiling above MAX_WHOLE_SD59X18
    WholeRangeOverflow,
    /// Floor below MIN_WHOLE_SD59X18
    WholeRangeUnderflow,
    /// Square root of a negative number
    SqrtNegativeInput,
    /// Geometric mean of operands with opposite signs
    GmNegativeProduct,
    /// Input string or value is invalid
    InvalidInput,
}

impl MathError {
    /// True for the kinds raised when a result leaves the representable range.
    pub const fn is_range_error(self) -> bool {
        matches!(
            self,
            MathError::RangeOverflow
                | MathError::RangeUnderflow
                | MathError::WholeRangeOverflow
                | MathError::WholeRangeUnderflow
        )
    }

    /// Short stable identifier, used as a structured field in diagnostics.
    pub const fn kind(self) -> &'static str {
        match self {
            MathError::RangeOverflow => "range_overflow",
            MathError::RangeUnderflow => "range_underflow",
            MathError::DivisionByZero => "division_by_zero",
            MathError::InvalidAbsoluteValue => "invalid_absolute_value",
            MathError::WholeRangeOverflow => "whole_range_overflow",
            MathError::WholeRangeUnderflow => "whole_range_underflow",
            MathError::SqrtNegativeInput => "sqrt_negative_input",
            MathError::GmNegativeProduct => "gm_negative_product",
            MathError::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::RangeOverflow => {
                write!(f, "arithmetic overflow: result exceeded MAX_SD59x18")
            },
            MathError::RangeUnderflow => {
                write!(f, "arithmetic underflow: result below MIN_SD59x18")
            },
            MathError::DivisionByZero => write!(f, "division by zero"),
            MathError::InvalidAbsoluteValue => {
                write!(f, "absolute value of MIN_SD59x18 is not representable")
            },
            MathError::WholeRangeOverflow => {
                write!(f, "ceiling overflow: result exceeded MAX_WHOLE_SD59x18")
            },
            MathError::WholeRangeUnderflow => {
                write!(f, "floor underflow: result below MIN_WHOLE_SD59x18")
            },
            MathError::SqrtNegativeInput => write!(f, "square root of a negative number"),
            MathError::GmNegativeProduct => {
                write!(f, "geometric mean of operands with a negative product")
            },
            MathError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for numeric operations
pub type MathResult<T> = Result<T, MathError>;
