// ============================================================================
// Diagnostics
// Structured tracing for rejected operations
// ============================================================================
//
// Every failing operation hands its error to `reject_unary` or `reject_binary`,
// so a subscriber sees one `debug` event per failure with the operation name, the
// operands and the error kind. Successful paths emit nothing.

use super::errors::MathError;
use super::int256::I256;

/// Tracing target for all kernel diagnostics.
pub const TARGET: &str = "sd59x18";

/// Record a rejected unary operation and hand the error back.
#[inline]
pub(crate) fn reject_unary(op: &'static str, x: I256, error: MathError) -> MathError {
    tracing::debug!(
        target: TARGET,
        op,
        x = %x,
        kind = error.kind(),
        range = error.is_range_error(),
        "operation rejected: {}",
        error
    );
    error
}

/// Record a rejected binary operation and hand the error back.
#[inline]
pub(crate) fn reject_binary(op: &'static str, x: I256, y: I256, error: MathError) -> MathError {
    tracing::debug!(
        target: TARGET,
        op,
        x = %x,
        y = %y,
        kind = error.kind(),
        range = error.is_range_error(),
        "operation rejected: {}",
        error
    );
    error
}

/// Direction of a range failure given the sign the exact result would have.
#[inline]
pub(crate) const fn range_error(negative: bool) -> MathError {
    if negative {
        MathError::RangeUnderflow
    } else {
        MathError::RangeOverflow
    }
}
