// ============================================================================
// Numeric Module
// Working-width integer and error types shared by both SD59x18 surfaces
// ============================================================================
//
// This module provides:
// - I256: 256-bit two's-complement integer (the raw SD59x18 representation)
// - MathError: Error kinds for checked arithmetic
// - diagnostics: tracing events for rejected operations
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result or Option (no wrapping, no panics)
// - Fixed-width intermediates only (U256 / U512), no arbitrary precision

pub(crate) mod diagnostics;
mod errors;
mod int256;

pub use diagnostics::TARGET as DIAGNOSTICS_TARGET;
pub use errors::{MathError, MathResult};
pub use int256::I256;
