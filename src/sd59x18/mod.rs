// ============================================================================
// SD59x18 Module
// Signed 59.18-decimal fixed-point number, two mirrored call surfaces
// ============================================================================
//
// This module provides:
// - constants: SCALE and the boundary values, as raw I256
// - math: free functions over the raw scaled I256 (raw surface)
// - SD59x18: #[repr(transparent)] wrapper delegating to `math` (typed surface)
// - conversions: decimal strings, rust_decimal, serde
//
// The typed surface holds no logic of its own, so for every input both
// surfaces return the same bits or the same MathError.

pub mod constants;
mod conversion;
pub mod math;
mod value;

pub use value::SD59x18;
