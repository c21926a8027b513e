// ============================================================================
// SD59x18 Library
// Signed 59.18-decimal fixed-point arithmetic with mirrored call surfaces
// ============================================================================

//! # SD59x18
//!
//! Deterministic, overflow-checked signed fixed-point arithmetic with 18
//! decimals on a 256-bit integer, for pricing, leverage and settlement math.
//!
//! ## Features
//!
//! - **Two mirrored surfaces**: free functions on the raw `I256`
//!   ([`sd59x18::math`]) and the [`SD59x18`] value type, bit-identical by
//!   construction
//! - **No wraparound, no saturation**: every failure is a typed [`MathError`]
//! - **Overflow-free average** via the bitwise `(x & y) + ((x ^ y) >> 1)` form
//! - **512-bit intermediates** for `mul`, `div`, `sqrt` and `gm`
//! - **Tracing diagnostics** for every rejected operation
//!
//! ## Example
//!
//! ```rust
//! use sd59x18::prelude::*;
//!
//! // Typed surface
//! let price: SD59x18 = "1999.99".parse().unwrap();
//! let qty = SD59x18::from_i128(3);
//! let notional = price.checked_mul(qty).unwrap();
//! assert_eq!(notional.to_string(), "5999.970000000000000000");
//!
//! // Raw surface, same result
//! let raw = math::mul(price.raw_value(), qty.raw_value()).unwrap();
//! assert_eq!(raw, notional.raw_value());
//!
//! // Failures are typed, never wrapped
//! assert_eq!(SD59x18::MIN.abs(), Err(MathError::InvalidAbsoluteValue));
//! assert_eq!(SD59x18::ONE.checked_div(SD59x18::ZERO), Err(MathError::DivisionByZero));
//! ```

pub mod interfaces;
pub mod numeric;
pub mod sd59x18;
pub mod utils;

pub use numeric::{MathError, MathResult, I256};
pub use sd59x18::SD59x18;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::{
        cross_check, evaluate, Operation, RawSurface, Sd59x18Surface, SurfaceDivergence,
        TypedSurface,
    };
    pub use crate::numeric::{MathError, MathResult, I256};
    pub use crate::sd59x18::constants::{
        MAX_SD59X18, MAX_WHOLE_SD59X18, MIN_SD59X18, MIN_WHOLE_SD59X18, SCALE, UNIT,
    };
    pub use crate::sd59x18::{math, SD59x18};
}
