// ============================================================================
// Surface Interface
// Common contract for the raw and typed SD59x18 call surfaces
// ============================================================================

use crate::numeric::{MathResult, I256, DIAGNOSTICS_TARGET};
use crate::sd59x18::{math, SD59x18};
use std::fmt;

/// One call surface over the SD59x18 operation set.
///
/// Implementations: `RawSurface` (free functions on `I256`) and
/// `TypedSurface` (methods on `SD59x18`). Conformance tests and benchmarks
/// drive both through this trait with identical raw inputs.
pub trait Sd59x18Surface {
    /// The value type this surface computes with
    type Value: Copy + PartialEq + fmt::Debug;

    /// Surface name, reported in divergence diagnostics
    fn name(&self) -> &'static str;

    /// Bring a raw scaled value into this surface's value type
    fn lift(&self, raw: I256) -> Self::Value;

    /// Extract the raw scaled value
    fn lower(&self, value: Self::Value) -> I256;

    fn from_int(&self, x: I256) -> MathResult<Self::Value>;
    fn to_int(&self, x: Self::Value) -> I256;

    fn add(&self, x: Self::Value, y: Self::Value) -> MathResult<Self::Value>;
    fn sub(&self, x: Self::Value, y: Self::Value) -> MathResult<Self::Value>;
    fn mul(&self, x: Self::Value, y: Self::Value) -> MathResult<Self::Value>;
    fn div(&self, x: Self::Value, y: Self::Value) -> MathResult<Self::Value>;
    fn rem(&self, x: Self::Value, y: Self::Value) -> MathResult<Self::Value>;
    fn avg(&self, x: Self::Value, y: Self::Value) -> Self::Value;
    fn gm(&self, x: Self::Value, y: Self::Value) -> MathResult<Self::Value>;
    fn powu(&self, x: Self::Value, y: u64) -> MathResult<Self::Value>;

    fn neg(&self, x: Self::Value) -> MathResult<Self::Value>;
    fn abs(&self, x: Self::Value) -> MathResult<Self::Value>;
    fn inv(&self, x: Self::Value) -> MathResult<Self::Value>;
    fn sqrt(&self, x: Self::Value) -> MathResult<Self::Value>;
    fn floor(&self, x: Self::Value) -> MathResult<Self::Value>;
    fn ceil(&self, x: Self::Value) -> MathResult<Self::Value>;
    fn frac(&self, x: Self::Value) -> Self::Value;
}

// ============================================================================
// Raw Surface
// ============================================================================

/// Free-function surface over the raw scaled `I256`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSurface;

impl Sd59x18Surface for RawSurface {
    type Value = I256;

    fn name(&self) -> &'static str {
        "raw"
    }

    fn lift(&self, raw: I256) -> I256 {
        raw
    }

    fn lower(&self, value: I256) -> I256 {
        value
    }

    fn from_int(&self, x: I256) -> MathResult<I256> {
        math::from_int(x)
    }

    fn to_int(&self, x: I256) -> I256 {
        math::to_int(x)
    }

    fn add(&self, x: I256, y: I256) -> MathResult<I256> {
        math::add(x, y)
    }

    fn sub(&self, x: I256, y: I256) -> MathResult<I256> {
        math::sub(x, y)
    }

    fn mul(&self, x: I256, y: I256) -> MathResult<I256> {
        math::mul(x, y)
    }

    fn div(&self, x: I256, y: I256) -> MathResult<I256> {
        math::div(x, y)
    }

    fn rem(&self, x: I256, y: I256) -> MathResult<I256> {
        math::rem(x, y)
    }

    fn avg(&self, x: I256, y: I256) -> I256 {
        math::avg(x, y)
    }

    fn gm(&self, x: I256, y: I256) -> MathResult<I256> {
        math::gm(x, y)
    }

    fn powu(&self, x: I256, y: u64) -> MathResult<I256> {
        math::powu(x, y)
    }

    fn neg(&self, x: I256) -> MathResult<I256> {
        math::neg(x)
    }

    fn abs(&self, x: I256) -> MathResult<I256> {
        math::abs(x)
    }

    fn inv(&self, x: I256) -> MathResult<I256> {
        math::inv(x)
    }

    fn sqrt(&self, x: I256) -> MathResult<I256> {
        math::sqrt(x)
    }

    fn floor(&self, x: I256) -> MathResult<I256> {
        math::floor(x)
    }

    fn ceil(&self, x: I256) -> MathResult<I256> {
        math::ceil(x)
    }

    fn frac(&self, x: I256) -> I256 {
        math::frac(x)
    }
}

// ============================================================================
// Typed Surface
// ============================================================================

/// Method surface over the `SD59x18` wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedSurface;

impl Sd59x18Surface for TypedSurface {
    type Value = SD59x18;

    fn name(&self) -> &'static str {
        "typed"
    }

    fn lift(&self, raw: I256) -> SD59x18 {
        SD59x18::from_raw(raw)
    }

    fn lower(&self, value: SD59x18) -> I256 {
        value.raw_value()
    }

    fn from_int(&self, x: I256) -> MathResult<SD59x18> {
        SD59x18::from_int(x)
    }

    fn to_int(&self, x: SD59x18) -> I256 {
        x.to_int()
    }

    fn add(&self, x: SD59x18, y: SD59x18) -> MathResult<SD59x18> {
        x.checked_add(y)
    }

    fn sub(&self, x: SD59x18, y: SD59x18) -> MathResult<SD59x18> {
        x.checked_sub(y)
    }

    fn mul(&self, x: SD59x18, y: SD59x18) -> MathResult<SD59x18> {
        x.checked_mul(y)
    }

    fn div(&self, x: SD59x18, y: SD59x18) -> MathResult<SD59x18> {
        x.checked_div(y)
    }

    fn rem(&self, x: SD59x18, y: SD59x18) -> MathResult<SD59x18> {
        x.checked_rem(y)
    }

    fn avg(&self, x: SD59x18, y: SD59x18) -> SD59x18 {
        x.avg(y)
    }

    fn gm(&self, x: SD59x18, y: SD59x18) -> MathResult<SD59x18> {
        x.gm(y)
    }

    fn powu(&self, x: SD59x18, y: u64) -> MathResult<SD59x18> {
        x.powu(y)
    }

    fn neg(&self, x: SD59x18) -> MathResult<SD59x18> {
        x.checked_neg()
    }

    fn abs(&self, x: SD59x18) -> MathResult<SD59x18> {
        x.abs()
    }

    fn inv(&self, x: SD59x18) -> MathResult<SD59x18> {
        x.inv()
    }

    fn sqrt(&self, x: SD59x18) -> MathResult<SD59x18> {
        x.sqrt()
    }

    fn floor(&self, x: SD59x18) -> MathResult<SD59x18> {
        x.floor()
    }

    fn ceil(&self, x: SD59x18) -> MathResult<SD59x18> {
        x.ceil()
    }

    fn frac(&self, x: SD59x18) -> SD59x18 {
        x.frac()
    }
}

// ============================================================================
// Operation Dispatch
// ============================================================================

/// Every operation both surfaces expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FromInt,
    ToInt,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Avg,
    Gm,
    Powu,
    Neg,
    Abs,
    Inv,
    Sqrt,
    Floor,
    Ceil,
    Frac,
}

impl Operation {
    pub const ALL: [Operation; 17] = [
        Operation::FromInt,
        Operation::ToInt,
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Rem,
        Operation::Avg,
        Operation::Gm,
        Operation::Powu,
        Operation::Neg,
        Operation::Abs,
        Operation::Inv,
        Operation::Sqrt,
        Operation::Floor,
        Operation::Ceil,
        Operation::Frac,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::FromInt => "from_int",
            Operation::ToInt => "to_int",
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Rem => "rem",
            Operation::Avg => "avg",
            Operation::Gm => "gm",
            Operation::Powu => "powu",
            Operation::Neg => "neg",
            Operation::Abs => "abs",
            Operation::Inv => "inv",
            Operation::Sqrt => "sqrt",
            Operation::Floor => "floor",
            Operation::Ceil => "ceil",
            Operation::Frac => "frac",
        }
    }

    /// Number of SD59x18 operands (`powu` takes its exponent separately).
    pub fn arity(self) -> usize {
        match self {
            Operation::Add
            | Operation::Sub
            | Operation::Mul
            | Operation::Div
            | Operation::Rem
            | Operation::Avg
            | Operation::Gm => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Run `op` on `surface` with raw inputs and return the raw result.
///
/// Unary operations ignore `y`. For `powu` the exponent is the low six bits
/// of `y` (0..=63).
pub fn evaluate<S: Sd59x18Surface>(
    surface: &S,
    op: Operation,
    x: I256,
    y: I256,
) -> MathResult<I256> {
    let (a, b) = (surface.lift(x), surface.lift(y));
    let value = match op {
        Operation::FromInt => surface.from_int(x)?,
        Operation::ToInt => return Ok(surface.to_int(a)),
        Operation::Add => surface.add(a, b)?,
        Operation::Sub => surface.sub(a, b)?,
        Operation::Mul => surface.mul(a, b)?,
        Operation::Div => surface.div(a, b)?,
        Operation::Rem => surface.rem(a, b)?,
        Operation::Avg => surface.avg(a, b),
        Operation::Gm => surface.gm(a, b)?,
        Operation::Powu => surface.powu(a, y.to_bits().low_u64() & 0x3f)?,
        Operation::Neg => surface.neg(a)?,
        Operation::Abs => surface.abs(a)?,
        Operation::Inv => surface.inv(a)?,
        Operation::Sqrt => surface.sqrt(a)?,
        Operation::Floor => surface.floor(a)?,
        Operation::Ceil => surface.ceil(a)?,
        Operation::Frac => surface.frac(a),
    };
    Ok(surface.lower(value))
}

/// Outcomes of the two surfaces for one input that disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceDivergence {
    pub operation: Operation,
    pub x: I256,
    pub y: I256,
    pub raw: MathResult<I256>,
    pub typed: MathResult<I256>,
}

impl fmt::Display for SurfaceDivergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operation.arity() == 2 {
            write!(f, "{}({}, {})", self.operation, self.x, self.y)?;
        } else {
            write!(f, "{}({})", self.operation, self.x)?;
        }
        write!(
            f,
            ": {} surface gave {:?}, {} surface gave {:?}",
            RawSurface.name(),
            self.raw,
            TypedSurface.name(),
            self.typed
        )
    }
}

impl std::error::Error for SurfaceDivergence {}

/// Evaluate `op` on both surfaces and return the shared outcome.
///
/// # Errors
/// `SurfaceDivergence` if the results or the error kinds differ.
pub fn cross_check(
    op: Operation,
    x: I256,
    y: I256,
) -> Result<MathResult<I256>, SurfaceDivergence> {
    let raw = evaluate(&RawSurface, op, x, y);
    let typed = evaluate(&TypedSurface, op, x, y);
    if raw == typed {
        Ok(raw)
    } else {
        tracing::warn!(
            target: DIAGNOSTICS_TARGET,
            op = op.name(),
            x = %x,
            y = %y,
            "surface divergence: {}={:?} {}={:?}",
            RawSurface.name(),
            raw,
            TypedSurface.name(),
            typed
        );
        Err(SurfaceDivergence {
            operation: op,
            x,
            y,
            raw,
            typed,
        })
    }
}
