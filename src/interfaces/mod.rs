// ============================================================================
// Interfaces Module
// Traits and contracts for the SD59x18 call surfaces
// ============================================================================

pub mod surface;

pub use surface::{
    cross_check, evaluate, Operation, RawSurface, Sd59x18Surface, SurfaceDivergence, TypedSurface,
};
