// ============================================================================
// Utilities Module
// Helpers around the numeric kernel
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

// Re-export logging setup (requires "logging" feature)
#[cfg(feature = "logging")]
pub use logging::init_logging;
