// ============================================================================
// Logging Setup
// fmt subscriber for the kernel's tracing diagnostics
// ============================================================================
//
// The kernel only emits events; installing a subscriber is left to the
// application. This helper covers the common case of tests, demos and small
// binaries that want rejected operations printed to stderr.

use tracing::Level;

/// Install a global fmt subscriber at `level`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
