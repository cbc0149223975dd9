// ============================================================================
// Logging
// Optional tracing subscriber bootstrap
// ============================================================================

use tracing::Level;

/// Install a fmt subscriber printing events at `level` and above.
///
/// Rejected parses and operations are logged at `debug`, successful
/// arithmetic at `trace`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}
