//! Process-wide tracing/logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call multiple
/// times; subsequent calls become no-ops. Library crates must never call
/// this — only binaries do.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
