//! Tracing bootstrap for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Filter comes from `WARDEN_LOG`,
/// falling back to `RUST_LOG`, then `info`. Calling this more than
/// once is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env("WARDEN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
