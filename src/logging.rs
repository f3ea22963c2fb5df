//! Logging init: stderr with env-filter, for host binaries and tests.
//!
//! The library itself only emits `tracing` events; where they go is the
//! host's decision. This helper is a convenient default.

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. Panics if a global subscriber is already
/// set; call at most once per process.
pub fn init_logging_stderr() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sitemap_writer=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
