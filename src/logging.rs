//! Diagnostic logging for the parameter advisors.
//!
//! Events go to stderr through a `tracing` subscriber filtered by `RUST_LOG`.
//! The default filter only lets warnings through so that the report on stdout
//! stays the only visible output. `RUST_LOG=lcrparams=debug` shows the branch
//! values and gate decisions for every coverage level.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "lcrparams=warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
