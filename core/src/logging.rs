//! Thin wrapper over `tracing-subscriber`: one function, called once at
//! process start, that turns [`EngineConfig::log_level`](crate::config::EngineConfig)
//! into an installed global subscriber.

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber filtered by `log_level`.
///
/// Safe to call more than once; later calls are no-ops, since an embedding
/// host may wire this up from more than one entry point.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
