use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. An invalid filter falls back to
/// `info`; calling this more than once is a no-op.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
