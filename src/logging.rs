use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr so stdout carries only the report.
/// Silent below `warn` unless `RUST_LOG` asks for more.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .try_init()
        // Already installed by an earlier call; keep that subscriber.
        .ok();
}
