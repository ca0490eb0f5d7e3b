use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging to stderr, leaving stdout for the rendered prompt.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
