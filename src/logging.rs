//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Filter used when nothing else is configured.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Pick the log filter directive.
///
/// `--verbose` wins over the configured level, which wins over the default.
/// `RUST_LOG` still overrides all of them in `init_logging`.
pub fn log_directive(verbose: bool, configured: Option<&str>) -> &str {
    if verbose {
        "debug"
    } else {
        configured.unwrap_or(DEFAULT_DIRECTIVE)
    }
}

/// Initialize the global tracing subscriber, writing to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
