use tracing_subscriber::{fmt, EnvFilter};

/// Set up logging to stderr.
///
/// `RUST_LOG` wins if set; otherwise only warnings are shown, or progress
/// too with `--verbose`. stdout stays clean for JSON output.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete.");
}
