use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LODB_LOG=debug`.
pub(crate) const LOG_ENV: &str = "LODB_LOG";

// Install a fmt subscriber on stderr. Defaults to warnings only so that
// stdout stays clean for command output.
#[cfg(not(tarpaulin_include))]
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error: it only means a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
