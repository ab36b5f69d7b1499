use tracing_subscriber::EnvFilter;

/// Initialize logging with a filter taken from the `QUIZSHIP_LOG`
/// environment variable. Defaults to `info` if the variable is not set
/// or invalid.
pub fn init() {
    let filter =
        EnvFilter::try_from_env("QUIZSHIP_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
