//! tracing setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `verbose` and `warn` without.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
