//! Diagnostic logging setup.
//!
//! Installs a `tracing` subscriber writing to stderr. The filter comes from
//! `GIT_BUMP_LOG` (EnvFilter syntax, e.g. `git_bump=debug`) and defaults to
//! `warn` so regular runs only show the user-facing output.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "GIT_BUMP_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment, falling back to `warn`
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Subsequent calls are no-ops.
pub fn init() {
    let _ = fmt()
        .with_env_filter(build_env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
