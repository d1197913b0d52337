// SPDX-License-Identifier: MPL-2.0
//! Process-wide diagnostic logging.
//!
//! Output goes to stderr through `tracing-subscriber`. The filter is read from
//! `PROMPT_EDITOR_LOG` using the usual `EnvFilter` directive syntax
//! (e.g. `debug`, `prompt_editor=trace,reqwest=info`) and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "PROMPT_EDITOR_LOG";

/// Filter used when the environment does not provide a valid one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the filter from the environment, falling back to [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. Safe to call more than once; only the
/// first call installs anything.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
        tracing::info!("logging initialized");
    }

    #[test]
    fn default_filter_parses() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.to_string(), "info");
    }
}
