//! Logging setup for the CLI.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! also picks those records up, so everything lands on stderr in one format.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `--verbose` forces `debug`, otherwise the
/// configured level.
pub fn filter_directive(config_level: &str, verbose: bool) -> &str {
    if verbose { "debug" } else { config_level }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the directive. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_logging(config_level: &str, verbose: bool) {
    let directive = filter_directive(config_level, verbose);
    let filter = if verbose {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(filter_directive("warn", true), "debug");
        assert_eq!(filter_directive("info", false), "info");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging("warn", false);
        init_logging("debug", true);
    }
}
