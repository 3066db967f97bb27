//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `MEDITATE_LOG=meditate=debug`.
pub const LOG_ENV: &str = "MEDITATE_LOG";

static INIT: Once = Once::new();

/// Installs a stderr subscriber. Safe to call more than once; later calls are ignored.
///
/// `MEDITATE_LOG` wins when set and valid. Otherwise the level is `warn`, or `debug`
/// when `verbose` is true.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "meditate=debug"
        } else {
            "meditate=warn"
        };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose)
                    .without_time(),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("still logging");
    }
}
