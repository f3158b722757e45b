use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, e.g. `application=debug`.
pub const LOG_ENV: &str = "FAQBOT_LOG";

/// Install the global subscriber. Logs go to stderr so the chat transcript on
/// stdout stays readable. `FAQBOT_LOG` wins over the `verbose` flag.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, repeated runs in one process) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub struct Telemetry {
    start: Instant,
}

impl Telemetry {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_micros(&self) -> u128 {
        self.start.elapsed().as_micros()
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
