//! Logging setup.
//!
//! The engine only emits `tracing` events; embedding applications call
//! [`init`] once to get formatted output. `EXODO_LOG` accepts any
//! `EnvFilter` directive and wins over the level passed in.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "EXODO_LOG";

fn filter_for(default_level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()))
}

/// Install the global fmt subscriber.
///
/// Returns false when a subscriber was already installed (tests, or an
/// embedding application that set up its own).
pub fn init(default_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(default_level))
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Subscriber for tests: captured by the test harness, never panics when
/// called from several tests.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(Level::DEBUG))
        .with_test_writer()
        .try_init();
}
