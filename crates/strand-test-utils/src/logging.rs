//! Tracing subscriber for tests.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

static TEST_TRACING: Once = Once::new();

/// Install a global subscriber once per test binary.
///
/// Honours `RUST_LOG`; falls back to `debug`. Output goes through the test
/// writer so it is captured unless `--nocapture` is passed.
pub fn init_test_tracing() {
    TEST_TRACING.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(env_filter),
        );

        if tracing::dispatcher::has_been_set() {
            debug!("tracing subscriber already set");
        } else if let Err(e) = subscriber.try_init() {
            eprintln!("failed to set up test tracing: {e}");
        }
    });
}
