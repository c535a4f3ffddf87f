//! Tracing setup for test binaries and utilities.
//!
//! Tests across multiple integration binaries all funnel through
//! [`init_test_logging`]; the `Once` guard makes repeated calls harmless
//! within one binary. Verbosity is controlled with `RUST_LOG` as usual.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes a fmt subscriber with `RUST_LOG` filtering.
///
/// Defaults to `info` for the suite's own crates and `warn` elsewhere;
/// CDP-level chatter stays out of test output unless asked for.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn,swaglab_e2e=info,swaglab_browser_test=info")
        });

        // try_init: another harness may have installed a subscriber first.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
