//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Fenceline tracing/logging system.
///
/// Reads the `FENCELINE_LOG` environment variable for per-subsystem log
/// levels, e.g. `FENCELINE_LOG=fenceline_analysis=debug,fenceline_cli=warn`.
///
/// Falls back to `fenceline=info` when `FENCELINE_LOG` is not set or is
/// invalid.
///
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FENCELINE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("fenceline=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
