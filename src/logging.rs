//! Diagnostic logging setup
//!
//! Logs go to stderr so report output on stdout stays machine-readable.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "spendsmart=warn";

/// Install the global tracing subscriber once; later calls are no-ops.
///
/// `verbose` raises the crate's level to `debug` unless `RUST_LOG` says
/// otherwise.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let fallback = if verbose { "spendsmart=debug" } else { DEFAULT_FILTER };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        // try_init fails only if another subscriber is already set
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
