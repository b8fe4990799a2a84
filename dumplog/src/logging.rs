//! Development-time tracing for the dumper.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to stderr.
//!   Failures reported by [`TracingSink`](crate::io::sink::TracingSink) end up here.
//!
//! - **Dump files (`io/dumper`)**: The `.txt`/`.log` files callers ask for.
//!   Always written as requested, unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// Returns `false` if a global subscriber was already installed.
///
/// # Example
/// ```bash
/// RUST_LOG=dumplog=debug cargo test -p dumplog
/// ```
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_ok()
}
