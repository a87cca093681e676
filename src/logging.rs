//! Logging setup for the binary
//!
//! Configure via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - graph build summary, commits, undo, sayer requests
//! - `RUST_LOG=wordhop::interaction=trace` - menu transitions as well
//!
//! Output goes to stderr so it never mixes with exported JSON on stdout.

use std::io;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber
///
/// Call once, before any command runs.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
