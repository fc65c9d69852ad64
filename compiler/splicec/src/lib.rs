//! Splice CLI library.
//!
//! The `splice` binary is a thin argument dispatcher; the commands live here
//! so they can be tested without spawning a process.

use std::sync::Once;

pub mod commands;
mod options;

pub use options::{parse_options, CliOptions, MAX_DEPTH_ENV};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set; the filter is read from it.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
