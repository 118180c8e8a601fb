//! Dolly driver.
//!
//! Ties the pipeline together: load a compilation, classify its marked types,
//! render clone methods, persist the results and report diagnostics.
//!
//! The `dolly` binary is a thin argument parser over [`commands`].

pub mod commands;
pub mod config;
pub mod input;
pub mod persist;
pub mod pipeline;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=dolly_model=debug` or
/// `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
