//! Shared test helpers for rnd integration tests.
#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per test binary. Honors `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .init();
    });
}
