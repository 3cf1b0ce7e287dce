//! Shiori Testkit - Shared Test Doubles and Fixtures
//!
//! Common doubles so test modules stop duplicating them: a scripted
//! HTTP transport, credential stores that count or fail, a
//! hand-advanced clock, canned wire bodies, and an assembled
//! environment wiring it all together.
//!
//! Add it to a crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! shiori-testkit = { path = "../shiori-testkit" }
//! ```

#![allow(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

/// Assembled test environment.
pub mod env;

/// Canned wire bodies and sample entities.
pub mod fixtures;

/// Mock effect handlers.
pub mod mocks;

// Re-export commonly used items
pub use env::{TestEnv, TEST_BASE_URL, TEST_EPOCH_MS};
pub use fixtures::*;
pub use mocks::{CountingCredentialStore, FailingCredentialStore, MockClock, MockTransport};

/// Install a fmt subscriber honoring `RUST_LOG`, for reading trace
/// output while debugging a test. Safe to call from every test; only
/// the first call installs.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
