//! Test logging support.
//!
//! Every test follows the same shape: call [`init_test_logging`] once,
//! announce itself with [`test_phase!`](crate::test_phase), make checks
//! through [`assert_with_log!`](crate::assert_with_log) so failures land in
//! the log with expected/actual values, and close with
//! [`test_complete!`](crate::test_complete).
//!
//! The `TEST_LOG` environment variable selects the filter (any
//! `tracing_subscriber::EnvFilter` directive); the default is `info`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests (idempotent).
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_env("TEST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Announces a test phase.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        ::tracing::info!(phase = $name, "test phase");
    };
}

/// Asserts a condition, logging expected/actual values either way.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $what:expr, $expected:expr, $actual:expr) => {
        if $cond {
            ::tracing::debug!(what = $what, actual = ?$actual, "check ok");
        } else {
            ::tracing::error!(
                what = $what,
                expected = ?$expected,
                actual = ?$actual,
                "check failed"
            );
            panic!("{}: expected {:?}, got {:?}", $what, $expected, $actual);
        }
    };
}

/// Marks a test as complete.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        ::tracing::info!(test = $name, "test complete");
    };
}
