//! No-op-capable tracing layer.
//!
//! With the `tracing-integration` feature these macros forward to
//! `tracing`; without it they compile to nothing, so the fold driver and
//! scope guard carry zero instrumentation overhead.

#[cfg(feature = "tracing-integration")]
macro_rules! scope_trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing-integration"))]
macro_rules! scope_trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "tracing-integration")]
macro_rules! scope_error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}

#[cfg(not(feature = "tracing-integration"))]
macro_rules! scope_error {
    ($($arg:tt)*) => {{}};
}

pub(crate) use {scope_error, scope_trace};
