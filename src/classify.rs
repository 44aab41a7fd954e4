//! Fatal/Recoverable panic payload classification.
//!
//! Rust has no exception hierarchy; what unwinds through a fold boundary is
//! a panic payload (`Box<dyn Any + Send>`). This module decides, from the
//! payload's concrete type alone, whether a payload may be captured into a
//! business failure or must keep unwinding.
//!
//! The Fatal set:
//!
//! - [`CancelReason`]: cancellation delivered by the host runtime
//! - [`ScopeLeaked`]: a raise capability used after its fold completed
//! - in-flight raise transports: they are addressed to an enclosing fold
//!   and must reach it intact
//! - [`FatalSignal`]: conditions explicitly marked must-propagate
//!
//! Everything else is Recoverable. Out-of-memory and stack overflow abort
//! the process without unwinding, so they never reach classification.

use crate::cancel::CancelReason;
use crate::scope::{RaiseTransport, ScopeLeaked};
use crate::tracing_compat::scope_trace;
use std::any::Any;
use std::panic::resume_unwind;
use thiserror::Error;

/// Classification of a panic payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanicClass {
    /// Must always propagate; never captured into a failure value.
    Fatal,
    /// Safe to capture into a failure value.
    Recoverable,
}

impl PanicClass {
    /// Returns true if this is the Fatal class.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }

    /// Returns true if this is the Recoverable class.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// A payload wrapper marking a condition that must always propagate.
///
/// The stand-in for the VM-level tier of failures: invariant violations that
/// no `catch` handler may reinterpret as a business error. Unwind with
/// `panic_any(FatalSignal::new("..."))` to guarantee the payload crosses
/// every fold boundary untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fatal signal: {message}")]
pub struct FatalSignal {
    message: &'static str,
}

impl FatalSignal {
    /// Creates a fatal signal with a static description.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// The static description carried by this signal.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// Classifies a panic payload by its concrete type.
#[must_use]
pub fn classify(payload: &(dyn Any + Send)) -> PanicClass {
    if payload.is::<CancelReason>()
        || payload.is::<ScopeLeaked>()
        || payload.is::<FatalSignal>()
        || payload.is::<RaiseTransport>()
    {
        PanicClass::Fatal
    } else {
        PanicClass::Recoverable
    }
}

/// Returns the payload unchanged if Recoverable; resumes unwinding if Fatal.
///
/// Every payload handed to a user-supplied `catch` handler passes through
/// here first, so handlers never observe a Fatal payload.
pub fn non_fatal_or_resume(payload: Box<dyn Any + Send>) -> Box<dyn Any + Send> {
    if classify(payload.as_ref()).is_fatal() {
        scope_trace!("fatal payload resumed past fold boundary");
        resume_unwind(payload)
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelKind;
    use crate::scope::RaiseScope;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn init_test(name: &str) {
        crate::test_logging::init_test_logging();
        crate::test_phase!(name);
    }

    fn payload_of<T: Send + 'static>(value: T) -> Box<dyn Any + Send> {
        Box::new(value)
    }

    #[test]
    fn cancellation_is_fatal() {
        init_test("cancellation_is_fatal");
        let payload = payload_of(CancelReason::timeout());
        let class = classify(payload.as_ref());
        crate::assert_with_log!(class.is_fatal(), "class", PanicClass::Fatal, class);
        crate::test_complete!("cancellation_is_fatal");
    }

    #[test]
    fn scope_leak_is_fatal() {
        init_test("scope_leak_is_fatal");
        let scope = RaiseScope::<String>::new();
        scope.complete();
        let payload = catch_unwind(AssertUnwindSafe(|| {
            scope.raise("stale".to_string());
        }))
        .expect_err("stale raise must unwind");
        let class = classify(payload.as_ref());
        crate::assert_with_log!(class.is_fatal(), "class", PanicClass::Fatal, class);
        crate::test_complete!("scope_leak_is_fatal");
    }

    #[test]
    fn in_flight_transport_is_fatal() {
        init_test("in_flight_transport_is_fatal");
        let scope = RaiseScope::<u32>::new();
        let payload = catch_unwind(AssertUnwindSafe(|| {
            scope.raise(9);
        }))
        .expect_err("raise must unwind");
        let class = classify(payload.as_ref());
        crate::assert_with_log!(class.is_fatal(), "class", PanicClass::Fatal, class);
        crate::test_complete!("in_flight_transport_is_fatal");
    }

    #[test]
    fn fatal_signal_is_fatal() {
        init_test("fatal_signal_is_fatal");
        let payload = payload_of(FatalSignal::new("broken invariant"));
        let class = classify(payload.as_ref());
        crate::assert_with_log!(class.is_fatal(), "class", PanicClass::Fatal, class);
        crate::test_complete!("fatal_signal_is_fatal");
    }

    #[test]
    fn ordinary_panics_are_recoverable() {
        init_test("ordinary_panics_are_recoverable");
        for payload in [
            payload_of("assertion failed: x".to_string()),
            payload_of("static message"),
            payload_of(CancelKind::Timeout), // a bare kind is not a reason
        ] {
            let class = classify(payload.as_ref());
            crate::assert_with_log!(
                class.is_recoverable(),
                "class",
                PanicClass::Recoverable,
                class
            );
        }
        crate::test_complete!("ordinary_panics_are_recoverable");
    }

    #[test]
    fn non_fatal_or_resume_passes_recoverable_through() {
        init_test("non_fatal_or_resume_passes_recoverable_through");
        let payload = non_fatal_or_resume(payload_of("boom".to_string()));
        let message = payload
            .downcast::<String>()
            .expect("payload should be returned unchanged");
        crate::assert_with_log!(*message == "boom", "payload", "boom", *message);
        crate::test_complete!("non_fatal_or_resume_passes_recoverable_through");
    }

    #[test]
    fn non_fatal_or_resume_resumes_fatal_unchanged() {
        init_test("non_fatal_or_resume_resumes_fatal_unchanged");
        let resumed = catch_unwind(AssertUnwindSafe(|| {
            non_fatal_or_resume(payload_of(CancelReason::shutdown()));
        }))
        .expect_err("fatal payload must resume unwinding");
        let reason = resumed
            .downcast::<CancelReason>()
            .expect("payload should be the original cancellation reason");
        crate::assert_with_log!(
            reason.is_shutdown(),
            "reason kind",
            CancelKind::Shutdown,
            reason.kind()
        );
        crate::test_complete!("non_fatal_or_resume_resumes_fatal_unchanged");
    }
}
