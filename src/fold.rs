//! The fold driver: one evaluation, one scope, exactly one handler.
//!
//! [`fold`] opens a [`RaiseScope`], runs the caller's block, and classifies
//! the way the block ended into exactly one of four cases:
//!
//! 1. normal return: `transform`
//! 2. raised error addressed to this scope: `recover`
//! 3. recoverable foreign panic: `catch`, after
//!    [`non_fatal_or_resume`] filters the Fatal class
//! 4. Fatal payload, or a raise addressed to an enclosing fold: resumed
//!    unchanged, bypassing every handler
//!
//! The scope is completed before the driver returns or resumes unwinding,
//! so no scope outlives its fold in the active state.
//!
//! The default `catch` rethrows: the derived builders ([`outcome_of`],
//! [`recover`]) resume unwinding on foreign panics, and only [`fold`] and
//! [`outcome_catching`] let a caller opt in to capturing them.

use crate::classify::non_fatal_or_resume;
use crate::outcome::Outcome;
use crate::scope::{RaiseScope, RaiseTransport};
use crate::tracing_compat::scope_trace;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

/// Runs `block` in a fresh raise scope and dispatches to exactly one of the
/// three handlers.
///
/// Supplying `catch` is the explicit opt-in to capturing foreign panics; it
/// only ever observes payloads that classify Recoverable.
pub fn fold<In, Out, Error, B, C, R, T>(block: B, catch: C, recover: R, transform: T) -> Out
where
    Error: Send + 'static,
    B: FnOnce(&RaiseScope<Error>) -> In,
    C: FnOnce(Box<dyn Any + Send>) -> Out,
    R: FnOnce(Error) -> Out,
    T: FnOnce(In) -> Out,
{
    let scope = RaiseScope::<Error>::new();
    scope_trace!(scope = %scope.id(), "fold open");
    let result = catch_unwind(AssertUnwindSafe(|| block(&scope)));
    scope.complete();
    match result {
        Ok(value) => {
            scope_trace!(scope = %scope.id(), "fold transform");
            transform(value)
        }
        Err(payload) => match payload.downcast::<RaiseTransport>() {
            Ok(transport) if transport.scope == scope.id() => {
                scope_trace!(scope = %scope.id(), "fold recover");
                let error = transport
                    .error
                    .downcast::<Error>()
                    .expect("raise transport carries its scope's error type");
                recover(*error)
            }
            // Addressed to an enclosing fold: keep unwinding.
            Ok(transport) => resume_unwind(transport),
            Err(other) => {
                scope_trace!(scope = %scope.id(), "fold catch");
                catch(non_fatal_or_resume(other))
            }
        },
    }
}

/// Builds an [`Outcome`] from a raise-scoped block.
///
/// Raised errors become `Failure`, normal returns become `Success`, and
/// foreign panics resume unwinding. Use [`outcome_catching`] to capture
/// recoverable panics as failures instead.
pub fn outcome_of<T, E, B>(block: B) -> Outcome<T, E>
where
    E: Send + 'static,
    B: FnOnce(&RaiseScope<E>) -> T,
{
    fold(
        block,
        |payload| resume_unwind(payload),
        Outcome::Failure,
        Outcome::Success,
    )
}

/// Builds an [`Outcome`] from a raise-scoped block, capturing recoverable
/// foreign panics.
///
/// `catch` maps a recoverable panic payload into the error type; the result
/// becomes a `Failure`. Fatal payloads still bypass `catch` entirely.
pub fn outcome_catching<T, E, B, C>(catch: C, block: B) -> Outcome<T, E>
where
    E: Send + 'static,
    B: FnOnce(&RaiseScope<E>) -> T,
    C: FnOnce(Box<dyn Any + Send>) -> E,
{
    fold(
        block,
        |payload| Outcome::Failure(catch(payload)),
        Outcome::Failure,
        Outcome::Success,
    )
}

/// Runs a raise-scoped block to a plain value, recovering raised errors.
///
/// The recovery analogue of [`outcome_of`] for call sites that want the
/// value directly: raised errors go through `handler`, foreign panics
/// resume unwinding.
pub fn recover<T, E, B, H>(block: B, handler: H) -> T
where
    E: Send + 'static,
    B: FnOnce(&RaiseScope<E>) -> T,
    H: FnOnce(E) -> T,
{
    fold(block, |payload| resume_unwind(payload), handler, |value| {
        value
    })
}
