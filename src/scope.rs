//! Raise scopes: single-use capabilities for typed short-circuit exits.
//!
//! A [`RaiseScope`] is handed to the block of one [`fold`](crate::fold::fold)
//! invocation. It exposes one operation, [`raise`](RaiseScope::raise), which
//! abandons the current computation and transmits a typed error to the
//! owning fold. The scope is cheaply clonable, so the misuse case (a clone
//! captured into a closure that outlives the fold) is representable, and
//! therefore guarded: a raise on a completed scope unwinds with
//! [`ScopeLeaked`], which classifies Fatal, instead of corrupting an
//! already-resolved outcome.
//!
//! # Thread Safety
//!
//! The activity flag uses atomic one-shot semantics because `raise` and
//! `complete` may race when a clone escapes its intended lifetime. That is a
//! misuse case, not a supported pattern; the guard exists to make it loud.

use crate::outcome::Outcome;
use crate::tracing_compat::{scope_error, scope_trace};
use core::fmt;
use std::any::Any;
use std::marker::PhantomData;
use std::panic::panic_any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use thiserror::Error;

static SCOPE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for one fold invocation's raise scope.
///
/// Transports addressed to a scope carry its id, which is how a fold
/// boundary tells its own raises from those of an enclosing fold.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    fn next() -> Self {
        Self(SCOPE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for ScopeId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

impl fmt::Display for ScopeId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Programmer-error signal: a raise capability was used after its owning
/// fold completed.
///
/// Always classified Fatal; a leaked scope is a bug at the call site, not a
/// business failure, and must stay visible rather than be recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("raise called after its owning fold completed (scope {scope})")]
pub struct ScopeLeaked {
    scope: ScopeId,
}

impl ScopeLeaked {
    /// The scope the stale raise was addressed to.
    #[must_use]
    pub const fn scope(&self) -> ScopeId {
        self.scope
    }
}

/// Unwind payload carrying a typed raised error to its owning fold.
///
/// A fold boundary recognizes its own transport by scope id; transports
/// addressed to an enclosing fold keep unwinding untouched, so a raise
/// unwinds exactly one evaluation boundary.
pub(crate) struct RaiseTransport {
    pub(crate) scope: ScopeId,
    pub(crate) error: Box<dyn Any + Send>,
}

#[derive(Debug)]
struct ScopeState {
    id: ScopeId,
    active: AtomicBool,
}

/// The single-use raise capability for one fold invocation.
///
/// Created by the fold driver, handed to the user block by reference, and
/// completed before the fold returns. Clones share the same activity flag;
/// `PhantomData<fn(E) -> E>` keeps the scope `Send + Sync` regardless of the
/// error type, since the scope itself never stores an error value.
pub struct RaiseScope<E> {
    state: Arc<ScopeState>,
    _error: PhantomData<fn(E) -> E>,
}

impl<E> Clone for RaiseScope<E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            _error: PhantomData,
        }
    }
}

impl<E> fmt::Debug for RaiseScope<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RaiseScope")
            .field("id", &self.state.id)
            .field("active", &self.state.active.load(Ordering::Acquire))
            .finish()
    }
}

impl<E: Send + 'static> RaiseScope<E> {
    /// Creates a fresh, active scope (fold driver use).
    #[must_use]
    #[cfg_attr(feature = "test-internals", visibility::make(pub))]
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(ScopeState {
                id: ScopeId::next(),
                active: AtomicBool::new(true),
            }),
            _error: PhantomData,
        }
    }

    /// Returns the identifier of this scope.
    #[must_use]
    pub fn id(&self) -> ScopeId {
        self.state.id
    }

    /// Returns true if the owning fold has not yet completed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.active.load(Ordering::Acquire)
    }

    /// Abandons the current computation, transmitting `error` to the owning
    /// fold.
    ///
    /// Unwinds the stack via the panic machinery (requires
    /// `panic = "unwind"`); the owning fold catches the transport and
    /// dispatches to its `recover` handler. Exactly one evaluation boundary
    /// unwinds: inner folds pass transports addressed to an outer scope
    /// through unchanged.
    ///
    /// If the owning fold has already completed, unwinds with
    /// [`ScopeLeaked`] instead: a Fatal programmer-error signal, never the
    /// business error.
    pub fn raise(&self, error: E) -> ! {
        if self.is_active() {
            scope_trace!(scope = %self.state.id, "raise");
            panic_any(RaiseTransport {
                scope: self.state.id,
                error: Box::new(error),
            })
        }
        scope_error!(scope = %self.state.id, "raise on completed scope");
        panic_any(ScopeLeaked {
            scope: self.state.id,
        })
    }

    /// Marks the scope complete, returning the prior activity state.
    ///
    /// One-shot: the first caller observes `true`, every later caller
    /// `false`. Callable from a different thread than the one that created
    /// the scope.
    #[cfg_attr(feature = "test-internals", visibility::make(pub))]
    pub(crate) fn complete(&self) -> bool {
        let was_active = self.state.active.swap(false, Ordering::AcqRel);
        scope_trace!(scope = %self.state.id, was_active, "complete");
        was_active
    }

    /// Raises `error()` unless `condition` holds.
    pub fn ensure(&self, condition: bool, error: impl FnOnce() -> E) {
        if !condition {
            self.raise(error());
        }
    }

    /// Unwraps `value`, raising `error()` when it is `None`.
    pub fn ensure_some<T>(&self, value: Option<T>, error: impl FnOnce() -> E) -> T {
        match value {
            Some(value) => value,
            None => self.raise(error()),
        }
    }

    /// Unwraps a success value, raising the failure of a failed outcome.
    ///
    /// This is the chaining primitive: an inner outcome's failure becomes
    /// this scope's raised error without double-wrapping.
    pub fn unwrap_or_raise<T>(&self, outcome: Outcome<T, E>) -> T {
        match outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => self.raise(error),
        }
    }
}
