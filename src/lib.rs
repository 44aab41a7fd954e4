//! Raisefold: typed success/failure outcomes with single-use raise scopes.
//!
//! # Overview
//!
//! Raisefold is a value/control-flow library built on the principle that
//! failure handling should be structural, not conventional. A computation
//! either produces a value or signals a typed failure, never a nullable
//! sentinel, never an untyped catch-all. Straight-line code signals a
//! recoverable failure with [`RaiseScope::raise`], which unwinds exactly one
//! evaluation boundary; the enclosing [`fold`](fold()) turns it into an
//! [`Outcome::Failure`] or hands it to a caller-supplied handler.
//!
//! # Core Guarantees
//!
//! - **Two variants, no third state**: [`Outcome`] is `Success(T)` xor
//!   `Failure(E)`; every operation is an exhaustive two-way branch
//! - **Exactly one handler**: a [`fold`](fold()) call runs exactly one of
//!   `transform`/`recover`/`catch`, exactly once
//! - **Single-use scopes**: a raise capability used after its fold completed
//!   unwinds with a loud [`ScopeLeaked`] signal, never a silent no-op
//! - **Fatal opacity**: host cancellation and other payloads in the Fatal
//!   class pass through every fold boundary unconverted; `catch` handlers
//!   never observe them
//! - **One unwound boundary per raise**: a raise addressed to an outer fold
//!   passes through inner folds untouched
//!
//! # Module Structure
//!
//! - [`outcome`]: The two-variant outcome type and its algebra
//! - [`fold`](mod@fold): The fold driver and the builders derived from it
//! - [`scope`]: Raise scopes and the completion guard
//! - [`classify`]: Fatal/Recoverable panic payload classification
//! - [`cancel`]: The host runtime's cancellation signal types
//!
//! # Example
//!
//! ```
//! use raisefold::{outcome_of, Outcome};
//!
//! let outcome: Outcome<u32, String> = outcome_of(|scope| {
//!     scope.ensure(2 + 2 == 4, || "arithmetic is broken".to_string());
//!     42
//! });
//! assert_eq!(outcome, Outcome::Success(42));
//! ```
//!
//! # Unwinding
//!
//! `raise` transports its error via the panic machinery, so crates using it
//! must build with `panic = "unwind"` (the default). Out-of-memory and stack
//! overflow abort the process without unwinding and therefore never reach
//! the classifier.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]

pub mod cancel;
pub mod classify;
pub mod fold;
pub mod outcome;
pub mod scope;

mod tracing_compat;

// ── Test-only modules ───────────────────────────────────────────────────
#[cfg(any(test, feature = "test-internals"))]
pub mod test_logging;

// Re-exports for convenient access to core types
pub use cancel::{CancelKind, CancelReason};
pub use classify::{FatalSignal, PanicClass, classify, non_fatal_or_resume};
pub use fold::{fold, outcome_catching, outcome_of, recover};
pub use outcome::Outcome;
pub use outcome::Outcome::{Failure, Success};
pub use scope::{RaiseScope, ScopeId, ScopeLeaked};
