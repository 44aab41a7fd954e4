//! The two-variant outcome type and its algebra.
//!
//! [`Outcome`] is an immutable tagged union of exactly two variants:
//! `Success(T)` xor `Failure(E)`. There is no empty third state, so every
//! operation reduces to an exhaustive two-way branch; the non-trivial
//! operations are all derived from [`Outcome::fold`].
//!
//! The algebra is split across:
//!
//! - this module: construction, [`fold`](Outcome::fold), predicates,
//!   inversion, and `Result` interop
//! - `transform`: `map_*`, `flat_map_*`, `coerce_*`
//! - `flatten`: `collapse` and the flatten family (ancestor-type
//!   unification)
//! - `accessors`: the `get_or` family and the panicking unwraps

mod accessors;
mod flatten;
mod transform;

use Outcome::{Failure, Success};

/// A typed success-or-failure value.
///
/// Exactly one variant is populated. Values are immutable once constructed
/// and freely shared across threads; the transformation operations consume
/// and rebuild rather than mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation signalled a typed failure.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Applies exactly one of the two functions to the populated side.
    ///
    /// The output type is unconstrained; it may itself be another
    /// `Outcome`, which is what the `flat_map_*` operations build on.
    pub fn fold<O>(self, success: impl FnOnce(T) -> O, failure: impl FnOnce(E) -> O) -> O {
        match self {
            Success(value) => success(value),
            Failure(error) => failure(error),
        }
    }

    /// Returns true if this is a `Success`.
    ///
    /// Exactly one of `is_success`/`is_failure` is true for any outcome.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns true if this is a `Failure`.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// The success value, if populated.
    pub fn success(self) -> Option<T> {
        self.fold(Some, |_| None)
    }

    /// The failure value, if populated.
    pub fn failure(self) -> Option<E> {
        self.fold(|_| None, Some)
    }

    /// Swaps which side is `Success` and which is `Failure`, preserving
    /// payloads.
    pub fn invert(self) -> Outcome<E, T> {
        self.fold(Failure, Success)
    }

    /// Borrows the populated side.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts into the native `Result`.
    pub fn into_result(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.map_or_else(Failure, Success)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
