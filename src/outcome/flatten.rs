//! Collapse and the flatten family: ancestor-type unification.
//!
//! At the value level these are a single two-way branch that un-nests one
//! level; the work is in the types. The source design's
//! nearest-common-ancestor requirement maps to `Into` bounds on the unified
//! side, so the caller names the ancestor and the compiler checks that both
//! nested types reach it.

use super::Outcome::{self, Failure, Success};

impl<T, E> Outcome<T, E> {
    /// Unwraps the populated side to a shared ancestor type.
    pub fn collapse<A>(self) -> A
    where
        T: Into<A>,
        E: Into<A>,
    {
        self.fold(Into::into, Into::into)
    }
}

impl<T, E1, E2> Outcome<Outcome<T, E1>, E2> {
    /// Flattens success-side nesting, unifying the two error types.
    pub fn flatten_nested_success<E>(self) -> Outcome<T, E>
    where
        E1: Into<E>,
        E2: Into<E>,
    {
        match self {
            Success(Success(value)) => Success(value),
            Success(Failure(error)) => Failure(error.into()),
            Failure(error) => Failure(error.into()),
        }
    }
}

impl<T1, T2, E> Outcome<T1, Outcome<T2, E>> {
    /// Flattens failure-side nesting, unifying the two success types.
    pub fn flatten_nested_failure<T>(self) -> Outcome<T, E>
    where
        T1: Into<T>,
        T2: Into<T>,
    {
        match self {
            Success(value) => Success(value.into()),
            Failure(Success(value)) => Success(value.into()),
            Failure(Failure(error)) => Failure(error),
        }
    }
}

impl<T1, E1, T2, E2> Outcome<Outcome<T1, E1>, Outcome<T2, E2>> {
    /// Flattens nesting on both sides, unifying both type pairs.
    pub fn flatten_nested<T, E>(self) -> Outcome<T, E>
    where
        T1: Into<T>,
        T2: Into<T>,
        E1: Into<E>,
        E2: Into<E>,
    {
        match self {
            Success(Success(value)) => Success(value.into()),
            Success(Failure(error)) => Failure(error.into()),
            Failure(Success(value)) => Success(value.into()),
            Failure(Failure(error)) => Failure(error.into()),
        }
    }
}
