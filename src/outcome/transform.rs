//! Transformation operations over either side.
//!
//! All derived from [`Outcome::fold`]: the `map_*` pair transforms one
//! side's payload and leaves the variant identity untouched, the
//! `flat_map_*` pair chains into a new outcome without double-wrapping, and
//! the `coerce_*` pair forces a single known variant. The uninhabited side
//! of a coerced outcome is [`Infallible`], so the type system records that
//! the other variant cannot occur.

use super::Outcome::{self, Failure, Success};
use std::convert::Infallible;

impl<T, E> Outcome<T, E> {
    /// Transforms the success payload, leaving failures untouched.
    pub fn map_success<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        self.fold(|value| Success(f(value)), Failure)
    }

    /// Transforms the failure payload, leaving successes untouched.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        self.fold(Success, |error| Failure(f(error)))
    }

    /// Chains a success into a new outcome without double-wrapping.
    pub fn flat_map_success<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        self.fold(f, Failure)
    }

    /// Chains a failure into a new outcome without double-wrapping.
    pub fn flat_map_failure<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        self.fold(Success, f)
    }

    /// Forces a `Success`, applying `recover` only to a failure payload.
    pub fn coerce_to_success(self, recover: impl FnOnce(E) -> T) -> Outcome<T, Infallible> {
        self.fold(Success, |error| Success(recover(error)))
    }

    /// Forces a `Failure`, applying `falter` only to a success payload.
    pub fn coerce_to_failure(self, falter: impl FnOnce(T) -> E) -> Outcome<Infallible, E> {
        self.fold(|value| Failure(falter(value)), Failure)
    }
}

impl<T> Outcome<T, Infallible> {
    /// Unwraps an outcome whose failure side is uninhabited.
    pub fn into_success(self) -> T {
        match self {
            Success(value) => value,
            Failure(never) => match never {},
        }
    }
}

impl<E> Outcome<Infallible, E> {
    /// Unwraps an outcome whose success side is uninhabited.
    pub fn into_failure(self) -> E {
        match self {
            Success(never) => match never {},
            Failure(error) => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test(name: &str) {
        crate::test_logging::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn map_success_leaves_failures() {
        init_test("map_success_leaves_failures");
        let ok: Outcome<u32, &str> = Success(42);
        let err: Outcome<u32, &str> = Failure("e");
        crate::assert_with_log!(
            ok.map_success(|v| v * 2) == Success(84),
            "mapped success",
            Success::<u32, &str>(84),
            ok.map_success(|v| v * 2)
        );
        crate::assert_with_log!(
            err.map_success(|v| v * 2) == Failure("e"),
            "untouched failure",
            Failure::<u32, &str>("e"),
            err.map_success(|v| v * 2)
        );
        crate::test_complete!("map_success_leaves_failures");
    }

    #[test]
    fn map_failure_leaves_successes() {
        init_test("map_failure_leaves_successes");
        let ok: Outcome<u32, &str> = Success(42);
        let err: Outcome<u32, &str> = Failure("boom");
        crate::assert_with_log!(
            err.map_failure(str::len) == Failure(4),
            "mapped failure",
            Failure::<u32, usize>(4),
            err.map_failure(str::len)
        );
        crate::assert_with_log!(
            ok.map_failure(str::len) == Success(42),
            "untouched success",
            Success::<u32, usize>(42),
            ok.map_failure(str::len)
        );
        crate::test_complete!("map_failure_leaves_successes");
    }

    #[test]
    fn flat_map_chains_without_double_wrapping() {
        init_test("flat_map_chains_without_double_wrapping");
        let parse = |v: u32| -> Outcome<u32, &'static str> {
            if v % 2 == 0 {
                Success(v / 2)
            } else {
                Failure("odd")
            }
        };
        let even: Outcome<u32, &str> = Success(8);
        let odd: Outcome<u32, &str> = Success(7);
        crate::assert_with_log!(
            even.flat_map_success(parse) == Success(4),
            "chained success",
            Success::<u32, &str>(4),
            even.flat_map_success(parse)
        );
        crate::assert_with_log!(
            odd.flat_map_success(parse) == Failure("odd"),
            "chained failure",
            Failure::<u32, &str>("odd"),
            odd.flat_map_success(parse)
        );

        let retried: Outcome<u32, &str> = Failure("first").flat_map_failure(|_| Success(1));
        crate::assert_with_log!(
            retried == Success(1),
            "failure chain",
            Success::<u32, &str>(1),
            retried
        );
        crate::test_complete!("flat_map_chains_without_double_wrapping");
    }

    #[test]
    fn coercions_force_one_variant() {
        init_test("coercions_force_one_variant");
        let err: Outcome<u32, &str> = Failure("boom");
        let recovered = err.coerce_to_success(|e| e.len() as u32).into_success();
        crate::assert_with_log!(recovered == 4, "coerced success", 4, recovered);

        let ok: Outcome<u32, &str> = Success(42);
        let faltered = ok.coerce_to_failure(|_| "refused").into_failure();
        crate::assert_with_log!(faltered == "refused", "coerced failure", "refused", faltered);
        crate::test_complete!("coercions_force_one_variant");
    }
}
