//! Safe and panicking accessors, each a one-line fold specialization.
//!
//! The `unwrap_*` pair signals an invalid-state programmer error when called
//! on the wrong variant. The panic message never carries the other side's
//! payload: a wrong-variant unwrap is a bug at the call site, and the signal
//! for it is distinct from the business error it was hiding.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// The success value, or `default` on failure.
    pub fn get_or(self, default: T) -> T {
        self.fold(|value| value, |_| default)
    }

    /// The success value, or the recovery of the failure payload.
    pub fn get_or_else(self, recover: impl FnOnce(E) -> T) -> T {
        self.fold(|value| value, recover)
    }

    /// The failure value, or `default` on success.
    pub fn failure_or(self, default: E) -> E {
        self.fold(|_| default, |error| error)
    }

    /// The failure value, or the faltering of the success payload.
    pub fn failure_or_else(self, falter: impl FnOnce(T) -> E) -> E {
        self.fold(falter, |error| error)
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-state message when called on a `Failure`.
    pub fn unwrap_success(self) -> T {
        self.fold(
            |value| value,
            |_| panic!("unwrap_success called on a Failure outcome"),
        )
    }

    /// The failure value.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-state message when called on a `Success`.
    pub fn unwrap_failure(self) -> E {
        self.fold(
            |_| panic!("unwrap_failure called on a Success outcome"),
            |error| error,
        )
    }
}
