//! Contract-violation failures.
//!
//! Unwrapping the wrong variant is a programming error, not a runtime
//! condition. Every such path in the crate funnels through [`contract_violation`],
//! which panics with the given message. With the `tracing` feature enabled an
//! `error` event is emitted first so the failure shows up in structured logs.
//!
//! Contained errors (the `Err` payload of an [`Outcome`](crate::Outcome)) never
//! pass through here.

/// Default panic message of [`Optional::unwrap`](crate::Optional::unwrap).
pub const OPTIONAL_UNWRAP_NONE: &str = "called `Optional::unwrap()` on a `None` value";

/// Default panic message of [`Outcome::unwrap`](crate::Outcome::unwrap).
pub const OUTCOME_UNWRAP_ERR: &str = "called `Outcome::unwrap()` on an `Err` value";

/// Default panic message of [`Outcome::unwrap_err`](crate::Outcome::unwrap_err).
pub const OUTCOME_UNWRAP_ERR_ON_OK: &str = "called `Outcome::unwrap_err()` on an `Ok` value";

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn contract_violation(message: &str) -> ! {
    #[cfg(feature = "tracing")]
    {
        let location = std::panic::Location::caller();
        tracing::error!(
            target: "optres",
            file = location.file(),
            line = location.line(),
            "contract violation: {message}"
        );
    }
    panic!("{message}")
}
