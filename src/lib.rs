//! # optres
//!
//! Two tagged-union containers with a complete combinator surface:
//!
//! - [`Optional<T>`]: a value (`Some`) or nothing (`None`)
//! - [`Outcome<T, E>`]: a success value (`Ok`) or an error (`Err`)
//!
//! The containers convert into each other ([`Optional::ok_or`],
//! [`Outcome::ok`], [`Outcome::err`]) and to and from the standard library's
//! `Option` and `Result`.
//!
//! ## Feature Flags
//!
//! - `extension`: Flatten, transpose and dynamic casting helpers (default)
//! - `typeclass`: Functor, Applicative, Monad, Foldable, Semigroup, Monoid instances (default)
//! - `serde`: `Serialize`/`Deserialize` for both containers
//! - `tracing`: Emit an error event before a contract-violation panic
//! - `full`: Enable all features
//!
//! ## Failures
//!
//! Contained errors are data: nothing in this crate logs, retries or
//! escalates an `Err` payload. Unwrapping the wrong variant is a programming
//! error and panics. The default messages, which differ between the two
//! containers, live in [`failure`].
//!
//! ## Concurrency
//!
//! Every operation is a synchronous computation over values that already
//! exist. Both containers are `Send` and `Sync` exactly when their payloads
//! are. [`Optional::replace`] is the only mutating operation and takes
//! `&mut self`; sharing a container across threads and replacing it needs a
//! lock owned by the caller.
//!
//! ## Example
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let found = some(15)
//!     .filter(|value| *value > 10)
//!     .map(|value| format!("Value={value}"));
//! assert_eq!(found, Optional::Some("Value=15".to_string()));
//!
//! let converted: Outcome<String, &str> = found.ok_or("missing");
//! assert_eq!(converted.unwrap(), "Value=15");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their constructor functions and, depending on
/// features, the extension functions and type classes.
///
/// # Usage
///
/// ```rust
/// use optres::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::{Optional, none, optional_from_ref, some};
    pub use crate::outcome::{BoxError, Outcome, err, ok, outcome_from_return};
    pub use crate::predicate::Predicate;

    #[cfg(feature = "extension")]
    pub use crate::extension::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod failure;
pub mod predicate;

mod optional;
mod outcome;

pub use optional::{Optional, none, optional_from_ref, some};
pub use outcome::{BoxError, Outcome, err, ok, outcome_from_return};

#[cfg(feature = "extension")]
pub mod extension;

#[cfg(feature = "typeclass")]
pub mod typeclass;

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(Outcome<i32, &'static str>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Outcome<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::cell::Cell<i32>>: Sync);
