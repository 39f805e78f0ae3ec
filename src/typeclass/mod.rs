//! Type class instances for [`Optional`](crate::Optional) and
//! [`Outcome`](crate::Outcome).
//!
//! The inherent methods cover everyday use. These traits let generic code
//! abstract over either container:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding a container into a summary value
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name
//! `Optional<_>` and `Outcome<_, E>` as type constructors.
//!
//! ## Outcome and the error type
//!
//! [`Functor::fmap_ref`] borrows the container, so an `Err` has to be cloned
//! into the result. That makes [`Functor`], and with it [`Applicative`] and
//! [`Monad`], available for `Outcome<T, E>` only when `E: Clone`. The default
//! `Outcome<T>` carries a [`BoxError`](crate::BoxError), which is not
//! `Clone`, so it has [`Foldable`] and [`Semigroup`] but no `Functor`. Map
//! it with the inherent [`Outcome::map`](crate::Outcome::map) and
//! [`Outcome::and_then`](crate::Outcome::and_then), or convert the error
//! into a cloneable type first.
//!
//! # Examples
//!
//! ```rust
//! use optres::{Optional, Outcome};
//! use optres::typeclass::Functor;
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Optional::Some(2)), Optional::Some(4));
//! assert_eq!(double_all(Outcome::<i32, String>::Ok(3)), Outcome::Ok(6));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
