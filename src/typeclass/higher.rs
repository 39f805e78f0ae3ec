//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] names the constructor through a generic
//! associated type so that [`Functor`](super::Functor),
//! [`Monad`](super::Monad) and friends can be written once.
//!
//! # Example
//!
//! ```rust
//! use optres::Optional;
//! use optres::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Optional<String> = reset(Optional::Some(42));
//! assert_eq!(none_string, Optional::None);
//! ```

use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type constructor applied to some type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    ///
    /// For `Optional<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Outcome<i32, E>` this is `Outcome<B, E>`: the error type is fixed.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}
