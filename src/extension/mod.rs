//! Free-standing combinators over the two containers.
//!
//! These functions transform, flatten, transpose, or cast without being
//! methods on [`Optional`](crate::Optional) or [`Outcome`](crate::Outcome),
//! which keeps the core method sets small.
//!
//! - [`optional_flatten`], [`outcome_flatten`]: remove one level of nesting
//! - [`optional_transpose`], [`outcome_transpose`]: swap `Optional` and `Outcome` layers
//! - [`must_cast`], [`cast_or_default`], [`must_cast_ref`], [`cast_ref_or`]:
//!   dynamic downcasting at an explicit [`Any`](std::any::Any) boundary
//!
//! # Examples
//!
//! ```rust
//! use optres::extension::{optional_transpose, outcome_transpose};
//! use optres::{Optional, Outcome};
//!
//! let nested: Optional<Outcome<i32, &str>> = Optional::Some(Outcome::Ok(5));
//! let swapped = optional_transpose(nested);
//! assert_eq!(swapped, Outcome::Ok(Optional::Some(5)));
//! assert_eq!(outcome_transpose(swapped), nested);
//! ```

mod cast;
mod nesting;

pub use cast::{cast_or_default, cast_ref_or, must_cast, must_cast_ref};
pub use nesting::{optional_flatten, optional_transpose, outcome_flatten, outcome_transpose};
