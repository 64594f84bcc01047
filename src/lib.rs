//! # curried
//!
//! Currying for fixed-arity callables.
//!
//! ## Overview
//!
//! [`curry`] turns a callable of known arity into a chain of partial
//! invocations. Each call on the chain supplies zero or more positional
//! and/or named arguments; once the number of accumulated arguments equals
//! the arity, the wrapped callable is invoked and its result is returned.
//!
//! - **Curry Transformer**: [`curry`], [`curry_fn`], [`Curried`], [`Application`]
//! - **Callables**: the [`Callable`] trait, [`Function`] for closures over raw
//!   [`Arguments`], [`Bound`] + [`Signature`] for callables with named
//!   parameters and defaults
//! - **Persistent State**: every intermediate callable owns an immutable,
//!   structurally shared snapshot of its accumulated arguments, so sibling
//!   branches never observe each other
//! - **Compile-time Signatures**: the `#[callable]` attribute derives arity,
//!   parameter names, and defaults of an ordinary function
//!
//! ## Feature Flags
//!
//! - `derive`: the `#[callable]` attribute macro (enabled by default)
//! - `arc`: use `Arc` instead of `Rc` for shared state, making chains
//!   `Send + Sync` when their callable and arguments are
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use curried::{arguments, curry_fn, Arguments};
//!
//! let add = curry_fn("add", 2, |arguments: Arguments<i64>| {
//!     arguments.positional().iter().sum::<i64>()
//! });
//!
//! let add_one = add.call([1]).partial().unwrap();
//! let add_two = add.call([2]).partial().unwrap();
//!
//! assert_eq!(add_one.call([1]).complete(), Some(2));
//! assert_eq!(add_two.call([1]).complete(), Some(3));
//! assert_eq!(add.call(arguments![1, 2]).complete(), Some(3));
//! assert_eq!(add_one.name(), "add");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use curried::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arguments::Arguments;
    pub use crate::callable::{Bound, Callable, Function, Parameter, Signature};
    pub use crate::curry::{Application, Curried, curry, curry_fn};
    pub use crate::error::BindingError;

    #[cfg(feature = "derive")]
    pub use curried_derive::callable;
}

pub mod arguments;
pub mod callable;
pub mod curry;
pub mod error;
pub mod persistent;

pub use arguments::Arguments;
pub use callable::{Bound, Callable, Function, Parameter, Signature};
pub use curry::{Application, Curried, curry, curry_fn};
pub use error::BindingError;

#[cfg(feature = "derive")]
pub use curried_derive::callable;
