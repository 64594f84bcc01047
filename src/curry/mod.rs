//! The curry transformer.
//!
//! [`curry`] converts a fixed-arity [`Callable`] into a [`Curried`] value.
//! Each [`Curried::call`] supplies zero or more positional and/or named
//! arguments:
//!
//! ```text
//! curry(f).call(g1).call(g2)...call(gn) == f(g1 ++ g2 ++ ... ++ gn)
//! ```
//!
//! When the accumulated argument count equals the arity, the wrapped
//! callable runs and the call returns [`Application::Complete`]; otherwise
//! it returns [`Application::Partial`] holding the next callable of the
//! chain.
//!
//! # Persistent Accumulation
//!
//! A [`Curried`] never changes after creation. Each step builds a new value
//! whose accumulated arguments structurally share the previous step's, so
//! calling the same intermediate callable twice starts two independent
//! branches:
//!
//! ```
//! use curried::{curry_fn, Arguments};
//!
//! let add = curry_fn("add", 2, |arguments: Arguments<i32>| {
//!     arguments.positional().iter().sum::<i32>()
//! });
//!
//! let add_one = add.call([1]).partial().unwrap();
//! let add_two = add.call([2]).partial().unwrap();
//!
//! assert_eq!(add_two.call([1]).complete(), Some(3));
//! assert_eq!(add_one.call([1]).complete(), Some(2));
//! ```
//!
//! # Thread Safety
//!
//! With the default `Rc` backend a [`Curried`] is neither `Send` nor
//! `Sync`. With the `arc` feature it is both whenever its callable and
//! argument type are.

mod application;
mod curried;

pub use application::Application;
pub use curried::Curried;

use crate::{Arguments, Callable, Function};

/// Converts `callable` into its curried form.
///
/// The name and arity are read from the callable once, here, and carried
/// unchanged by every intermediate callable of the chain.
///
/// # Examples
///
/// ```
/// use curried::{curry, Function, Arguments};
///
/// let concat = curry(Function::new("concat", 2, |arguments: Arguments<Vec<i32>>| {
///     arguments.into_positional().concat()
/// }));
///
/// let step = concat.call([vec![1, 2]]).partial().unwrap();
/// assert_eq!(step.name(), "concat");
/// assert_eq!(step.call([vec![3, 4]]).complete(), Some(vec![1, 2, 3, 4]));
/// ```
pub fn curry<C, A>(callable: C) -> Curried<C, A>
where
    C: Callable<A>,
{
    tracing::debug!(callable = callable.name(), arity = callable.arity(), "currying callable");
    Curried::new(callable)
}

/// Curries a closure over raw [`Arguments`] with an explicit arity.
///
/// Shorthand for `curry(Function::new(name, arity, function))`.
///
/// # Examples
///
/// ```
/// use curried::{arguments, curry_fn, Arguments};
///
/// let add = curry_fn("add", 2, |arguments: Arguments<i32>| {
///     arguments.positional().iter().sum::<i32>()
/// });
/// assert_eq!(add.call(arguments![1, 2]).complete(), Some(3));
/// ```
pub fn curry_fn<A, F, R>(name: impl Into<String>, arity: usize, function: F) -> Curried<Function<F>, A>
where
    F: Fn(Arguments<A>) -> R,
{
    curry(Function::new(name, arity, function))
}
