//! Attribute macros for the `curried` crate.
//!
//! # Available Attribute Macros
//!
//! - [`callable`]: derives a `Callable` from an ordinary function, reading
//!   its arity and parameter names at compile time
//!
//! # Example
//!
//! ```rust,ignore
//! use curried::{arguments, callable, curry};
//!
//! #[callable(defaults(b = 10))]
//! fn add(a: i64, b: i64) -> i64 {
//!     a + b
//! }
//!
//! let add = curry(add_callable());
//! assert_eq!(add.call(arguments![2; b = 10]).complete(), Some(Ok(12)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod callable;

use proc_macro::TokenStream;

/// Derives a `Callable` for an ordinary function.
///
/// The function is kept as written. Next to it the macro emits
/// `fn <name>_callable() -> curried::Bound<T, fn([T; N]) -> R, N>` with the
/// function's visibility, where `T` is the shared parameter type, `N` the
/// parameter count, and `R` the return type. The bound callable's
/// `Signature` lists the parameters by name, so curried chains can supply
/// them positionally or by name.
///
/// # Options
///
/// - `name = "..."`: display name; defaults to the function name
/// - `defaults(param = expr, ...)`: default values for parameters. Defaulted
///   parameters still count toward the arity.
///
/// # Requirements
///
/// - at least one parameter, each bound to a plain identifier
/// - every parameter has the same type
/// - no generics, no `async`, no `self` receiver
///
/// # Example
///
/// ```rust,ignore
/// use curried::{callable, curry};
///
/// #[callable(name = "plus")]
/// fn add(a: i64, b: i64) -> i64 {
///     a + b
/// }
///
/// let plus = curry(add_callable());
/// let step = plus.call([1]).partial().unwrap();
/// assert_eq!(step.name(), "plus");
/// assert_eq!(step.call([2]).complete(), Some(Ok(3)));
/// ```
#[proc_macro_attribute]
pub fn callable(attribute: TokenStream, item: TokenStream) -> TokenStream {
    callable::callable_impl(attribute.into(), item.into()).into()
}
