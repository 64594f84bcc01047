//! Closures with an explicit arity.

use std::fmt;

use super::Callable;
use crate::Arguments;

/// A closure over raw [`Arguments`], named and given an explicit arity.
///
/// Rust closures do not expose their parameter list at runtime, so the
/// arity is supplied by the caller. The closure receives positional and
/// named arguments as accumulated and interprets them itself.
///
/// # Examples
///
/// ```
/// use curried::{Arguments, Callable, Function};
///
/// let concat = Function::new("concat", 2, |arguments: Arguments<Vec<i32>>| {
///     arguments.into_positional().concat()
/// });
///
/// assert_eq!(concat.arity(), 2);
/// assert_eq!(
///     concat.call(Arguments::from([vec![1, 2], vec![3, 4]])),
///     vec![1, 2, 3, 4]
/// );
/// ```
#[derive(Clone)]
pub struct Function<F> {
    name: String,
    arity: usize,
    function: F,
}

impl<F> Function<F> {
    /// Wraps `function` under `name` with the given arity.
    pub fn new(name: impl Into<String>, arity: usize, function: F) -> Self {
        Self {
            name: name.into(),
            arity,
            function,
        }
    }
}

impl<A, F, R> Callable<A> for Function<F>
where
    F: Fn(Arguments<A>) -> R,
{
    type Output = R;

    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, arguments: Arguments<A>) -> R {
        (self.function)(arguments)
    }
}

impl<F> fmt::Debug for Function<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
