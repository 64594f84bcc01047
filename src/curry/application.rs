//! The outcome of one call on a curry chain.

use std::fmt;

use super::Curried;
use crate::{Arguments, Callable};

/// The result of [`Curried::call`].
///
/// Either the chain completed and the wrapped callable produced its output,
/// or more arguments are needed and the next step of the chain is returned.
pub enum Application<C, A>
where
    C: Callable<A>,
{
    /// The wrapped callable ran; this is its output, untouched.
    Complete(C::Output),
    /// The chain needs more arguments.
    Partial(Curried<C, A>),
}

impl<C, A> Application<C, A>
where
    C: Callable<A>,
{
    /// Returns `true` if the wrapped callable ran.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns `true` if more arguments are needed.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// The output of the wrapped callable, if the chain completed.
    #[must_use]
    pub fn complete(self) -> Option<C::Output> {
        match self {
            Self::Complete(output) => Some(output),
            Self::Partial(_) => None,
        }
    }

    /// The next step of the chain, if it did not complete.
    #[must_use]
    pub fn partial(self) -> Option<Curried<C, A>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried),
        }
    }

    /// Continues a partial chain with more arguments.
    ///
    /// Returns `None` if the chain already completed.
    ///
    /// # Examples
    ///
    /// ```
    /// use curried::{curry_fn, Arguments};
    ///
    /// let add3 = curry_fn("add3", 3, |arguments: Arguments<i32>| {
    ///     arguments.positional().iter().sum::<i32>()
    /// });
    ///
    /// let result = add3
    ///     .call([1])
    ///     .call([2])
    ///     .and_then(|application| application.call([3]))
    ///     .and_then(|application| application.complete());
    /// assert_eq!(result, Some(6));
    /// ```
    #[must_use]
    pub fn call(&self, arguments: impl Into<Arguments<A>>) -> Option<Self>
    where
        A: Clone,
    {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curried) => Some(curried.call(arguments)),
        }
    }
}

impl<C, A> fmt::Debug for Application<C, A>
where
    C: Callable<A>,
    C::Output: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete(output) => formatter.debug_tuple("Complete").field(output).finish(),
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
        }
    }
}
