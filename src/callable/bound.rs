//! Functions over a fixed-size parameter array, bound through a
//! [`Signature`].

use std::fmt;

use super::{Callable, Signature};
use crate::{Arguments, BindingError};

/// A function of `N` parameters of type `A`, described by a [`Signature`].
///
/// On invocation the accumulated [`Arguments`] are bound to the signature,
/// which resolves named arguments and fills defaults, and the resulting
/// values are passed to the function as `[A; N]`. Binding failures are this
/// callable's own errors and surface as the `Err` side of its output.
///
/// The `#[callable]` attribute builds a `Bound` from an ordinary function.
///
/// # Examples
///
/// ```
/// use curried::{arguments, curry, Bound, Signature};
///
/// let add = curry(Bound::new(
///     Signature::new("add").parameter("a").parameter_with_default("b", 10),
///     |[a, b]: [i64; 2]| a + b,
/// ));
///
/// assert_eq!(add.call(arguments![2; b = 10]).complete(), Some(Ok(12)));
/// let partial = add.call([1]).partial().unwrap();
/// assert_eq!(partial.call([2]).complete(), Some(Ok(3)));
/// ```
#[derive(Clone)]
pub struct Bound<A, F, const N: usize> {
    signature: Signature<A>,
    function: F,
}

impl<A, F, const N: usize> Bound<A, F, N> {
    /// Pairs `function` with the signature describing its parameters.
    pub const fn new(signature: Signature<A>, function: F) -> Self {
        Self {
            signature,
            function,
        }
    }

    /// The signature used for binding.
    pub const fn signature(&self) -> &Signature<A> {
        &self.signature
    }
}

impl<A, F, R, const N: usize> Callable<A> for Bound<A, F, N>
where
    A: Clone,
    F: Fn([A; N]) -> R,
{
    type Output = Result<R, BindingError>;

    fn name(&self) -> &str {
        self.signature.name()
    }

    fn arity(&self) -> usize {
        self.signature.arity()
    }

    fn call(&self, arguments: Arguments<A>) -> Self::Output {
        let values = self.signature.bind(arguments)?;
        let values = <[A; N]>::try_from(values).map_err(|values: Vec<A>| {
            BindingError::ArityMismatch {
                callable: self.signature.name().to_string(),
                expected: N,
                given: values.len(),
            }
        })?;
        Ok((self.function)(values))
    }
}

impl<A: fmt::Debug, F, const N: usize> fmt::Debug for Bound<A, F, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Bound")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
