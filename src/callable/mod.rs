//! Callables that can be curried.
//!
//! A [`Callable`] exposes the three things the curry transformer needs:
//! a display name, a fixed arity, and a call operator taking the
//! accumulated [`Arguments`].
//!
//! # Implementations
//!
//! - [`Function`]: a closure over raw [`Arguments`] with an explicit arity
//! - [`Bound`]: a function over a fixed-size array of parameters, described
//!   by a [`Signature`] that binds positional and named arguments and fills
//!   defaults
//! - any user type: object callables implement [`Callable`] directly; the
//!   receiver is not part of their arity
//!
//! # Examples
//!
//! ```
//! use curried::{Arguments, Callable};
//!
//! struct Scale {
//!     factor: i64,
//! }
//!
//! impl Callable<i64> for Scale {
//!     type Output = i64;
//!
//!     fn name(&self) -> &str {
//!         "Scale"
//!     }
//!
//!     fn arity(&self) -> usize {
//!         2
//!     }
//!
//!     fn call(&self, arguments: Arguments<i64>) -> i64 {
//!         arguments.positional().iter().map(|value| value * self.factor).sum()
//!     }
//! }
//!
//! let curried = curried::curry(Scale { factor: 3 });
//! assert_eq!(curried.call([1]).partial().unwrap().call([2]).complete(), Some(9));
//! ```

mod bound;
mod function;
mod signature;

pub use bound::Bound;
pub use function::Function;
pub use signature::{Parameter, Signature};

use crate::Arguments;

/// A callable of fixed arity over arguments of type `A`.
pub trait Callable<A> {
    /// The value produced by a complete invocation.
    type Output;

    /// The display name, preserved across every step of a curry chain.
    fn name(&self) -> &str;

    /// Number of declared parameters; the completion threshold for currying.
    fn arity(&self) -> usize;

    /// Invokes the callable with a complete set of arguments.
    fn call(&self, arguments: Arguments<A>) -> Self::Output;
}

impl<A, C> Callable<A> for Box<C>
where
    C: Callable<A> + ?Sized,
{
    type Output = C::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn call(&self, arguments: Arguments<A>) -> Self::Output {
        (**self).call(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_boxed_dyn_callable_delegates() {
        let boxed: Box<dyn Callable<i32, Output = i32>> =
            Box::new(Function::new("sum", 2, |arguments: Arguments<i32>| {
                arguments.positional().iter().sum::<i32>()
            }));

        assert_eq!(boxed.name(), "sum");
        assert_eq!(boxed.arity(), 2);
        assert_eq!(boxed.call(Arguments::from([4, 5])), 9);
    }
}
