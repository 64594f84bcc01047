//! The curried callable and its intermediate steps.

use std::fmt;

use super::Application;
use crate::persistent::{PersistentAssocMap, PersistentList, ReferenceCounter};
use crate::{Arguments, Callable};

/// A curried callable, or one intermediate step of a curry chain.
///
/// The value returned by [`curry`](crate::curry) carries no arguments; every
/// step derived from it by [`call`](Self::call) carries the arguments
/// accumulated so far. All steps share the wrapped callable and its name.
///
/// # Examples
///
/// ```
/// use curried::{arguments, curry_fn, Arguments};
///
/// let add3 = curry_fn("add3", 3, |arguments: Arguments<i32>| {
///     arguments.positional().iter().sum::<i32>()
/// });
///
/// let step = add3.call([1]).partial().unwrap();
/// assert_eq!(step.supplied(), 1);
/// assert_eq!(step.remaining(), Some(2));
/// assert_eq!(step.to_string(), "add3/3 (1 supplied)");
///
/// let step = step.call(arguments![2]).partial().unwrap();
/// assert_eq!(step.call([3]).complete(), Some(6));
/// ```
pub struct Curried<C, A> {
    callable: ReferenceCounter<C>,
    name: ReferenceCounter<str>,
    arity: usize,
    /// Newest argument first.
    positional: PersistentList<A>,
    named: PersistentAssocMap<String, A>,
}

// Static assertions on thread safety of the shared chain state
static_assertions::assert_impl_all!(Curried<crate::Function<fn(Arguments<i32>) -> i32>, i32>: Clone);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(
    Curried<crate::Function<fn(Arguments<i32>) -> i32>, i32>: Send, Sync
);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(
    Curried<crate::Function<fn(Arguments<i32>) -> i32>, i32>: Send, Sync
);

impl<C, A> Curried<C, A> {
    pub(crate) fn new(callable: C) -> Self
    where
        C: Callable<A>,
    {
        Self {
            name: ReferenceCounter::from(callable.name()),
            arity: callable.arity(),
            callable: ReferenceCounter::new(callable),
            positional: PersistentList::new(),
            named: PersistentAssocMap::new(),
        }
    }

    /// The wrapped callable's name, identical on every step of the chain.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped callable's arity.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Number of arguments accumulated so far, positional and named.
    #[must_use]
    pub const fn supplied(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Number of arguments still needed to complete the chain.
    ///
    /// `None` once the chain has accumulated more arguments than the arity;
    /// such a chain can never complete.
    #[must_use]
    pub const fn remaining(&self) -> Option<usize> {
        self.arity.checked_sub(self.supplied())
    }

    /// A snapshot of the accumulated arguments.
    #[must_use]
    pub fn arguments(&self) -> Arguments<A>
    where
        A: Clone,
    {
        let named = self
            .named
            .entries()
            .into_iter()
            .map(|(key, value)| (key.clone(), value.clone()));
        Arguments::from_parts(self.positional.to_reversed_vec(), named)
    }

    /// Supplies more arguments.
    ///
    /// Positional arguments are appended after those already accumulated.
    /// Named arguments are merged; a name supplied again overwrites the
    /// earlier value. If the accumulated count then equals the arity, the
    /// wrapped callable is invoked with everything accumulated and its
    /// output is returned untouched, so errors it produces propagate to the
    /// caller of this completing call. Otherwise the next step of the chain
    /// is returned.
    ///
    /// `self` is never modified.
    pub fn call(&self, arguments: impl Into<Arguments<A>>) -> Application<C, A>
    where
        C: Callable<A>,
        A: Clone,
    {
        let (positional, named) = arguments.into().into_parts();
        let positional = positional
            .into_iter()
            .fold(self.positional.clone(), |accumulated, value| {
                accumulated.cons(value)
            });
        let named = named
            .into_iter()
            .fold(self.named.clone(), |accumulated, (key, value)| {
                accumulated.insert(key, value)
            });

        let next = Self {
            callable: ReferenceCounter::clone(&self.callable),
            name: ReferenceCounter::clone(&self.name),
            arity: self.arity,
            positional,
            named,
        };

        if next.supplied() == self.arity {
            tracing::trace!(callable = %self.name, arity = self.arity, "curry chain complete");
            Application::Complete(self.callable.call(next.arguments()))
        } else {
            tracing::trace!(
                callable = %self.name,
                supplied = next.supplied(),
                arity = self.arity,
                "curry chain partial"
            );
            Application::Partial(next)
        }
    }
}

// Manual impl: steps share their state, so no `C: Clone` or `A: Clone`
// bound is needed.
impl<C, A> Clone for Curried<C, A> {
    fn clone(&self) -> Self {
        Self {
            callable: ReferenceCounter::clone(&self.callable),
            name: ReferenceCounter::clone(&self.name),
            arity: self.arity,
            positional: self.positional.clone(),
            named: self.named.clone(),
        }
    }
}

impl<C, A> fmt::Debug for Curried<C, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("name", &&*self.name)
            .field("arity", &self.arity)
            .field("supplied", &self.supplied())
            .finish_non_exhaustive()
    }
}

impl<C, A> fmt::Display for Curried<C, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}/{}", self.name, self.arity)?;
        match self.supplied() {
            0 => Ok(()),
            supplied => write!(formatter, " ({supplied} supplied)"),
        }
    }
}
