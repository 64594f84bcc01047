//! Positional and named arguments supplied to a callable.
//!
//! [`Arguments`] carries what one call of a curried chain supplies, and,
//! once a chain completes, everything the chain accumulated. Positional
//! arguments keep their call order. Named arguments are unique by key;
//! supplying a key again overwrites its value in place (last write wins)
//! while keeping the position where the key first appeared.
//!
//! # Examples
//!
//! ```
//! use curried::{arguments, Arguments};
//!
//! let arguments: Arguments<i32> = arguments![1, 2; scale = 10];
//! assert_eq!(arguments.positional(), &[1, 2]);
//! assert_eq!(arguments.named("scale"), Some(&10));
//! assert_eq!(arguments.len(), 3);
//! ```

mod arguments_macro;

use smallvec::SmallVec;

/// Inline capacity for positional arguments before spilling to the heap.
const POSITIONAL_INLINE: usize = 4;

/// Inline capacity for named arguments before spilling to the heap.
const NAMED_INLINE: usize = 2;

type PositionalBuffer<A> = SmallVec<[A; POSITIONAL_INLINE]>;
type NamedBuffer<A> = SmallVec<[(String, A); NAMED_INLINE]>;

/// An ordered sequence of positional arguments plus a mapping of named
/// arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arguments<A> {
    positional: PositionalBuffer<A>,
    named: NamedBuffer<A>,
}

impl<A> Arguments<A> {
    /// Creates an empty argument set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            positional: SmallVec::new(),
            named: SmallVec::new(),
        }
    }

    pub(crate) fn from_parts(
        positional: impl IntoIterator<Item = A>,
        named: impl IntoIterator<Item = (String, A)>,
    ) -> Self {
        named
            .into_iter()
            .fold(positional.into_iter().collect(), |arguments: Self, (key, value)| {
                arguments.with_named(key, value)
            })
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with_positional(mut self, value: A) -> Self {
        self.positional.push(value);
        self
    }

    /// Adds a named argument, overwriting any earlier value for `name`.
    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: A) -> Self {
        self.insert_named(name.into(), value);
        self
    }

    fn insert_named(&mut self, name: String, value: A) {
        match self.named.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.named.push((name, value)),
        }
    }

    /// The positional arguments in call order.
    #[inline]
    #[must_use]
    pub fn positional(&self) -> &[A] {
        &self.positional
    }

    /// The positional argument at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&A> {
        self.positional.get(index)
    }

    /// The value of the named argument `name`.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&A> {
        self.named
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Iterates over named arguments in first-insertion order.
    pub fn named_entries(&self) -> impl Iterator<Item = (&str, &A)> {
        self.named.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of positional arguments.
    #[inline]
    #[must_use]
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Number of named arguments.
    #[inline]
    #[must_use]
    pub fn named_len(&self) -> usize {
        self.named.len()
    }

    /// Total number of arguments, positional and named.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Returns `true` if no argument is present.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Consumes the set, returning only the positional arguments.
    #[must_use]
    pub fn into_positional(self) -> Vec<A> {
        self.positional.into_vec()
    }

    /// Consumes the set, returning positional and named arguments.
    #[must_use]
    pub fn into_parts(self) -> (Vec<A>, Vec<(String, A)>) {
        (self.positional.into_vec(), self.named.into_vec())
    }
}

impl<A> Default for Arguments<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<()> for Arguments<A> {
    fn from((): ()) -> Self {
        Self::new()
    }
}

impl<A> From<Vec<A>> for Arguments<A> {
    fn from(positional: Vec<A>) -> Self {
        Self {
            positional: SmallVec::from_vec(positional),
            named: SmallVec::new(),
        }
    }
}

impl<A, const N: usize> From<[A; N]> for Arguments<A> {
    fn from(positional: [A; N]) -> Self {
        positional.into_iter().collect()
    }
}

impl<A> FromIterator<A> for Arguments<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().collect(),
            named: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let arguments: Arguments<i32> = Arguments::new();
        assert!(arguments.is_empty());
        assert_eq!(arguments.len(), 0);
    }

    #[rstest]
    fn test_positional_keeps_call_order() {
        let arguments = Arguments::new().with_positional(3).with_positional(1);
        assert_eq!(arguments.positional(), &[3, 1]);
        assert_eq!(arguments.get(1), Some(&1));
        assert_eq!(arguments.get(2), None);
    }

    #[rstest]
    fn test_named_last_write_wins_in_place() {
        let arguments = Arguments::new()
            .with_named("a", 1)
            .with_named("b", 2)
            .with_named("a", 3);

        assert_eq!(arguments.named_len(), 2);
        assert_eq!(arguments.named("a"), Some(&3));
        let entries: Vec<(&str, &i32)> = arguments.named_entries().collect();
        assert_eq!(entries, vec![("a", &3), ("b", &2)]);
    }

    #[rstest]
    #[case(Arguments::from(vec![1, 2, 3]))]
    #[case(Arguments::from([1, 2, 3]))]
    #[case((1..=3).collect::<Arguments<i32>>())]
    fn test_conversions_are_positional(#[case] arguments: Arguments<i32>) {
        assert_eq!(arguments.positional(), &[1, 2, 3]);
        assert_eq!(arguments.named_len(), 0);
    }

    #[rstest]
    fn test_from_unit_is_empty() {
        let arguments: Arguments<String> = ().into();
        assert!(arguments.is_empty());
    }

    #[rstest]
    fn test_from_parts_merges_duplicate_keys() {
        let arguments = Arguments::from_parts(
            vec![1],
            vec![("x".to_string(), 2), ("x".to_string(), 3)],
        );
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments.named("x"), Some(&3));
    }

    #[rstest]
    fn test_into_parts() {
        let (positional, named) = Arguments::from([1, 2]).with_named("c", 3).into_parts();
        assert_eq!(positional, vec![1, 2]);
        assert_eq!(named, vec![("c".to_string(), 3)]);
    }

    #[rstest]
    fn test_spills_beyond_inline_capacity() {
        let arguments: Arguments<usize> = (0..10).collect();
        assert_eq!(arguments.positional_len(), 10);
        assert_eq!(arguments.into_positional(), (0..10).collect::<Vec<_>>());
    }
}
