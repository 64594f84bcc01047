//! Persistent association map.
//!
//! [`PersistentAssocMap`] is an association list built on
//! [`PersistentList`]: inserting a key prepends a new binding that shadows
//! any older binding of the same key. Lookups are linear, which suits the
//! handful of named arguments a single call chain carries.

use std::fmt;

use super::PersistentList;

/// A persistent map with last-write-wins semantics.
///
/// # Examples
///
/// ```rust
/// use curried::persistent::PersistentAssocMap;
///
/// let map = PersistentAssocMap::new()
///     .insert("a", 1)
///     .insert("b", 2)
///     .insert("a", 3);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&"a"), Some(&3));
/// assert_eq!(map.entries(), vec![(&"a", &3), (&"b", &2)]);
/// ```
pub struct PersistentAssocMap<K, V> {
    /// Newest binding first.
    bindings: PersistentList<(K, V)>,
    /// Number of distinct keys.
    length: usize,
}

impl<K, V> PersistentAssocMap<K, V> {
    /// Creates a new empty map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: PersistentList::new(),
            length: 0,
        }
    }

    /// Returns the number of distinct keys.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map holds no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<K: PartialEq, V> PersistentAssocMap<K, V> {
    /// Returns the latest value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.bindings
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` has a binding.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Binds `key` to `value` in a new version of the map.
    ///
    /// An existing binding of `key` is shadowed, not removed; the original
    /// map still sees it.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let length = if self.contains_key(&key) {
            self.length
        } else {
            self.length + 1
        };
        Self {
            bindings: self.bindings.cons((key, value)),
            length,
        }
    }

    /// Lists every key with its latest value, in the order keys were first
    /// inserted.
    #[must_use]
    pub fn entries(&self) -> Vec<(&K, &V)> {
        let mut oldest_first: Vec<&(K, V)> = self.bindings.iter().collect();
        oldest_first.reverse();

        let mut entries: Vec<(&K, &V)> = Vec::with_capacity(self.length);
        for (key, value) in oldest_first {
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        entries
    }
}

impl<K, V> Default for PersistentAssocMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for PersistentAssocMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            bindings: self.bindings.clone(),
            length: self.length,
        }
    }
}

impl<K: PartialEq + fmt::Debug, V: fmt::Debug> fmt::Debug for PersistentAssocMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries()).finish()
    }
}
