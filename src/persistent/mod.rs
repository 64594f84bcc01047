//! Persistent (immutable) data structures for accumulation state.
//!
//! - [`PersistentList`]: Persistent singly-linked list
//! - [`PersistentAssocMap`]: Persistent association map layered on the list
//!
//! # Structural Sharing
//!
//! Extending either structure creates a new version that shares every
//! existing node with the original. A curried callable stores its
//! accumulated arguments in these structures, so deriving a new step is
//! cheap and never disturbs the step it was derived from.
//!
//! # Examples
//!
//! ```rust
//! use curried::persistent::{PersistentAssocMap, PersistentList};
//!
//! let list = PersistentList::new().cons(2).cons(1);
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 2);     // Original unchanged
//! assert_eq!(extended.len(), 3); // New version
//!
//! let map = PersistentAssocMap::new().insert("b", 10);
//! let updated = map.insert("b", 20);
//! assert_eq!(map.get(&"b"), Some(&10));
//! assert_eq!(updated.get(&"b"), Some(&20));
//! assert_eq!(updated.len(), 1);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod assoc;
mod list;

pub use assoc::PersistentAssocMap;
pub use list::PersistentList;
pub use list::PersistentListIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = ReferenceCounter::clone(&reference_counter);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }

    #[rstest]
    fn test_reference_counter_from_str() {
        let name: ReferenceCounter<str> = ReferenceCounter::from("add");
        assert_eq!(&*name, "add");
    }
}
