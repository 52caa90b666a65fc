//! Insertion-ordered set with a hashed element index.
//!
//! [`IndexedOrderedSet`] keeps the same sentinel ring as
//! [`OrderedSet`](crate::OrderedSet) for order, and pairs it with an
//! `FxHashMap` from element to ring slot. Membership, insertion and removal
//! by value become O(1) on average, at the cost of requiring
//! `T: Clone + Hash + Eq` and storing every element twice.
//!
//! Observable behaviour is identical to `OrderedSet`: same order rules, same
//! equality, same comparison predicates, same algebra result order.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity   |
//! |------------------------|--------------|
//! | `contains`             | O(1) average |
//! | `add`                  | O(1) average |
//! | `discard` / `remove`   | O(1) average |
//! | `pop` / `first` / `last` | O(1)       |
//! | comparisons, `==`      | O(n + m)     |
//! | set algebra            | O(n + m)     |
//!
//! # Examples
//!
//! ```rust
//! use ringset::IndexedOrderedSet;
//!
//! let mut set: IndexedOrderedSet<&str> = ["uno", "dos"].into();
//! set.add("tres");
//! set.add("uno");
//!
//! let elements: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(elements, vec!["uno", "dos", "tres"]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::error::OrderedSetError;
use crate::ordered_set::OrderedSet;
use crate::ring::{IntoIter, Iter, Ring, SlotIndex};

/// An insertion-ordered set with O(1) average membership.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Hash`, and `Eq`.
#[derive(Clone)]
pub struct IndexedOrderedSet<T> {
    ring: Ring<T>,
    index: FxHashMap<T, SlotIndex>,
}

impl<T> IndexedOrderedSet<T> {
    /// Creates a new empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: Ring::default(),
            index: FxHashMap::default(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: Ring::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// Returns the number of elements the ring can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }

    /// Returns the earliest inserted element still in the set.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.ring.get(self.ring.first_slot())
    }

    /// Returns the most recently inserted element still in the set.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.ring.get(self.ring.last_slot())
    }

    /// Removes every element from the set.
    pub fn clear(&mut self) {
        self.ring.clear();
        self.index.clear();
    }
}

impl<T: Clone + Hash + Eq> IndexedOrderedSet<T> {
    /// Returns `true` if the set contains an element equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(1) average.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::IndexedOrderedSet;
    ///
    /// let set: IndexedOrderedSet<String> = ["hello".to_string()].into();
    /// assert!(set.contains("hello"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Adds `value` to the end of the set unless it is already present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn add(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        let slot = self.ring.push_back(value.clone());
        self.index.insert(value, slot);
        true
    }

    /// Removes the element equal to `value` if there is one.
    ///
    /// Returns `true` if an element was removed.
    pub fn discard<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::NotFound`] if no such element exists. The
    /// set is left unchanged in that case.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<T, OrderedSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.take(value);

        #[cfg(feature = "tracing")]
        if removed.is_none() {
            tracing::debug!(len = self.len(), "remove called with an absent element");
        }

        removed.ok_or(OrderedSetError::NotFound)
    }

    fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(value)?;
        let removed = self.ring.unlink(slot);
        debug_assert!(removed.is_some(), "index pointed at a free ring slot");
        removed
    }

    /// Removes and returns the most recently inserted element.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.ring.last_slot();
        let value = self.ring.unlink(last)?;
        self.index.remove(&value);
        Some(value)
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// See [`OrderedSet::is_subset`].
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// See [`OrderedSet::is_proper_subset`].
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element)) && self != other
    }

    /// See [`OrderedSet::is_superset`].
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|element| self.contains(element))
    }

    /// See [`OrderedSet::is_proper_superset`].
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.iter().all(|element| self.contains(element)) && self != other
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|element| other.contains(element))
    }

    /// See [`OrderedSet::intersection`].
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| other.contains(*element))
            .cloned()
            .collect()
    }

    /// See [`OrderedSet::difference`].
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// See [`OrderedSet::union`].
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other {
            if !result.contains(element) {
                result.add(element.clone());
            }
        }
        result
    }

    /// See [`OrderedSet::symmetric_difference`].
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        for element in other {
            if !self.contains(element) {
                result.add(element.clone());
            }
        }
        result
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for IndexedOrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Hash + Eq> FromIterator<T> for IndexedOrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Clone + Hash + Eq> Extend<T> for IndexedOrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Clone + Hash + Eq, const N: usize> From<[T; N]> for IndexedOrderedSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone + Hash + Eq> From<OrderedSet<T>> for IndexedOrderedSet<T> {
    fn from(set: OrderedSet<T>) -> Self {
        set.into_iter().collect()
    }
}

impl<T> From<IndexedOrderedSet<T>> for OrderedSet<T> {
    fn from(set: IndexedOrderedSet<T>) -> Self {
        Self::from_ring(set.ring)
    }
}

impl<T> IntoIterator for IndexedOrderedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ring)
    }
}

impl<'a, T> IntoIterator for &'a IndexedOrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Hash + Eq> PartialEq for IndexedOrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Clone + Hash + Eq> Eq for IndexedOrderedSet<T> {}

impl<T: Clone + Hash + Eq> PartialOrd for IndexedOrderedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_subset(other) {
            Some(Ordering::Less)
        } else if self.is_superset(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.is_proper_subset(other)
    }

    fn le(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    fn gt(&self, other: &Self) -> bool {
        self.is_proper_superset(other)
    }

    fn ge(&self, other: &Self) -> bool {
        self.is_superset(other)
    }
}

impl<T: Clone + Hash + Eq> BitAnd<&IndexedOrderedSet<T>> for &IndexedOrderedSet<T> {
    type Output = IndexedOrderedSet<T>;

    fn bitand(self, rhs: &IndexedOrderedSet<T>) -> IndexedOrderedSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Clone + Hash + Eq> BitOr<&IndexedOrderedSet<T>> for &IndexedOrderedSet<T> {
    type Output = IndexedOrderedSet<T>;

    fn bitor(self, rhs: &IndexedOrderedSet<T>) -> IndexedOrderedSet<T> {
        self.union(rhs)
    }
}

impl<T: Clone + Hash + Eq> Sub<&IndexedOrderedSet<T>> for &IndexedOrderedSet<T> {
    type Output = IndexedOrderedSet<T>;

    fn sub(self, rhs: &IndexedOrderedSet<T>) -> IndexedOrderedSet<T> {
        self.difference(rhs)
    }
}

impl<T: Clone + Hash + Eq> BitXor<&IndexedOrderedSet<T>> for &IndexedOrderedSet<T> {
    type Output = IndexedOrderedSet<T>;

    fn bitxor(self, rhs: &IndexedOrderedSet<T>) -> IndexedOrderedSet<T> {
        self.symmetric_difference(rhs)
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("IndexedOrderedSet()");
        }
        formatter.write_str("IndexedOrderedSet(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for IndexedOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(IndexedOrderedSet<String>: Send, Sync, Clone, Default);
