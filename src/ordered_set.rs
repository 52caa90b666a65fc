//! Insertion-ordered set backed by a sentinel ring.
//!
//! This module provides [`OrderedSet`], a mutable collection of unique
//! elements that remembers the order in which each distinct element was
//! first added.
//!
//! # Overview
//!
//! Elements are stored in a doubly linked ring closed through a sentinel
//! node. Membership is a linear scan of the ring, so the element type only
//! needs `PartialEq`: no hashing or ordering is required.
//!
//! - Re-adding an element that is already present never moves it.
//! - Equality ignores order: two sets are equal when they hold the same
//!   elements.
//! - Set algebra (`union`, `intersection`, `difference`,
//!   `symmetric_difference`) builds a new set whose order is the order in
//!   which the result was constructed.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity |
//! |------------------------|------------|
//! | `contains`             | O(n)       |
//! | `add`                  | O(n)       |
//! | `discard` / `remove`   | O(n)       |
//! | `pop` / `first` / `last` | O(1)     |
//! | `len` / `is_empty`     | O(1)       |
//! | `iter`                 | O(1) + O(n)|
//! | comparisons, `==`      | O(n * m)   |
//! | set algebra            | O(n * m)   |
//!
//! For O(1) membership on hashable elements see `IndexedOrderedSet`.
//!
//! # Examples
//!
//! ```rust
//! use ringset::OrderedSet;
//!
//! let mut set: OrderedSet<i32> = [4, 8, 15, 16, 23, 42].into();
//!
//! // Re-adding existing elements changes nothing
//! set.add(4);
//! set.add(8);
//! assert_eq!(set.len(), 6);
//!
//! // New elements go to the end
//! set.add(108);
//! let elements: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(elements, vec![4, 8, 15, 16, 23, 42, 108]);
//!
//! assert!(set.contains(&8));
//! assert!(!set.contains(&5));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::error::OrderedSetError;
use crate::ring::{IntoIter, Iter, Ring, SlotIndex};

/// A set that keeps its elements in first-insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type. Membership operations require `PartialEq`;
///   operations that build new sets additionally require `Clone`.
///
/// # Examples
///
/// ```rust
/// use ringset::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.add("b");
/// set.add("a");
/// set.add("b");
///
/// let elements: Vec<&str> = set.iter().copied().collect();
/// assert_eq!(elements, vec!["b", "a"]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    ring: Ring<T>,
}

impl<T> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: Ring::default(),
        }
    }

    /// Wraps a ring whose values are already pairwise distinct.
    #[cfg(feature = "indexed")]
    pub(crate) const fn from_ring(ring: Ring<T>) -> Self {
        Self { ring }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// Capacity only affects allocation; it never changes behaviour.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: Ring::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
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

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// Every call starts a fresh traversal from the first element. The
    /// iterator borrows the set, so the set cannot be changed while the
    /// iterator is in use:
    ///
    /// ```compile_fail
    /// use ringset::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into();
    /// for element in set.iter() {
    ///     set.add(*element + 10);
    /// }
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into();
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&3, &1, &2]);
    /// ```
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

    /// Removes and returns the most recently inserted element.
    ///
    /// Returns `None` if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into();
    /// assert_eq!(set.pop(), Some(3));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let last = self.ring.last_slot();
        self.ring.unlink(last)
    }

    /// Removes every element from the set.
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}

impl<T: PartialEq> OrderedSet<T> {
    /// Returns `true` if the set contains an element equal to `value`.
    ///
    /// Matching uses `PartialEq` alone; there is no identity shortcut.
    ///
    /// Accepts any borrowed form of the element type, so an
    /// `OrderedSet<String>` can be queried with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(n): the ring is scanned from the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let set: OrderedSet<String> = ["hello".to_string()].into();
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("bye"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(value).is_some()
    }

    fn position<Q>(&self, value: &Q) -> Option<SlotIndex>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.ring.find(|element| <T as Borrow<Q>>::borrow(element) == value)
    }

    /// Adds `value` to the end of the set unless an equal element is
    /// already present.
    ///
    /// Returns `true` if the value was inserted. Re-adding an existing
    /// element leaves both the set and its order untouched.
    ///
    /// # Complexity
    ///
    /// O(n), dominated by the membership scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.add('a'));
    /// assert!(set.add('b'));
    /// assert!(!set.add('a'));
    ///
    /// let elements: Vec<char> = set.iter().copied().collect();
    /// assert_eq!(elements, vec!['a', 'b']);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.ring.push_back(value);
        true
    }

    /// Removes the element equal to `value` if there is one.
    ///
    /// Returns `true` if an element was removed. Absence is not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into();
    /// assert!(set.discard(&2));
    /// assert!(!set.discard(&2));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn discard<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(value)
            .and_then(|slot| self.ring.unlink(slot))
            .is_some()
    }

    /// Removes and returns the element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::NotFound`] if no such element exists. The
    /// set is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::{OrderedSet, OrderedSetError};
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into();
    /// assert_eq!(set.remove(&2), Ok(2));
    /// assert_eq!(set.remove(&2), Err(OrderedSetError::NotFound));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Result<T, OrderedSetError>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let removed = self
            .position(value)
            .and_then(|slot| self.ring.unlink(slot));

        #[cfg(feature = "tracing")]
        if removed.is_none() {
            tracing::debug!(len = self.len(), "remove called with an absent element");
        }

        removed.ok_or(OrderedSetError::NotFound)
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// Sets larger than `other` are rejected before any scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let small: OrderedSet<i32> = [1, 2].into();
    /// let large: OrderedSet<i32> = [2, 3, 1].into();
    /// assert!(small.is_subset(&large));
    /// assert!(large.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `self` is in `other` and the two
    /// sets are not equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let small: OrderedSet<i32> = [1, 2].into();
    /// let large: OrderedSet<i32> = [1, 2, 3].into();
    /// assert!(small.is_proper_subset(&large));
    /// assert!(!large.is_proper_subset(&large));
    /// ```
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element)) && self != other
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|element| self.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self` and the two
    /// sets are not equal.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.iter().all(|element| self.contains(element)) && self != other
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let set_a: OrderedSet<i32> = [1, 2].into();
    /// let set_b: OrderedSet<i32> = [3, 4].into();
    /// let set_c: OrderedSet<i32> = [2, 3].into();
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|element| other.contains(element))
    }
}

impl<T: PartialEq + Clone> OrderedSet<T> {
    /// Returns the elements of `self` that are also in `other`, in the
    /// order they appear in `self`.
    ///
    /// # Complexity
    ///
    /// O(n * m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let set_a: OrderedSet<i32> = [3, 1, 2].into();
    /// let set_b: OrderedSet<i32> = [2, 3, 4].into();
    ///
    /// let common: Vec<i32> = set_a.intersection(&set_b).into_iter().collect();
    /// assert_eq!(common, vec![3, 2]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` that are not in `other`, in the order
    /// they appear in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let set_a: OrderedSet<i32> = [1, 2, 3].into();
    /// let set_b: OrderedSet<i32> = [2, 4].into();
    ///
    /// let only_a: Vec<i32> = set_a.difference(&set_b).into_iter().collect();
    /// assert_eq!(only_a, vec![1, 3]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns every element of `self` in its order, followed by the
    /// elements of `other` that `self` lacks, in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let set_a: OrderedSet<i32> = [1, 2].into();
    /// let set_b: OrderedSet<i32> = [3, 2, 4].into();
    ///
    /// let union: Vec<i32> = set_a.union(&set_b).into_iter().collect();
    /// assert_eq!(union, vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        for element in self {
            result.add(element.clone());
        }
        for element in other {
            if !result.contains(element) {
                result.add(element.clone());
            }
        }
        result
    }

    /// Returns the elements of `self` missing from `other` (in `self`'s
    /// order) followed by the elements of `other` missing from `self` (in
    /// `other`'s order).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ringset::OrderedSet;
    ///
    /// let set_a: OrderedSet<i32> = [1, 2, 3].into();
    /// let set_b: OrderedSet<i32> = [4, 3, 2, 5].into();
    ///
    /// let either: Vec<i32> = set_a.symmetric_difference(&set_b).into_iter().collect();
    /// assert_eq!(either, vec![1, 4, 5]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for element in self {
            if !other.contains(element) {
                result.add(element.clone());
            }
        }
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

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T: PartialEq + Copy + 'a> Extend<&'a T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ring)
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sets are equal when they have the same length and every element of
/// one is contained in the other. Order is ignored.
///
/// Element matching follows `T::eq` exactly, so a set holding `f64::NAN`
/// never equals itself and never reports the NaN as contained.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

/// Orders sets by inclusion.
///
/// `a < b` is [`OrderedSet::is_proper_subset`], `a <= b` is
/// [`OrderedSet::is_subset`], and likewise for the superset side. Sets that
/// are neither equal nor nested compare as `None`.
///
/// ```rust
/// use ringset::OrderedSet;
///
/// let small: OrderedSet<i32> = [1, 2].into();
/// let large: OrderedSet<i32> = [1, 2, 3].into();
/// let other: OrderedSet<i32> = [4].into();
///
/// assert!(small < large);
/// assert!(large >= small);
/// assert_eq!(small.partial_cmp(&other), None);
/// ```
impl<T: PartialEq> PartialOrd for OrderedSet<T> {
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

impl<T: PartialEq + Clone> BitAnd<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Returns `self.intersection(rhs)`.
    fn bitand(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
        self.intersection(rhs)
    }
}

impl<T: PartialEq + Clone> BitOr<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Returns `self.union(rhs)`.
    fn bitor(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
        self.union(rhs)
    }
}

impl<T: PartialEq + Clone> Sub<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Returns `self.difference(rhs)`.
    fn sub(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
        self.difference(rhs)
    }
}

impl<T: PartialEq + Clone> BitXor<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Returns `self.symmetric_difference(rhs)`.
    fn bitxor(self, rhs: &OrderedSet<T>) -> OrderedSet<T> {
        self.symmetric_difference(rhs)
    }
}

/// Renders `OrderedSet()` when empty and `OrderedSet([a, b, ...])` otherwise.
impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("OrderedSet()");
        }
        formatter.write_str("OrderedSet(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
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

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(OrderedSet<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
