//! Index-based sentinel ring shared by the set types.
//!
//! Nodes live in a `Vec` and refer to their neighbours by slot index, so the
//! cyclic structure carries no ownership cycles. Slot [`SENTINEL`] never holds
//! a value; its `next` is the first live element and its `prev` the last. In
//! an empty ring both links point back at the sentinel itself.
//!
//! ```text
//!          ┌──────────────────────────────────────────────────┐
//!          ▼                                                  │
//!    ┌──────────┐      ┌──────────┐      ┌──────────┐         │
//!    │ sentinel │ ───► │  slot a  │ ───► │  slot b  │ ────────┘
//!    │  (none)  │ ◄─── │  value   │ ◄─── │  value   │
//!    └──────────┘      └──────────┘      └──────────┘
//! ```
//!
//! Unlinked slots are kept on a free list and refilled by later pushes.
//! Iteration order is defined by the links alone, so slot reuse never
//! reorders anything.

use std::iter::FusedIterator;

/// Position of a node inside the ring's slot storage.
pub(crate) type SlotIndex = usize;

/// Slot of the sentinel node.
pub(crate) const SENTINEL: SlotIndex = 0;

#[derive(Clone)]
struct Node<T> {
    value: Option<T>,
    prev: SlotIndex,
    next: SlotIndex,
}

impl<T> Node<T> {
    const fn sentinel() -> Self {
        Self {
            value: None,
            prev: SENTINEL,
            next: SENTINEL,
        }
    }
}

/// Doubly linked ring of values closed through a sentinel slot.
#[derive(Clone)]
pub(crate) struct Ring<T> {
    nodes: Vec<Node<T>>,
    free: Vec<SlotIndex>,
    len: usize,
}

impl<T> Ring<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Number of values the ring can hold before its slot storage grows.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity() - 1
    }

    #[inline]
    pub(crate) fn first_slot(&self) -> SlotIndex {
        self.nodes[SENTINEL].next
    }

    #[inline]
    pub(crate) fn last_slot(&self) -> SlotIndex {
        self.nodes[SENTINEL].prev
    }

    /// Returns the value stored at `slot`, or `None` for the sentinel and for
    /// free slots.
    #[inline]
    pub(crate) fn get(&self, slot: SlotIndex) -> Option<&T> {
        self.nodes.get(slot).and_then(|node| node.value.as_ref())
    }

    /// Walks the ring from the first element and returns the slot of the
    /// first value matching `predicate`.
    pub(crate) fn find<F>(&self, mut predicate: F) -> Option<SlotIndex>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.first_slot();
        while cursor != SENTINEL {
            let node = &self.nodes[cursor];
            if node.value.as_ref().is_some_and(&mut predicate) {
                return Some(cursor);
            }
            cursor = node.next;
        }
        None
    }

    /// Splices `value` in just before the sentinel and returns its slot.
    pub(crate) fn push_back(&mut self, value: T) -> SlotIndex {
        let tail = self.last_slot();
        debug_assert_eq!(
            self.nodes[tail].next, SENTINEL,
            "ring tail must close on the sentinel"
        );
        let node = Node {
            value: Some(value),
            prev: tail,
            next: SENTINEL,
        };

        let slot = if let Some(slot) = self.free.pop() {
            #[cfg(feature = "tracing")]
            tracing::trace!(slot, "reusing freed ring slot");
            self.nodes[slot] = node;
            slot
        } else {
            #[cfg(feature = "tracing")]
            if self.nodes.len() == self.nodes.capacity() {
                tracing::trace!(
                    capacity = self.nodes.capacity(),
                    len = self.len,
                    "growing ring slot storage"
                );
            }
            self.nodes.push(node);
            self.nodes.len() - 1
        };

        self.nodes[tail].next = slot;
        self.nodes[SENTINEL].prev = slot;
        self.len += 1;
        slot
    }

    /// Unlinks the node at `slot` and hands back its value.
    ///
    /// Returns `None` without touching the ring when `slot` is the sentinel,
    /// out of range, or already free.
    pub(crate) fn unlink(&mut self, slot: SlotIndex) -> Option<T> {
        if slot == SENTINEL {
            return None;
        }
        let node = self.nodes.get_mut(slot)?;
        let value = node.value.take()?;
        let (prev, next) = (node.prev, node.next);
        node.prev = slot;
        node.next = slot;

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(slot);
        debug_assert!(self.len > 0, "unlinked a live slot from an empty ring");
        self.len -= 1;
        Some(value)
    }

    /// Drops every value and returns the ring to its freshly built state.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[SENTINEL] = Node::sentinel();
        self.free.clear();
        self.len = 0;
    }

    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.first_slot(),
            remaining: self.len,
        }
    }

    /// Checks that every link is mirrored by its neighbour and that the
    /// number of live nodes reachable from the sentinel equals `len`.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let mut steps = 0;
        let mut cursor = SENTINEL;
        loop {
            let next = self.nodes[cursor].next;
            if self.nodes[next].prev != cursor {
                return false;
            }
            cursor = next;
            if cursor == SENTINEL {
                return steps == self.len;
            }
            if self.nodes[cursor].value.is_none() || steps == self.len {
                return false;
            }
            steps += 1;
        }
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A forward iterator over the elements of an ordered set, in insertion order.
///
/// Created by `OrderedSet::iter` and `IndexedOrderedSet::iter`. The iterator
/// borrows the set, so the set cannot be mutated while it is alive.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: SlotIndex,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == SENTINEL {
            return None;
        }
        let node = &self.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over the elements of an ordered set, in insertion order.
pub struct IntoIter<T> {
    ring: Ring<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(ring: Ring<T>) -> Self {
        Self { ring }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let first = self.ring.first_slot();
        self.ring.unlink(first)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.ring.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn ring_of(values: &[i32]) -> Ring<i32> {
        let mut ring = Ring::default();
        for value in values {
            ring.push_back(*value);
        }
        ring
    }

    fn collect(ring: &Ring<i32>) -> Vec<i32> {
        ring.iter().copied().collect()
    }

    #[rstest]
    fn empty_ring_sentinel_points_at_itself() {
        let ring: Ring<i32> = Ring::default();
        assert_eq!(ring.first_slot(), SENTINEL);
        assert_eq!(ring.last_slot(), SENTINEL);
        assert_eq!(ring.len(), 0);
        assert!(ring.is_consistent());
        assert_eq!(ring.iter().next(), None);
    }

    #[rstest]
    fn push_back_appends_at_the_tail() {
        let ring = ring_of(&[1, 2, 3]);
        assert_eq!(collect(&ring), vec![1, 2, 3]);
        assert_eq!(ring.get(ring.first_slot()), Some(&1));
        assert_eq!(ring.get(ring.last_slot()), Some(&3));
        assert!(ring.is_consistent());
    }

    #[rstest]
    #[case::head(1, vec![2, 3])]
    #[case::middle(2, vec![1, 3])]
    #[case::tail(3, vec![1, 2])]
    fn unlink_relinks_neighbours(#[case] target: i32, #[case] expected: Vec<i32>) {
        let mut ring = ring_of(&[1, 2, 3]);
        let slot = ring.find(|value| *value == target);
        assert!(slot.is_some());

        assert_eq!(slot.and_then(|slot| ring.unlink(slot)), Some(target));
        assert_eq!(collect(&ring), expected);
        assert_eq!(ring.len(), 2);
        assert!(ring.is_consistent());
    }

    #[rstest]
    fn unlink_sentinel_is_rejected() {
        let mut ring = ring_of(&[1]);
        assert_eq!(ring.unlink(SENTINEL), None);
        assert_eq!(ring.len(), 1);
        assert!(ring.is_consistent());
    }

    #[rstest]
    fn unlink_free_slot_is_rejected() {
        let mut ring = ring_of(&[1, 2]);
        let slot = ring.first_slot();
        assert_eq!(ring.unlink(slot), Some(1));
        assert_eq!(ring.unlink(slot), None);
        assert_eq!(ring.unlink(99), None);
        assert_eq!(ring.len(), 1);
    }

    #[rstest]
    fn freed_slot_is_reused_without_reordering() {
        let mut ring = ring_of(&[1, 2, 3]);
        let slot = ring.first_slot();
        ring.unlink(slot);

        let reused = ring.push_back(4);
        assert_eq!(reused, slot);
        assert_eq!(collect(&ring), vec![2, 3, 4]);
        assert!(ring.is_consistent());
    }

    #[rstest]
    fn unlink_last_element_restores_empty_ring() {
        let mut ring = ring_of(&[7]);
        let slot = ring.first_slot();
        ring.unlink(slot);
        assert_eq!(ring.first_slot(), SENTINEL);
        assert_eq!(ring.last_slot(), SENTINEL);
        assert!(ring.is_consistent());
    }

    #[rstest]
    fn clear_resets_storage() {
        let mut ring = ring_of(&[1, 2, 3]);
        ring.clear();
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.iter().count(), 0);
        assert!(ring.is_consistent());

        ring.push_back(5);
        assert_eq!(collect(&ring), vec![5]);
    }

    #[rstest]
    fn find_returns_first_match() {
        let ring = ring_of(&[4, 8, 15]);
        let slot = ring.find(|value| value % 2 == 0);
        assert_eq!(slot.and_then(|slot| ring.get(slot)), Some(&4));
        assert_eq!(ring.find(|value| *value == 16), None);
    }

    #[rstest]
    fn iter_is_exact_size_and_fused() {
        let ring = ring_of(&[1, 2]);
        let mut iter = ring.iter();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    fn into_iter_drains_in_order() {
        let ring = ring_of(&[3, 1, 2]);
        let drained: Vec<i32> = IntoIter::new(ring).collect();
        assert_eq!(drained, vec![3, 1, 2]);
    }

    #[rstest]
    fn capacity_is_kept_across_unlink_and_reuse() {
        let mut ring: Ring<i32> = Ring::with_capacity(4);
        assert!(ring.capacity() >= 4);
        for value in 0..4 {
            ring.push_back(value);
        }
        let before = ring.capacity();
        let slot = ring.first_slot();
        ring.unlink(slot);
        ring.push_back(4);
        assert_eq!(ring.capacity(), before);
    }

    #[derive(Debug, Clone)]
    enum RingOperation {
        Push(i32),
        UnlinkFirstMatch(i32),
        PopBack,
        Clear,
    }

    fn ring_operation() -> impl Strategy<Value = RingOperation> {
        prop_oneof![
            5 => (0..16_i32).prop_map(RingOperation::Push),
            3 => (0..16_i32).prop_map(RingOperation::UnlinkFirstMatch),
            2 => Just(RingOperation::PopBack),
            1 => Just(RingOperation::Clear),
        ]
    }

    proptest! {
        #[test]
        fn random_operations_keep_ring_consistent(
            operations in prop::collection::vec(ring_operation(), 0..300)
        ) {
            let mut ring: Ring<i32> = Ring::default();
            let mut model: Vec<i32> = Vec::new();

            for operation in operations {
                match operation {
                    RingOperation::Push(value) => {
                        let slot = ring.push_back(value);
                        prop_assert_eq!(ring.get(slot), Some(&value));
                        model.push(value);
                    }
                    RingOperation::UnlinkFirstMatch(value) => {
                        let removed = ring
                            .find(|element| *element == value)
                            .and_then(|slot| ring.unlink(slot));
                        let position = model.iter().position(|element| *element == value);
                        prop_assert_eq!(removed, position.map(|position| model.remove(position)));
                    }
                    RingOperation::PopBack => {
                        let last = ring.last_slot();
                        prop_assert_eq!(ring.unlink(last), model.pop());
                    }
                    RingOperation::Clear => {
                        ring.clear();
                        model.clear();
                    }
                }

                prop_assert!(ring.is_consistent());
                prop_assert_eq!(ring.len(), model.len());
                prop_assert_eq!(collect(&ring), model.clone());
            }
        }
    }
}
