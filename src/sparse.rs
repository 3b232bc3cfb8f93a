use std::{iter::FusedIterator, slice};

use num_traits::PrimInt;

/// Paired sparse/dense arrays over the universe `[0, capacity)`.
///
/// A value `v` is active iff `sparse[v] < len && dense[sparse[v]] == v`.
/// Both arrays are allocated once at construction and are never resized, so
/// nothing past `new` touches the allocator. Slots outside `dense[..len]`,
/// and `sparse` entries of inactive values, may hold stale positions.
#[derive(Clone)]
pub(crate) struct SparseSetCore<T> {
    len: usize,
    sparse: Box<[usize]>, // value -> position in `dense`
    dense: Box<[T]>,      // active values live in dense[..len]
}

impl<T: PrimInt> SparseSetCore<T> {
    /// A core with no active values.
    pub fn empty(capacity: usize) -> Self {
        Self {
            len: 0,
            sparse: vec![0; capacity].into_boxed_slice(),
            dense: vec![T::zero(); capacity].into_boxed_slice(),
        }
    }

    /// A core holding every value of the universe, with `dense[i] == i`
    /// and `sparse[i] == i`.
    ///
    /// Returns `None` if `capacity - 1` doesn't fit in `T`.
    pub fn full(capacity: usize) -> Option<Self> {
        let dense = (0..capacity)
            .map(num_traits::cast)
            .collect::<Option<Box<[T]>>>()?;

        Some(Self {
            len: capacity,
            sparse: (0..capacity).collect(),
            dense,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.dense.len()
    }

    /// Maps `value` to its index in `sparse`, or `None` when it lies outside
    /// the universe (negative or `>= capacity`).
    pub fn slot(&self, value: T) -> Option<usize> {
        value.to_usize().filter(|&slot| slot < self.sparse.len())
    }

    /// Position of `value` in `dense` if it is active.
    pub fn position(&self, value: T) -> Option<usize> {
        // sparse[slot] may be left over from a removal or from construction,
        // so it only counts if dense points back at the same value
        let pos = self.sparse[self.slot(value)?];
        (pos < self.len && self.dense[pos] == value).then_some(pos)
    }

    pub fn contains(&self, value: T) -> bool {
        self.position(value).is_some()
    }

    /// Appends `value` to the active region.
    ///
    /// `slot` must be `value`'s sparse index and `value` must not be active.
    pub fn push(&mut self, slot: usize, value: T) {
        debug_assert!(self.len < self.capacity());
        debug_assert!(!self.contains(value));

        self.dense[self.len] = value;
        self.sparse[slot] = self.len;
        self.len += 1;
    }

    /// Removes the active value at dense position `pos` by swapping it with
    /// the last active value, and returns it.
    ///
    /// The removed value stays in the array just past the active region with
    /// its `sparse` entry pointing at it, so the full arrays remain a
    /// consistent permutation of whatever they held before.
    pub fn swap_remove(&mut self, pos: usize) -> T {
        debug_assert!(pos < self.len);

        let last = self.len - 1;
        let value = self.dense[pos];
        let moved = self.dense[last];
        self.dense.swap(pos, last);

        // active values always lie inside the universe
        let slots = (moved.to_usize(), value.to_usize());
        debug_assert!(
            matches!(slots, (Some(_), Some(_))),
            "active value outside the universe"
        );
        if let (Some(moved_slot), Some(slot)) = slots {
            self.sparse[moved_slot] = pos;
            self.sparse[slot] = last;
        }

        self.len = last;
        value
    }

    /// Drops the last active value without touching `sparse`.
    pub fn truncate_last(&mut self) -> Option<T> {
        self.len = self.len.checked_sub(1)?;
        Some(self.dense[self.len])
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Makes every slot of `dense` active again.
    pub fn fill(&mut self) {
        self.len = self.dense.len();
    }

    pub fn values(&self) -> &[T] {
        &self.dense[..self.len]
    }

    /// True if both cores hold the same active values, in any order.
    pub fn same_members(&self, other: &Self) -> bool {
        self.len == other.len && self.values().iter().all(|&v| other.contains(v))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.values().iter(),
        }
    }

    /// Panics if any of the representation invariants is broken.
    #[cfg(test)]
    pub fn assert_invariants(&self) {
        assert_eq!(self.sparse.len(), self.dense.len());
        assert!(self.len <= self.capacity());

        let mut seen = vec![false; self.capacity()];
        for (pos, &value) in self.values().iter().enumerate() {
            let slot = self.slot(value).expect("active value outside the universe");
            assert_eq!(self.sparse[slot], pos, "sparse[{}] is stale", slot);
            assert!(!seen[slot], "duplicate value at {}", pos);
            seen[slot] = true;
        }
    }
}

/// An iterator over the active values of a set, in dense order.
///
/// Created by the `iter` methods on [`GrowSet`](crate::GrowSet) and
/// [`ShrinkSet`](crate::ShrinkSet).
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Copy> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().copied()
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Copy> FusedIterator for Iter<'a, T> {}
