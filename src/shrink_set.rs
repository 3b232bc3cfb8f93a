use std::fmt;

use log::{debug, trace};
use num_traits::PrimInt;

use crate::{
    sparse::{Iter, SparseSetCore},
    Error, Result,
};

/// A set of integers that starts out holding every value in
/// `[0, capacity)` and shrinks by removal.
///
/// On top of the common operations it supports:
///
/// - [`remove`](ShrinkSet::remove): remove a value, in O(1) time.
/// - [`refill`](ShrinkSet::refill): put every value back, in O(1) time.
///
/// Removal swaps the removed value with the last active one instead of
/// discarding it, so the backing arrays always hold a full permutation of the
/// universe. That is what lets `refill` restore the whole universe by
/// resetting a counter.
#[derive(Clone)]
pub struct ShrinkSet<T = usize> {
    core: SparseSetCore<T>,
}

impl<T: PrimInt> ShrinkSet<T> {
    /// Creates a set holding the integers up to, but not including,
    /// `capacity`. This takes O(capacity) time.
    ///
    /// # Panics
    ///
    /// Panics if `capacity - 1` can't be represented as a `T`.
    pub fn new(capacity: usize) -> Self {
        debug!("allocating shrink set with capacity {}", capacity);
        match SparseSetCore::full(capacity) {
            Some(core) => Self { core },
            None => panic!(
                "capacity {} exceeds the range of {}",
                capacity,
                std::any::type_name::<T>()
            ),
        }
    }

    /// Returns true if `value` is a member of the set.
    ///
    /// Negative values and values `>= capacity` are never members.
    pub fn contains(&self, value: T) -> bool {
        self.core.contains(value)
    }

    /// Removes `value` from the set, returning whether it was present.
    ///
    /// Removing a value that isn't in the set (including one outside the
    /// universe) does nothing.
    pub fn remove(&mut self, value: T) -> bool {
        match self.core.position(value) {
            Some(pos) => {
                self.core.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes every value for which `keep` returns false.
    ///
    /// Takes O(len) time and doesn't allocate.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(T) -> bool,
    {
        let mut pos = 0;
        while pos < self.core.len() {
            if keep(self.core.values()[pos]) {
                pos += 1;
            } else {
                // the last value moves into `pos`, so look at it next
                self.core.swap_remove(pos);
            }
        }
    }

    /// Removes and returns some member of the set (the one in the first
    /// dense slot).
    ///
    /// Returns [`Error::EmptySet`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        if self.core.len() == 0 {
            return Err(Error::EmptySet);
        }
        Ok(self.core.swap_remove(0))
    }

    /// Puts every value of the universe back into the set in O(1) time.
    ///
    /// This always yields the complete universe, not the state before the
    /// latest removals.
    pub fn refill(&mut self) {
        trace!(
            "refilling shrink set from {} to {} values",
            self.core.len(),
            self.core.capacity()
        );
        self.core.fill();
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.core.len() == self.core.capacity()
    }

    /// Returns the size of the universe.
    pub fn capacity(&self) -> usize {
        self.core.capacity()
    }

    /// Returns the members of the set, in no particular order.
    ///
    /// The slice borrows the set's own storage, so it can't outlive the
    /// next mutation.
    pub fn values(&self) -> &[T] {
        self.core.values()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.core.iter()
    }
}

impl<'a, T: PrimInt> IntoIterator for &'a ShrinkSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PrimInt + fmt::Debug> fmt::Debug for ShrinkSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PrimInt> PartialEq for ShrinkSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.core.same_members(&other.core)
    }
}

impl<T: PrimInt> Eq for ShrinkSet<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use bit_set::BitSet;
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    fn sorted<T: PrimInt>(set: &ShrinkSet<T>) -> Vec<T> {
        let mut values = set.values().to_vec();
        values.sort_unstable();
        values
    }

    #[test]
    fn shrink_set_contains_and_len() {
        let set: ShrinkSet = ShrinkSet::new(5);
        assert_eq!(set.len(), 5);
        assert!(set.is_full());

        for v in 0..5 {
            assert!(set.contains(v), "set should contain {}", v);
        }
        assert!(!set.contains(5));
        assert!(!set.contains(6));
    }

    #[test]
    fn shrink_set_remove() {
        let mut set = ShrinkSet::new(6);
        assert!(set.remove(1));
        assert!(set.remove(3));
        assert!(set.remove(5));

        for v in [0, 2, 4] {
            assert!(set.contains(v), "set should contain {}", v);
        }
        for v in [1, 3, 5] {
            assert!(!set.contains(v), "set should not contain {}", v);
        }
        assert_eq!(set.len(), 3);
        assert_eq!(sorted(&set), vec![0, 2, 4]);
        set.core.assert_invariants();
    }

    #[test]
    fn shrink_set_remove_is_idempotent() {
        let mut set = ShrinkSet::new(6);
        assert!(set.remove(2));
        let once = set.clone();
        assert!(!set.remove(2));
        assert_eq!(set, once);
        assert_eq!(set.values(), once.values());
    }

    #[test]
    fn shrink_set_remove_out_of_range() {
        let mut set: ShrinkSet<i16> = ShrinkSet::new(4);
        assert!(!set.remove(-1));
        assert!(!set.remove(4));
        assert!(!set.remove(i16::MAX));
        assert!(!set.contains(-1));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn shrink_set_refill() {
        let mut set = ShrinkSet::new(6);
        set.remove(1);
        set.remove(3);
        set.remove(5);
        assert_eq!(set.len(), 3);

        set.refill();

        assert_eq!(set.len(), 6);
        for v in 0..6 {
            assert!(set.contains(v), "set should contain {}", v);
        }
        assert_eq!(sorted(&set), vec![0, 1, 2, 3, 4, 5]);
        set.core.assert_invariants();
    }

    #[test]
    fn shrink_set_values() {
        let mut set = ShrinkSet::new(6);
        set.remove(1);
        set.remove(3);
        set.remove(5);

        for &v in set.values() {
            assert!(v != 1 && v != 3 && v != 5, "value should not be {}", v);
        }

        set.refill();
        assert_eq!(set.values().len(), 6);
        assert!(set.values().iter().all(|&v| (0..6).contains(&v)));
    }

    #[test]
    fn shrink_set_pop() {
        let mut set = ShrinkSet::new(4);
        set.remove(3);

        let mut popped: Vec<_> = (0..3).map(|_| set.pop().unwrap()).collect();
        popped.sort_unstable();
        assert_eq!(popped, vec![0, 1, 2]);
        assert_eq!(set.pop(), Err(Error::EmptySet));

        set.refill();
        let mut popped: Vec<_> = (0..4).map(|_| set.pop().unwrap()).collect();
        popped.sort_unstable();
        assert_eq!(popped, vec![0, 1, 2, 3]);
        assert_eq!(set.pop(), Err(Error::EmptySet));
        assert!(set.is_empty());

        set.refill();
        assert!(set.is_full());
    }

    #[test]
    fn shrink_set_pop_takes_first_slot() {
        let mut set: ShrinkSet = ShrinkSet::new(3);
        assert_eq!(set.values(), &[0, 1, 2]);
        assert_eq!(set.pop(), Ok(0));
        assert_eq!(set.values(), &[2, 1]);
        assert_eq!(set.pop(), Ok(2));
        assert_eq!(set.pop(), Ok(1));
    }

    #[test]
    fn shrink_set_zero_capacity() {
        let mut set: ShrinkSet = ShrinkSet::new(0);
        assert!(set.is_empty());
        assert!(set.is_full());
        assert!(!set.contains(0));
        assert!(!set.remove(0));
        assert_eq!(set.pop(), Err(Error::EmptySet));
        set.refill();
        assert!(set.is_empty());
    }

    #[should_panic]
    #[test]
    fn shrink_set_capacity_too_wide() {
        let _set: ShrinkSet<u8> = ShrinkSet::new(300);
    }

    #[test]
    fn shrink_set_retain() {
        let mut set: ShrinkSet<u32> = ShrinkSet::new(10);
        set.retain(|v| v % 3 == 0);
        assert_eq!(sorted(&set), vec![0, 3, 6, 9]);
        set.core.assert_invariants();

        set.retain(|_| false);
        assert!(set.is_empty());

        set.refill();
        assert_eq!(set.len(), 10);
        set.core.assert_invariants();
    }

    #[test]
    fn shrink_set_debug_and_eq() {
        let mut a: ShrinkSet = ShrinkSet::new(4);
        let mut b: ShrinkSet = ShrinkSet::new(4);
        a.remove(0);
        assert_eq!(format!("{:?}", a), "{3, 1, 2}");

        b.remove(2);
        assert_ne!(a, b);
        b.refill();
        b.remove(0);
        assert_eq!(a, b);
    }

    #[test]
    fn shrink_set_refill_restores_universe_for_any_removals() {
        const CAPACITY: usize = 50;
        let mut rng = StdRng::seed_from_u64(42);
        let mut set: ShrinkSet<u32> = ShrinkSet::new(CAPACITY);
        let mut universe: Vec<u32> = (0..CAPACITY as u32).collect();

        for _ in 0..200 {
            universe.shuffle(&mut rng);
            let count = rng.gen_range(0..=CAPACITY);
            for &v in &universe[..count] {
                set.remove(v);
            }
            assert_eq!(set.len(), CAPACITY - count);

            set.refill();
            assert_eq!(set.len(), CAPACITY);
            assert!((0..CAPACITY as u32).all(|v| set.contains(v)));
            set.core.assert_invariants();
        }
    }

    #[test]
    fn shrink_set_matches_bit_set() {
        const CAPACITY: usize = 64;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut set: ShrinkSet<i32> = ShrinkSet::new(CAPACITY);
        let mut model: BitSet = (0..CAPACITY).collect();

        for _ in 0..10_000 {
            match rng.gen_range(0..20) {
                0 => {
                    set.refill();
                    model = (0..CAPACITY).collect();
                }
                1..=5 => match set.pop() {
                    Ok(value) => assert!(model.remove(value as usize)),
                    Err(err) => {
                        assert_eq!(err, Error::EmptySet);
                        assert!(model.is_empty());
                    }
                },
                _ => {
                    let value = rng.gen_range(-4..CAPACITY as i32 + 4);
                    let expected = value >= 0 && model.remove(value as usize);
                    assert_eq!(set.remove(value), expected);
                }
            }

            set.core.assert_invariants();
            assert_eq!(set.len(), model.len());
            for v in 0..CAPACITY {
                assert_eq!(set.contains(v as i32), model.contains(v));
            }
        }
    }
}
