use std::fmt;

use log::{debug, trace};
use num_traits::PrimInt;

use crate::{
    sparse::{Iter, SparseSetCore},
    Error, Result,
};

/// A set of integers in `[0, capacity)` that starts out empty and grows by
/// insertion.
///
/// On top of the common operations it supports:
///
/// - [`add`](GrowSet::add): insert a value, in O(1) time.
/// - [`clear`](GrowSet::clear): remove every value, in O(1) time.
///
/// Neither the constructor's allocation nor its zeroing is repeated: every
/// operation after [`new`](GrowSet::new) works inside the two arrays it
/// allocated.
#[derive(Clone)]
pub struct GrowSet<T = usize> {
    core: SparseSetCore<T>,
}

impl<T: PrimInt> GrowSet<T> {
    /// Allocates an empty set able to hold the integers below `capacity`.
    pub fn new(capacity: usize) -> Self {
        debug!("allocating grow set with capacity {}", capacity);
        Self {
            core: SparseSetCore::empty(capacity),
        }
    }

    /// Returns true if `value` is a member of the set.
    ///
    /// Negative values and values `>= capacity` are never members.
    pub fn contains(&self, value: T) -> bool {
        self.core.contains(value)
    }

    /// Adds `value` to the set.
    ///
    /// Returns `Ok(true)` if the value was newly inserted and `Ok(false)` if it
    /// was already present; adding the same value repeatedly is not an error.
    /// If `value` is negative or `>= capacity`, returns
    /// [`Error::ValueOutOfRange`] and leaves the set unchanged.
    pub fn add(&mut self, value: T) -> Result<bool> {
        let slot = self.core.slot(value).ok_or(Error::ValueOutOfRange)?;
        if self.core.contains(value) {
            return Ok(false);
        }
        self.core.push(slot, value);
        Ok(true)
    }

    /// Adds every value yielded by `values`.
    ///
    /// Stops at the first value that is out of range and returns
    /// [`Error::ValueOutOfRange`]; values before it stay in the set.
    pub fn extend_from<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value)?;
        }
        Ok(())
    }

    /// Removes and returns some member of the set (the most recently added
    /// one still present).
    ///
    /// Returns [`Error::EmptySet`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        self.core.truncate_last().ok_or(Error::EmptySet)
    }

    /// Removes every value from the set in O(1) time.
    pub fn clear(&mut self) {
        trace!("clearing grow set of {} values", self.core.len());
        self.core.clear();
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    /// Returns the size of the universe, i.e. one more than the largest
    /// value the set can hold.
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

impl<'a, T: PrimInt> IntoIterator for &'a GrowSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PrimInt + fmt::Debug> fmt::Debug for GrowSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PrimInt> PartialEq for GrowSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.core.same_members(&other.core)
    }
}

impl<T: PrimInt> Eq for GrowSet<T> {}
