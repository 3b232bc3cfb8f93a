//! Fixed-capacity sets of integers over a dense universe `[0, capacity)`.
//!
//! Both set types support these operations in O(1) time:
//!
//! - `contains(n)`: check whether `n` is a member.
//! - `pop()`: remove and return an arbitrary member.
//! - `len()`: the number of members.
//! - `values()`: the members as a slice, in no particular order.
//!
//! [`GrowSet`] starts out empty and grows with [`GrowSet::add`], while
//! [`ShrinkSet`] starts out full and shrinks with [`ShrinkSet::remove`].
//! Neither allocates or frees memory after construction.
//!
//! ```
//! use intset::{Error, GrowSet, ShrinkSet};
//!
//! let mut seen = GrowSet::new(6);
//! seen.add(1)?;
//! seen.add(4)?;
//! assert!(seen.contains(4));
//! assert_eq!(seen.add(6), Err(Error::ValueOutOfRange));
//!
//! let mut free: ShrinkSet = ShrinkSet::new(4);
//! free.remove(3);
//! assert_eq!(free.len(), 3);
//! free.refill();
//! assert_eq!(free.len(), 4);
//! # Ok::<(), Error>(())
//! ```

mod error;
mod grow_set;
mod shrink_set;
mod sparse;

pub use error::{Error, Result};
pub use grow_set::GrowSet;
pub use shrink_set::ShrinkSet;
pub use sparse::Iter;
