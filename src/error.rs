use thiserror::Error;

/// Errors returned by the fallible set operations.
///
/// Neither variant means the set is corrupted. Single-value operations leave
/// the set untouched when they return one of these; `GrowSet::extend_from`
/// keeps the values it added before the out-of-range one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// `pop` was called on a set with no active elements.
    #[error("empty set")]
    EmptySet,
    /// A value was negative or not below the set's capacity.
    #[error("value out of range")]
    ValueOutOfRange,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
