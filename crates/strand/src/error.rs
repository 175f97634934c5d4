//! Error types for [`DynArray`](crate::DynArray) operations.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors that can occur during array operations.
///
/// Every variant leaves the array in the state it had before the failing
/// call. Nothing is retried internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DynArrayError {
    /// The backing buffer could not be obtained or grown, either because
    /// the allocator refused or because `max_capacity` would be exceeded.
    AllocationFailed {
        /// Slot count that was requested.
        requested: usize,
        /// Slot count reserved at the time of the request.
        capacity: usize,
    },
    /// `insert` was called with an index past the end of the array.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Length of the array at the time of the call.
        len: usize,
    },
    /// `pop` was called on an array holding no elements.
    Empty,
    /// The configuration passed at construction was rejected.
    InvalidConfig(ConfigError),
}

impl fmt::Display for DynArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "allocation failed: requested {requested} slots, capacity {capacity} slots"
                )
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Empty => write!(f, "array is empty"),
            Self::InvalidConfig(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for DynArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for DynArrayError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}
