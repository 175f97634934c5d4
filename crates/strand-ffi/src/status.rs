//! C-compatible status codes.
//!
//! [`StrandStatus`] is a `repr(i32)` enum returned (as `i32`) by every FFI
//! function. Conversion from [`DynArrayError`] is provided.

use strand::DynArrayError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrandStatus {
    /// Success.
    Ok = 0,
    /// Handle is invalid or was already destroyed.
    InvalidHandle = -1,
    /// The backing buffer could not be obtained or grown.
    AllocationFailed = -2,
    /// Insert index is greater than the list length.
    IndexOutOfBounds = -3,
    /// Pop was called on an empty list.
    Empty = -4,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -5,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -6,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&DynArrayError> for StrandStatus {
    fn from(e: &DynArrayError) -> Self {
        match e {
            DynArrayError::AllocationFailed { .. } => StrandStatus::AllocationFailed,
            DynArrayError::IndexOutOfBounds { .. } => StrandStatus::IndexOutOfBounds,
            DynArrayError::Empty => StrandStatus::Empty,
            DynArrayError::InvalidConfig(_) => StrandStatus::InvalidArgument,
        }
    }
}

impl StrandStatus {
    /// Status code for a unit result.
    pub(crate) fn code(result: Result<(), DynArrayError>) -> i32 {
        match result {
            Ok(()) => StrandStatus::Ok as i32,
            Err(e) => StrandStatus::from(&e) as i32,
        }
    }
}
