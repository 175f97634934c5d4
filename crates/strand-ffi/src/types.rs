//! Pointer types shared by the FFI functions.

use std::ffi::c_void;
use std::ptr::{self, NonNull};

use strand::Terminated;

/// A caller-owned `void*` stored in a list.
///
/// Never null: `NULL` is reserved as the terminator of exported arrays.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OpaqueRef(NonNull<c_void>);

// SAFETY: the pointer is only stored and handed back, never dereferenced,
// so moving it between threads cannot race on the pointee.
#[allow(unsafe_code)]
unsafe impl Send for OpaqueRef {}

impl OpaqueRef {
    /// Wrap `ptr`, or `None` if it is null.
    pub(crate) fn new(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub(crate) fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

/// Lay out a terminated copy as a heap `void**` ending in `NULL`.
///
/// Returns `None` if the buffer cannot be allocated. The result must be
/// released with [`release_exported`].
pub(crate) fn export_terminated(copy: &Terminated<OpaqueRef>) -> Option<*mut *mut c_void> {
    let slots = copy.as_slice();
    let mut raw: Vec<*mut c_void> = Vec::new();
    raw.try_reserve_exact(slots.len()).ok()?;
    raw.extend(
        slots
            .iter()
            .map(|slot| slot.map_or(ptr::null_mut(), OpaqueRef::as_ptr)),
    );
    Some(Box::into_raw(raw.into_boxed_slice()).cast::<*mut c_void>())
}

/// Free a buffer produced by [`export_terminated`].
///
/// # Safety
///
/// `array` must be non-null, come from [`export_terminated`], and not have
/// been released already.
#[allow(unsafe_code)]
pub(crate) unsafe fn release_exported(array: *mut *mut c_void) {
    let mut len = 0;
    // SAFETY: the buffer ends in exactly one NULL and stored values are
    // never NULL, so the scan stops at the terminator.
    while !unsafe { (*array.add(len)).is_null() } {
        len += 1;
    }
    // SAFETY: the buffer was a boxed slice of `len + 1` pointers.
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(array, len + 1)) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand::DynArray;

    #[test]
    fn null_is_not_an_opaque_ref() {
        assert_eq!(OpaqueRef::new(ptr::null_mut()), None);
    }

    #[test]
    #[allow(unsafe_code)]
    fn exported_buffer_ends_in_null() {
        let mut values = [10u32, 20, 30];
        let refs = values
            .iter_mut()
            .map(|v| OpaqueRef::new((v as *mut u32).cast()).unwrap());
        let list = DynArray::from_sequence(refs).unwrap();
        let copy = list.to_array().unwrap();

        let raw = export_terminated(&copy).unwrap();
        // SAFETY: raw holds four pointers (three values and NULL).
        let view = unsafe { std::slice::from_raw_parts(raw, 4) };
        for (slot, value) in view.iter().zip(values.iter_mut()) {
            assert_eq!(*slot, (value as *mut u32).cast::<c_void>());
        }
        assert!(view[3].is_null());
        // SAFETY: raw came from export_terminated and is released once.
        unsafe { release_exported(raw) };
    }
}
