//! List lifecycle FFI: create, append, insert, pop, length, export, destroy.
//!
//! All lists share one `LISTS` table behind a `Mutex`. Each call holds the
//! lock for the duration of a single operation, so calls from different
//! threads are serialized; ordering between them is the caller's business.

use std::ffi::c_void;
use std::sync::Mutex;

use strand::{DynArray, DynArrayConfig};
use tracing::debug;

use crate::handle::{HandleTable, NULL_HANDLE};
use crate::status::StrandStatus;
use crate::types::{export_terminated, release_exported, OpaqueRef};

type List = DynArray<OpaqueRef>;

static LISTS: Mutex<HandleTable<List>> = Mutex::new(HandleTable::new());

/// Store `list` and write its handle to `list_out`.
#[allow(unsafe_code)]
fn publish(list: List, list_out: *mut u64) -> i32 {
    let handle = ffi_lock!(LISTS).insert(list);
    // SAFETY: list_out was checked non-null by every caller.
    unsafe { *list_out = handle };
    StrandStatus::Ok as i32
}

/// Create an empty list with the default initial capacity (8 slots).
///
/// On success writes the new handle to `list_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_create(list_out: *mut u64) -> i32 {
    ffi_guard!({
        if list_out.is_null() {
            debug!("strand_list_create: null list_out");
            return StrandStatus::InvalidArgument as i32;
        }
        match DynArray::try_new() {
            Ok(list) => publish(list, list_out),
            Err(e) => StrandStatus::from(&e) as i32,
        }
    })
}

/// Create an empty list with an explicit initial capacity and growth limit.
///
/// `max_capacity == 0` means unbounded. Growth past a non-zero limit fails
/// with `ALLOCATION_FAILED`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_create_bounded(
    initial_capacity: usize,
    max_capacity: usize,
    list_out: *mut u64,
) -> i32 {
    ffi_guard!({
        if list_out.is_null() {
            debug!("strand_list_create_bounded: null list_out");
            return StrandStatus::InvalidArgument as i32;
        }
        let mut config = DynArrayConfig::new(initial_capacity);
        if max_capacity != 0 {
            config = config.with_max_capacity(max_capacity);
        }
        match DynArray::with_config(config) {
            Ok(list) => publish(list, list_out),
            Err(e) => StrandStatus::from(&e) as i32,
        }
    })
}

/// Build a list from `n` pointers at `values`, in order.
///
/// `values` may be null only when `n == 0`. A null entry is rejected with
/// `INVALID_ARGUMENT` and no list is created.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_from_array(
    values: *const *mut c_void,
    n: usize,
    list_out: *mut u64,
) -> i32 {
    ffi_guard!({
        if list_out.is_null() {
            debug!("strand_list_from_array: null list_out");
            return StrandStatus::InvalidArgument as i32;
        }
        let values: &[*mut c_void] = if n == 0 {
            &[]
        } else if values.is_null() {
            debug!(n, "strand_list_from_array: null values with non-zero count");
            return StrandStatus::InvalidArgument as i32;
        } else {
            // SAFETY: values points to n readable pointers per caller contract.
            unsafe { std::slice::from_raw_parts(values, n) }
        };
        if let Some(index) = values.iter().position(|v| v.is_null()) {
            debug!(index, "strand_list_from_array: null entry");
            return StrandStatus::InvalidArgument as i32;
        }
        match DynArray::from_sequence(values.iter().filter_map(|&v| OpaqueRef::new(v))) {
            Ok(list) => publish(list, list_out),
            Err(e) => StrandStatus::from(&e) as i32,
        }
    })
}

/// Append `value` to the end of the list.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_append(list: u64, value: *mut c_void) -> i32 {
    ffi_guard!({
        let value = match OpaqueRef::new(value) {
            Some(v) => v,
            None => {
                debug!("strand_list_append: null value");
                return StrandStatus::InvalidArgument as i32;
            }
        };
        let mut lists = ffi_lock!(LISTS);
        match lists.get_mut(list) {
            Some(array) => StrandStatus::code(array.push(value)),
            None => StrandStatus::InvalidHandle as i32,
        }
    })
}

/// Insert `value` at `index`, shifting later elements right.
///
/// `index` may equal the current length. Larger indices return
/// `INDEX_OUT_OF_BOUNDS` and leave the list unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_insert(list: u64, index: usize, value: *mut c_void) -> i32 {
    ffi_guard!({
        let value = match OpaqueRef::new(value) {
            Some(v) => v,
            None => {
                debug!("strand_list_insert: null value");
                return StrandStatus::InvalidArgument as i32;
            }
        };
        let mut lists = ffi_lock!(LISTS);
        match lists.get_mut(list) {
            Some(array) => StrandStatus::code(array.insert(index, value)),
            None => StrandStatus::InvalidHandle as i32,
        }
    })
}

/// Remove the last element and write it to `value_out`.
///
/// Returns `EMPTY` (and leaves `value_out` untouched) when the list has no
/// elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_pop(list: u64, value_out: *mut *mut c_void) -> i32 {
    ffi_guard!({
        if value_out.is_null() {
            debug!("strand_list_pop: null value_out");
            return StrandStatus::InvalidArgument as i32;
        }
        let mut lists = ffi_lock!(LISTS);
        let array = match lists.get_mut(list) {
            Some(a) => a,
            None => return StrandStatus::InvalidHandle as i32,
        };
        match array.pop() {
            Ok(value) => {
                // SAFETY: value_out is non-null and valid per caller contract.
                unsafe { *value_out = value.as_ptr() };
                StrandStatus::Ok as i32
            }
            Err(e) => StrandStatus::from(&e) as i32,
        }
    })
}

/// Write the number of elements to `len_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_length(list: u64, len_out: *mut usize) -> i32 {
    ffi_guard!({
        if len_out.is_null() {
            return StrandStatus::InvalidArgument as i32;
        }
        let lists = ffi_lock!(LISTS);
        match lists.get(list) {
            Some(array) => {
                // SAFETY: len_out is non-null and valid per caller contract.
                unsafe { *len_out = array.len() };
                StrandStatus::Ok as i32
            }
            None => StrandStatus::InvalidHandle as i32,
        }
    })
}

/// Write the number of reserved slots to `capacity_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_capacity(list: u64, capacity_out: *mut usize) -> i32 {
    ffi_guard!({
        if capacity_out.is_null() {
            return StrandStatus::InvalidArgument as i32;
        }
        let lists = ffi_lock!(LISTS);
        match lists.get(list) {
            Some(array) => {
                // SAFETY: capacity_out is non-null and valid per caller contract.
                unsafe { *capacity_out = array.capacity() };
                StrandStatus::Ok as i32
            }
            None => StrandStatus::InvalidHandle as i32,
        }
    })
}

/// Copy the list into a new `NULL`-terminated array of pointers.
///
/// On success `*array_out` owns `length + 1` slots. Release it with
/// [`strand_array_free`]; it stays valid after the list is modified or
/// destroyed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_to_array(list: u64, array_out: *mut *mut *mut c_void) -> i32 {
    ffi_guard!({
        if array_out.is_null() {
            debug!("strand_list_to_array: null array_out");
            return StrandStatus::InvalidArgument as i32;
        }
        let copy = {
            let lists = ffi_lock!(LISTS);
            let array = match lists.get(list) {
                Some(a) => a,
                None => return StrandStatus::InvalidHandle as i32,
            };
            match array.to_array() {
                Ok(copy) => copy,
                Err(e) => return StrandStatus::from(&e) as i32,
            }
        };
        match export_terminated(&copy) {
            Some(raw) => {
                // SAFETY: array_out is non-null and valid per caller contract.
                unsafe { *array_out = raw };
                StrandStatus::Ok as i32
            }
            None => {
                debug!(len = copy.len(), "strand_list_to_array: export allocation failed");
                StrandStatus::AllocationFailed as i32
            }
        }
    })
}

/// Release an array returned by [`strand_list_to_array`].
///
/// `NULL` is a no-op. The pointers inside the array are not touched.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_array_free(array: *mut *mut c_void) -> i32 {
    ffi_guard!({
        if !array.is_null() {
            // SAFETY: array came from strand_list_to_array per caller contract.
            unsafe { release_exported(array) };
        }
        StrandStatus::Ok as i32
    })
}

/// Destroy a list, releasing its buffer but none of the stored pointers.
///
/// The null handle `0` is never issued, so destroying it is a no-op that
/// returns `OK`. A stale or unknown handle returns `INVALID_HANDLE` and
/// changes nothing, so destroying twice is safe.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn strand_list_destroy(list: u64) -> i32 {
    ffi_guard!({
        if list == NULL_HANDLE {
            return StrandStatus::Ok as i32;
        }
        match ffi_lock!(LISTS).remove(list) {
            Some(_) => StrandStatus::Ok as i32,
            None => StrandStatus::InvalidHandle as i32,
        }
    })
}
