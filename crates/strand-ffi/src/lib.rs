//! C ABI for strand arrays of opaque pointers.
//!
//! Lists live in a process-wide handle table and are addressed from C by
//! `u64` handles. Every function returns an `i32` [`StrandStatus`]; output
//! values go through caller-provided pointers. Stored values are `void*`
//! the library never dereferences. `NULL` cannot be stored because it
//! terminates the arrays produced by `strand_list_to_array`. Handle `0` is
//! never issued and destroying it is a no-op.
//!
//! ```c
//! uint64_t list = 0;
//! strand_list_create(&list);
//! strand_list_append(list, "a");
//! strand_list_append(list, "b");
//! strand_list_insert(list, 1, "x");
//!
//! void **items;
//! strand_list_to_array(list, &items);
//! for (size_t i = 0; items[i]; i++) puts(items[i]);
//! strand_array_free(items);
//!
//! strand_list_destroy(list);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, turning a caught panic into `StrandStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(code) => code,
            Err(_) => {
                tracing::warn!("panic caught at FFI boundary");
                $crate::status::StrandStatus::Panicked as i32
            }
        }
    };
}

/// Lock a mutex inside `ffi_guard!`, returning `InternalError` if poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::StrandStatus::InternalError as i32,
        }
    };
}

mod handle;
pub mod list;
pub mod status;
mod types;

pub use status::StrandStatus;
