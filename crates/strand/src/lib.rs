//! Growable ordered sequences of caller-owned element handles.
//!
//! [`DynArray`] is a contiguous, resizable array intended as a building
//! block for higher-level structures. It stores element handles (borrowed
//! references, shared pointers, opaque ids) without interpreting them, and
//! never takes responsibility for the data they point at.
//!
//! # Growth
//!
//! A new array reserves [`DynArray::INITIAL_CAPACITY`] slots. When a write
//! finds every slot in use the reservation doubles:
//!
//! ```text
//! 8 → 16 → 32 → 64 → ...
//! ```
//!
//! Growth is fallible. A refused reservation surfaces as
//! [`DynArrayError::AllocationFailed`] and the array keeps its previous
//! contents and capacity. The reservation never shrinks, not even on
//! [`DynArray::pop`].
//!
//! # Terminated export
//!
//! [`DynArray::to_array`] produces a [`Terminated`] copy: every element
//! wrapped in `Some`, followed by one `None`. Consumers that do not carry a
//! length walk the copy until the terminator. The `strand-ffi` crate maps
//! the same layout onto a `NULL`-terminated `void**` for C callers.
//!
//! # Example
//!
//! ```rust
//! use strand::{DynArray, DynArrayError};
//!
//! let mut list = DynArray::new();
//! list.push("a")?;
//! list.push("b")?;
//! list.insert(1, "x")?;
//!
//! let copy = list.to_array()?;
//! assert_eq!(copy.as_slice(), &[Some("a"), Some("x"), Some("b"), None]);
//!
//! assert_eq!(list.pop()?, "b");
//! assert_eq!(list.len(), 2);
//! # Ok::<(), DynArrayError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod terminated;

pub use array::DynArray;
pub use config::{ConfigError, DynArrayConfig};
pub use error::DynArrayError;
pub use terminated::Terminated;
