//! Test utilities for strand development.
//!
//! Provides element fixtures for exercising [`DynArray`]-style containers
//! without caring about element contents, a drop ledger for checking that
//! containers release only what they own, and a one-shot tracing
//! subscriber for test output.
//!
//! [`DynArray`]: https://docs.rs/strand

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod logging;

pub use fixtures::{referents, words, DropLedger, Referent, Tracked};
pub use logging::init_test_tracing;
