//! Benchmark profiles for strand arrays.
//!
//! - [`filled`]: an array of `n` sequential indices, grown from the default
//!   initial capacity.
//! - [`insert_positions`]: a deterministic spread of insert indices.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strand::DynArray;

/// Element counts used across the array benchmarks.
pub const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Build an array holding `0..n`, growing by doubling from 8 slots.
pub fn filled(n: usize) -> DynArray<usize> {
    DynArray::from_sequence(0..n).expect("benchmark arrays fit in memory")
}

/// `count` insert positions spread over an array that starts at `start`
/// elements and grows by one per insert.
///
/// Uses a fixed multiplicative step so runs are reproducible.
pub fn insert_positions(start: usize, count: usize) -> Vec<usize> {
    let mut pos = 0usize;
    (0..count)
        .map(|i| {
            let len = start + i;
            pos = (pos + 7_919) % (len + 1);
            pos
        })
        .collect()
}
