//! Element fixtures.
//!
//! - [`words`]: distinct owned strings in a predictable order.
//! - [`Referent`]: caller-owned data to store by reference.
//! - [`DropLedger`] / [`Tracked`]: values that record when they are dropped.

use std::cell::Cell;
use std::rc::Rc;

/// `n` distinct words: `"w0"`, `"w1"`, ...
pub fn words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("w{i}")).collect()
}

/// Caller-owned data that a container should only ever point at.
#[derive(Debug, PartialEq, Eq)]
pub struct Referent {
    pub id: u32,
    pub payload: String,
}

/// `n` referents with ids `0..n`.
pub fn referents(n: u32) -> Vec<Referent> {
    (0..n)
        .map(|id| Referent {
            id,
            payload: format!("payload-{id}"),
        })
        .collect()
}

/// Counts drops of the [`Tracked`] values it hands out.
#[derive(Clone, Debug, Default)]
pub struct DropLedger {
    dropped: Rc<Cell<usize>>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new tracked value carrying `id`.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            ledger: Rc::clone(&self.dropped),
        }
    }

    /// How many tracked values have been dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }
}

/// A value that bumps its [`DropLedger`] when dropped.
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    ledger: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.set(self.ledger.get() + 1);
    }
}
