//! Generation-checked handle table for arrays owned across the C boundary.
//!
//! A handle packs a slot index (upper 32 bits) and that slot's generation
//! (lower 32 bits). Removing a value bumps the generation, so a handle kept
//! after destruction no longer matches and every lookup returns `None`.
//! Destroying twice is therefore a harmless miss rather than a double free.
//!
//! Generations start at 1 and a slot is retired before its generation can
//! wrap to 0, so the raw value `0` is never issued. C callers can use it as
//! a null handle.

use std::mem;

/// Raw handle value that never names a live entry.
pub(crate) const NULL_HANDLE: u64 = 0;

const FIRST_GENERATION: u32 = 1;

/// Decoded form of a raw `u64` handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Handle {
    slot: u32,
    generation: u32,
}

impl Handle {
    fn from_raw(raw: u64) -> Self {
        Self {
            slot: (raw >> 32) as u32,
            generation: raw as u32,
        }
    }

    fn into_raw(self) -> u64 {
        (u64::from(self.slot) << 32) | u64::from(self.generation)
    }
}

enum Entry<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32 },
}

impl<T> Entry<T> {
    fn generation(&self) -> u32 {
        match self {
            Self::Occupied { generation, .. } | Self::Vacant { generation } => *generation,
        }
    }
}

/// Maps `u64` handles to owned values, recycling vacated slots.
pub(crate) struct HandleTable<T> {
    entries: Vec<Entry<T>>,
    vacant: Vec<u32>,
}

impl<T> HandleTable<T> {
    /// Create an empty table. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Store `value` and return its handle.
    pub fn insert(&mut self, value: T) -> u64 {
        if let Some(slot) = self.vacant.pop() {
            let entry = &mut self.entries[slot as usize];
            let generation = entry.generation();
            *entry = Entry::Occupied { generation, value };
            return Handle { slot, generation }.into_raw();
        }
        let slot = self.entries.len() as u32;
        self.entries.push(Entry::Occupied {
            generation: FIRST_GENERATION,
            value,
        });
        Handle {
            slot,
            generation: FIRST_GENERATION,
        }
        .into_raw()
    }

    /// Shared access to the value behind `raw`, if the handle is live.
    pub fn get(&self, raw: u64) -> Option<&T> {
        let handle = Handle::from_raw(raw);
        match self.entries.get(handle.slot as usize)? {
            Entry::Occupied { generation, value } if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Exclusive access to the value behind `raw`, if the handle is live.
    pub fn get_mut(&mut self, raw: u64) -> Option<&mut T> {
        let handle = Handle::from_raw(raw);
        match self.entries.get_mut(handle.slot as usize)? {
            Entry::Occupied { generation, value } if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Take the value behind `raw` out of the table.
    ///
    /// The slot's generation is bumped. A slot whose generation wraps back
    /// to zero is retired instead of recycled, so no handle is reissued and
    /// generation 0 is never live.
    pub fn remove(&mut self, raw: u64) -> Option<T> {
        let handle = Handle::from_raw(raw);
        let entry = self.entries.get_mut(handle.slot as usize)?;
        match &*entry {
            Entry::Occupied { generation, .. } if *generation == handle.generation => {}
            _ => return None,
        }
        let next = handle.generation.wrapping_add(1);
        let Entry::Occupied { value, .. } = mem::replace(entry, Entry::Vacant { generation: next })
        else {
            return None;
        };
        if next != 0 {
            self.vacant.push(handle.slot);
        }
        Some(value)
    }

    /// Number of live values.
    #[cfg(test)]
    pub fn live(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Occupied { .. }))
            .count()
    }
}
