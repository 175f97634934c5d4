//! The growable array itself.
//!
//! [`DynArray`] keeps a logical slot reservation on top of a `Vec<T>`.
//! The reservation starts at the configured initial capacity and doubles
//! whenever a write finds it full. Growth goes through
//! [`Vec::try_reserve_exact`], which leaves the vector untouched when the
//! allocator refuses, so a failed write never changes the array.

use std::fmt;
use std::ops::Index;
use std::slice;

use tracing::{debug, trace};

use crate::config::DynArrayConfig;
use crate::error::DynArrayError;
use crate::terminated::Terminated;

/// A resizable, ordered sequence of element handles.
///
/// The array never inspects its elements. Storing `&U`, `Rc<U>` or a raw
/// handle type keeps the referenced data owned by the caller; dropping the
/// array releases only its own buffer.
pub struct DynArray<T> {
    /// Backing storage. Its allocation always covers `capacity` slots.
    items: Vec<T>,
    /// Logical reservation in slots. Only grows.
    capacity: usize,
    max_capacity: Option<usize>,
}

impl<T> DynArray<T> {
    /// Slots reserved by [`new`](Self::new) and [`try_new`](Self::try_new).
    pub const INITIAL_CAPACITY: usize = DynArrayConfig::DEFAULT_INITIAL_CAPACITY;

    /// Create an empty array with [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY)
    /// slots.
    ///
    /// # Panics
    ///
    /// Panics if the initial buffer cannot be allocated. Use
    /// [`try_new`](Self::try_new) to get an error instead.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(array) => array,
            Err(e) => panic!("DynArray::new: {e}"),
        }
    }

    /// Create an empty array, reporting allocation failure as an error.
    pub fn try_new() -> Result<Self, DynArrayError> {
        Self::with_config(DynArrayConfig::default())
    }

    /// Create an empty array from a validated config.
    pub fn with_config(config: DynArrayConfig) -> Result<Self, DynArrayError> {
        config.validate()?;
        let mut items = Vec::new();
        items
            .try_reserve_exact(config.initial_capacity)
            .map_err(|_| {
                debug!(
                    requested = config.initial_capacity,
                    "initial reservation failed"
                );
                DynArrayError::AllocationFailed {
                    requested: config.initial_capacity,
                    capacity: 0,
                }
            })?;
        Ok(Self {
            items,
            capacity: config.initial_capacity,
            max_capacity: config.max_capacity,
        })
    }

    /// Build an array holding `values` in order.
    ///
    /// Equivalent to [`try_new`](Self::try_new) followed by a
    /// [`push`](Self::push) per value. On failure the partially built array
    /// is dropped before the error is returned.
    pub fn from_sequence<I>(values: I) -> Result<Self, DynArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_sequence_with_config(DynArrayConfig::default(), values)
    }

    /// [`from_sequence`](Self::from_sequence) with an explicit config.
    pub fn from_sequence_with_config<I>(
        config: DynArrayConfig,
        values: I,
    ) -> Result<Self, DynArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::with_config(config)?;
        array.try_extend(values)?;
        Ok(array)
    }

    /// Append `value` at the end, doubling the reservation first if full.
    ///
    /// On error the array is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), DynArrayError> {
        self.reserve_one()?;
        self.items.push(value);
        Ok(())
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len()` behaves like [`push`](Self::push). An index past the
    /// end is rejected before any growth is attempted.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        let len = self.items.len();
        if index > len {
            return Err(DynArrayError::IndexOutOfBounds { index, len });
        }
        self.reserve_one()?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// Returns [`DynArrayError::Empty`] when there is nothing to remove, so
    /// an empty array is never confused with a stored null-like value.
    /// The reservation is kept.
    pub fn pop(&mut self) -> Result<T, DynArrayError> {
        self.items.pop().ok_or(DynArrayError::Empty)
    }

    /// Append every value from `values` in order.
    ///
    /// Each value carries the same guarantee as [`push`](Self::push): on
    /// failure the values already appended stay and nothing else changes.
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), DynArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Remove every element, keeping the reservation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of reserved slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The configured growth ceiling, if any.
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The elements as a slice, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copy the elements into a new terminator-delimited buffer.
    ///
    /// The copy holds `len() + 1` slots: each element wrapped in `Some`,
    /// then one `None`. It is independent of `self`; a failed copy leaves
    /// `self` untouched.
    pub fn to_array(&self) -> Result<Terminated<T>, DynArrayError>
    where
        T: Clone,
    {
        let requested = self.items.len() + 1;
        let mut slots = Vec::new();
        slots.try_reserve_exact(requested).map_err(|_| {
            debug!(requested, "terminated copy allocation failed");
            DynArrayError::AllocationFailed {
                requested,
                capacity: self.capacity,
            }
        })?;
        slots.extend(self.items.iter().cloned().map(Some));
        slots.push(None);
        Ok(Terminated::from_slots(slots))
    }

    /// Make room for one more element.
    fn reserve_one(&mut self) -> Result<(), DynArrayError> {
        if self.items.len() < self.capacity {
            return Ok(());
        }
        let new_capacity = self.next_capacity()?;
        let additional = new_capacity - self.items.len();
        if self.items.try_reserve_exact(additional).is_err() {
            debug!(
                capacity = self.capacity,
                requested = new_capacity,
                "growth refused by allocator"
            );
            return Err(DynArrayError::AllocationFailed {
                requested: new_capacity,
                capacity: self.capacity,
            });
        }
        trace!(from = self.capacity, to = new_capacity, "array grew");
        self.capacity = new_capacity;
        Ok(())
    }

    /// Doubled reservation, clamped to `max_capacity` while there is room.
    fn next_capacity(&self) -> Result<usize, DynArrayError> {
        let doubled = self.capacity.checked_mul(2);
        match (doubled, self.max_capacity) {
            (Some(doubled), None) => Ok(doubled),
            (Some(doubled), Some(max)) if doubled <= max => Ok(doubled),
            (_, Some(max)) if self.capacity < max => Ok(max),
            (doubled, _) => {
                let requested = doubled.unwrap_or(usize::MAX);
                debug!(
                    capacity = self.capacity,
                    requested, "growth would exceed capacity limit"
                );
                Err(DynArrayError::AllocationFailed {
                    requested,
                    capacity: self.capacity,
                })
            }
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        // Keep the allocation in step with the logical reservation.
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
            max_capacity: self.max_capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> Extend<T> for DynArray<T> {
    /// # Panics
    ///
    /// Panics if growth fails. Use [`DynArray::try_extend`] to handle it.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.try_extend(iter) {
            panic!("DynArray::extend: {e}");
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        match Self::from_sequence(iter) {
            Ok(array) => array,
            Err(e) => panic!("DynArray::from_iter: {e}"),
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
