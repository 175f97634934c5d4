//! Terminator-delimited copies of array contents.
//!
//! A [`Terminated`] is a contiguous run of `Some(value)` slots followed by a
//! single `None`. Consumers that do not track a length walk the slots until
//! they reach the terminator, the same way a C caller walks a
//! `NULL`-terminated pointer array.

use std::iter::FusedIterator;
use std::slice;

/// An owned, terminator-delimited copy produced by
/// [`DynArray::to_array`](crate::DynArray::to_array).
///
/// Every slot before the last is `Some`; the last slot is always `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terminated<T> {
    slots: Vec<Option<T>>,
}

impl<T> Terminated<T> {
    /// Wrap slots that already end in exactly one terminator.
    pub(crate) fn from_slots(slots: Vec<Option<T>>) -> Self {
        debug_assert!(matches!(slots.last(), Some(None)));
        debug_assert!(slots[..slots.len() - 1].iter().all(Option::is_some));
        Self { slots }
    }

    /// All slots, terminator included.
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Iterate the values, stopping at the terminator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    /// Number of values before the terminator.
    ///
    /// Found by scanning, like a length-oblivious consumer would.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the terminator is the first slot.
    pub fn is_empty(&self) -> bool {
        matches!(self.slots.first(), Some(None))
    }

    /// Value at `index`, or `None` at or past the terminator.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Drop the terminator and return the values.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_iter().map_while(|slot| slot).collect()
    }
}

impl<'a, T> IntoIterator for &'a Terminated<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`Terminated`] copy.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.inner.next()?.as_ref();
        if value.is_none() {
            // Park on the end so later calls keep returning None.
            self.inner = Default::default();
        }
        value
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Terminated<&'static str> {
        Terminated::from_slots(vec![Some("a"), Some("b"), Some("c"), None])
    }

    #[test]
    fn iter_stops_at_terminator() {
        let copy = abc();
        let values: Vec<_> = copy.iter().copied().collect();
        assert_eq!(values, ["a", "b", "c"]);
    }

    #[test]
    fn len_excludes_terminator() {
        let copy = abc();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.as_slice().len(), 4);
        assert_eq!(copy.as_slice()[3], None);
    }

    #[test]
    fn empty_copy_is_a_lone_terminator() {
        let copy: Terminated<u8> = Terminated::from_slots(vec![None]);
        assert!(copy.is_empty());
        assert_eq!(copy.len(), 0);
        assert_eq!(copy.iter().next(), None);
    }

    #[test]
    fn get_past_terminator_is_none() {
        let copy = abc();
        assert_eq!(copy.get(1), Some(&"b"));
        assert_eq!(copy.get(3), None);
        assert_eq!(copy.get(99), None);
    }

    #[test]
    fn into_vec_drops_terminator() {
        assert_eq!(abc().into_vec(), vec!["a", "b", "c"]);
    }
}
