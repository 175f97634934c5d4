//! End-to-end behaviour of `DynArray` holding caller-owned handles.

use std::rc::Rc;

use strand::{DynArray, DynArrayConfig, DynArrayError};
use strand_test_utils::{init_test_tracing, referents, words, DropLedger, Referent, Tracked};

#[test]
fn insert_then_pop_scenario() {
    init_test_tracing();
    let mut list = DynArray::new();
    list.push("a").unwrap();
    list.push("b").unwrap();
    list.insert(1, "x").unwrap();

    let copy = list.to_array().unwrap();
    assert_eq!(copy.as_slice(), &[Some("a"), Some("x"), Some("b"), None]);

    assert_eq!(list.pop(), Ok("b"));
    assert_eq!(list.len(), 2);
}

#[test]
fn from_sequence_matches_manual_pushes() {
    let names = words(3);
    let built = DynArray::from_sequence(names.iter().map(String::as_str)).unwrap();

    let mut manual = DynArray::new();
    for name in &names {
        manual.push(name.as_str()).unwrap();
    }

    assert_eq!(built.to_array().unwrap(), manual.to_array().unwrap());
}

#[test]
fn borrowed_referents_are_returned_by_identity() {
    let owned = referents(20);
    let list = DynArray::from_sequence(owned.iter()).unwrap();

    let copy = list.to_array().unwrap();
    for (stored, original) in copy.iter().zip(&owned) {
        assert!(std::ptr::eq(*stored, original));
    }
    assert_eq!(copy.len(), 20);
}

#[test]
fn dropping_array_of_references_leaves_referents_alone() {
    let ledger = DropLedger::new();
    let owned: Vec<_> = (0..10).map(|id| ledger.track(id)).collect();

    let list = DynArray::from_sequence(owned.iter()).unwrap();
    drop(list);

    assert_eq!(ledger.dropped(), 0);
    assert_eq!(owned.len(), 10);
    drop(owned);
    assert_eq!(ledger.dropped(), 10);
}

#[test]
fn shared_handles_keep_their_own_counts() {
    let data = Rc::new(Referent {
        id: 7,
        payload: "shared".into(),
    });
    let mut list = DynArray::new();
    for _ in 0..12 {
        list.push(Rc::clone(&data)).unwrap();
    }
    assert_eq!(Rc::strong_count(&data), 13);

    let popped = list.pop().unwrap();
    assert!(Rc::ptr_eq(&popped, &data));
    drop(popped);
    drop(list);
    assert_eq!(Rc::strong_count(&data), 1);
}

#[test]
fn dropping_absent_array_is_noop() {
    let absent: Option<DynArray<&str>> = None;
    drop(absent);
}

#[test]
fn pops_come_back_in_reverse() {
    let names = words(25);
    let mut list = DynArray::from_sequence(names.iter()).unwrap();
    assert_eq!(list.capacity(), 32);

    for expected in names.iter().rev() {
        let before = list.len();
        assert_eq!(list.pop(), Ok(expected));
        assert_eq!(list.len(), before - 1);
    }
    assert_eq!(list.pop(), Err(DynArrayError::Empty));
    assert_eq!(list.capacity(), 32);
}

#[test]
fn failed_growth_preserves_terminated_view() {
    init_test_tracing();
    let extra = String::from("overflow");
    let names = words(4);
    let config = DynArrayConfig::new(4).with_max_capacity(4);
    let mut list = DynArray::from_sequence_with_config(config, names.iter()).unwrap();
    let before = list.to_array().unwrap();

    assert!(matches!(
        list.push(&extra),
        Err(DynArrayError::AllocationFailed {
            requested: 8,
            capacity: 4
        })
    ));
    assert_eq!(list.to_array().unwrap(), before);
}

#[test]
fn oversized_from_sequence_surfaces_allocation_error() {
    let config = DynArrayConfig::new(1).with_max_capacity(16);
    let result = DynArray::from_sequence_with_config(config, 0..17u64);
    assert!(matches!(
        result,
        Err(DynArrayError::AllocationFailed { capacity: 16, .. })
    ));
}

#[test]
fn failed_from_sequence_releases_partial_array() {
    let ledger = DropLedger::new();
    let values: Vec<Tracked> = (0..5).map(|id| ledger.track(id)).collect();
    let config = DynArrayConfig::new(1).with_max_capacity(2);

    let result = DynArray::from_sequence_with_config(config, values);
    assert!(matches!(
        result,
        Err(DynArrayError::AllocationFailed { capacity: 2, .. })
    ));
    assert_eq!(ledger.dropped(), 5);
}
