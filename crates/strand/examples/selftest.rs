//! strand self-test: walks the whole `DynArray` surface once.
//!
//! Demonstrates:
//!   1. Appending string handles and checking their order
//!   2. Reading a terminated copy until its terminator
//!   3. Inserting in the middle and popping from the end
//!   4. Building a second array from a sequence and appending it
//!
//! Run with:
//!   cargo run -p strand --example selftest

use strand::{DynArray, DynArrayError, Terminated};

// ─── Helpers ────────────────────────────────────────────────────

/// Print a terminated copy by walking it up to the terminator.
fn print_terminated(label: &str, copy: &Terminated<&str>) {
    let joined: String = copy.iter().copied().collect();
    println!("{label}{joined}");
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), DynArrayError> {
    let mut first = DynArray::new();
    assert_eq!(first.len(), 0);

    first.push("alpha ")?;
    first.push("beta ")?;
    first.push("gamma ")?;
    assert_eq!(first.len(), 3);

    let copy = first.to_array()?;
    assert_eq!(copy.get(0), Some(&"alpha "));
    assert_eq!(copy.get(1), Some(&"beta "));
    assert_eq!(copy.get(2), Some(&"gamma "));
    assert_eq!(copy.as_slice()[3], None);

    first.insert(1, "inserted ")?;
    assert_eq!(first.len(), 4);
    assert_eq!(first.to_array()?.get(1), Some(&"inserted "));

    let popped = first.pop()?;
    assert_eq!(popped, "gamma ");
    assert_eq!(first.len(), 3);

    let second = DynArray::from_sequence(["delta ", "epsilon ", "zeta"])?;
    assert_eq!(second.len(), 3);

    for &word in &second {
        first.push(word)?;
    }
    assert_eq!(first.len(), 6);

    print_terminated("Final list: ", &first.to_array()?);

    drop(first);
    drop(second);

    println!("All list tests passed successfully!");
    Ok(())
}
