//! Optional slot reads: fallback, forced, and the empty-but-present case.

use super::common::slot;
use warden::{GuardError, Slot};

#[test]
fn absent_slot_reads_as_fallback() {
    let s: Slot<String> = slot(None);
    let fallback = "String is null".to_string();
    assert_eq!(s.read(&fallback), "String is null");
    assert_eq!(
        s.force_read(),
        Err(GuardError::AbsentValue { name: "slot" })
    );
}

#[test]
fn present_values_are_returned_as_is() {
    for value in ["", "0", "text"] {
        let s = slot(Some(value.to_string()));
        assert_eq!(s.read(&"fallback".to_string()), value);
        assert_eq!(s.read_or("fallback".to_string()), value);
    }
}

#[test]
fn zero_and_empty_collections_are_present() {
    assert_eq!(slot(Some(0)).read_or(42), 0);
    let empty: Slot<Vec<u8>> = slot(Some(vec![]));
    assert!(empty.is_present());
    assert_eq!(empty.map_or(usize::MAX, Vec::len), 0);
}

#[test]
fn repeated_reads_are_stable() {
    let s = slot(Some(7));
    let first = *s.read(&0);
    for _ in 0..10 {
        assert_eq!(*s.read(&0), first);
    }
    assert!(s.is_present());
}

#[test]
fn clear_returns_previous_value() {
    let mut s = Slot::present("n", 1);
    assert_eq!(s.clear(), Some(1));
    assert_eq!(s.clear(), None);
    assert_eq!(s.as_option(), None);
    assert_eq!(s.name(), "n");
}
