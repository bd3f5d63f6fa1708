//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::guard::{for_each_safe, Deferred, Scope, Slot};

/// Fallback used by the nullable iteration examples.
pub const ELEMENT_IS_NULL: &str = "Element is null";

/// Build an optional sequence from a mask: `None` entries stay absent.
pub fn optional_seq<T: Clone>(values: &[T], present: &[bool]) -> Vec<Option<T>> {
    values
        .iter()
        .zip(present.iter().chain(std::iter::repeat(&true)))
        .map(|(v, keep)| keep.then(|| v.clone()))
        .collect()
}

/// A deferred record that has been assigned `values` in order.
pub fn assigned<T>(name: &'static str, values: impl IntoIterator<Item = T>) -> Deferred<T> {
    let mut record = Deferred::new(name);
    for value in values {
        record.assign(value);
    }
    record
}

/// A slot from an `Option`, named `"slot"`.
pub fn slot<T>(value: Option<T>) -> Slot<T> {
    Slot::from_option("slot", value)
}

/// What `for_each_safe` shows for each element, with `Element is null` for
/// absent ones. `fallback` only feeds `Binding::resolved`.
pub fn rendered<T: ToString>(
    sequence: &[Option<T>],
    scope: &Scope<'_>,
    fallback: &T,
) -> Vec<String> {
    let mut out = Vec::with_capacity(sequence.len());
    for_each_safe(sequence, scope, fallback, |item, _| {
        out.push(item.map_or(ELEMENT_IS_NULL.to_string(), T::to_string));
    });
    out
}
