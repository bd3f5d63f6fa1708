//! Shared test utilities for integration tests.

#![allow(dead_code, unused_imports)]

pub use warden::testing::{assigned, optional_seq, rendered, slot, ELEMENT_IS_NULL};

use warden::{CoercionOutcome, Kind};

/// Assert a coercion failed with the given source and target kinds.
pub fn assert_failed_with<T: std::fmt::Debug>(
    outcome: &CoercionOutcome<T>,
    source: Kind,
    target: Kind,
) {
    let failure = outcome
        .failure()
        .unwrap_or_else(|| panic!("expected failure, got {:?}", outcome));
    assert_eq!(failure.source.kind(), source, "source kind");
    assert_eq!(failure.target.kind(), target, "target kind");
}
