// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scoped iteration.
//!
//! Arbitrary outer names (including ones that collide with the default
//! binding) and arbitrary optional sequences. Every element must be visited
//! once in order, and every outer name must still resolve to its outer value.

#![no_main]

use libfuzzer_sys::fuzz_target;
use warden::{for_each_safe, Scope, ScopedIter};

fuzz_target!(|input: (Vec<String>, Vec<Option<u32>>, String)| {
    let (names, sequence, base) = input;

    // Outer value for each name is its position.
    let values: Vec<usize> = (0..names.len()).collect();
    let mut scope = Scope::new();
    for (name, value) in names.iter().zip(&values) {
        scope.declare(name, value);
    }

    let mut visited = 0usize;
    for_each_safe(&sequence, &scope, &0, |item, outer| {
        assert_eq!(item.index(), visited);
        assert_eq!(item.element(), sequence[visited].as_ref());
        assert!(!outer.contains(item.name()));
        visited += 1;
    });
    assert_eq!(visited, sequence.len());

    // Redeclared names keep the last value; all of them still resolve.
    for name in &names {
        let last = names.iter().rposition(|n| n == name).unwrap_or_default();
        assert_eq!(scope.lookup::<usize>(name), Some(&values[last]));
    }

    let iter = ScopedIter::named(&sequence, &scope, &base, &0);
    assert!(!scope.contains(iter.binding_name()));
    assert_eq!(iter.count(), sequence.len());
});
