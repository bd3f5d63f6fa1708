//! Scoped iteration: order, absent delivery, and no occlusion of outer names.

use super::common::{optional_seq, rendered, ELEMENT_IS_NULL};
use warden::{for_each_safe, Scope, ScopedIter, DEFAULT_BINDING};

#[test]
fn scenario_one_absent_three() {
    let seq = [Some(1), None, Some(3)];
    assert_eq!(
        rendered(&seq, &Scope::new(), &0),
        vec!["1".to_string(), ELEMENT_IS_NULL.to_string(), "3".to_string()]
    );
}

#[test]
fn body_reads_outer_value_with_colliding_name() {
    let something: Option<i32> = None;
    let number = 5;
    let scope = Scope::new()
        .with("something", &something)
        .with("it", &number);
    let seq = optional_seq(&[1, 2, 3, 4], &[true, true, true, true]);

    let mut calls = 0;
    for_each_safe(&seq, &scope, &0, |item, outer| {
        calls += 1;
        assert!(!outer.contains(item.name()));
        assert_eq!(outer.lookup::<i32>("it"), Some(&5));
        assert_eq!(outer.lookup::<Option<i32>>("something"), Some(&None));
    });
    assert_eq!(calls, 4);
}

#[test]
fn default_name_when_free() {
    let seq = [Some('a')];
    let iter = ScopedIter::new(&seq, &Scope::new(), &'?');
    assert_eq!(iter.binding_name(), DEFAULT_BINDING);
}

#[test]
fn named_binding_avoids_collision() {
    let list_item = 0u8;
    let scope = Scope::new().with("listItem", &list_item);
    let seq = [Some(1u8)];
    let iter = ScopedIter::named(&seq, &scope, "listItem", &0);
    assert_eq!(iter.binding_name(), "listItem_1");
    let names: Vec<String> = iter.map(|b| b.name().to_string()).collect();
    assert_eq!(names, vec!["listItem_1"]);
}

#[test]
fn absent_elements_are_not_unwrapped() {
    let seq: Vec<Option<String>> = vec![None, Some(String::new())];
    let fallback = "fallback".to_string();
    let bindings: Vec<_> = ScopedIter::new(&seq, &Scope::new(), &fallback).collect();

    assert!(bindings[0].is_absent());
    assert_eq!(bindings[0].element(), None);
    assert_eq!(bindings[0].resolved(), "fallback");

    // Present-but-empty is not absent.
    assert!(!bindings[1].is_absent());
    assert_eq!(bindings[1].resolved(), "");
}

#[test]
fn empty_sequence_never_calls_body() {
    let seq: [Option<i32>; 0] = [];
    let mut called = false;
    for_each_safe(&seq, &Scope::new(), &0, |_, _| called = true);
    assert!(!called);
}

#[test]
fn redeclaring_replaces_outer_value() {
    let (a, b) = (1i32, 2i32);
    let mut scope = Scope::new();
    scope.declare("x", &a);
    scope.declare("x", &b);
    assert_eq!(scope.len(), 1);
    assert_eq!(scope.lookup::<i32>("x"), Some(&2));
    assert!(!scope.is_empty());
}
