//! Checked coercion: exact tag matching, failures for everything else.

use super::common::assert_failed_with;
use std::any::Any;
use warden::{force_coerce, try_coerce, try_coerce_ref, Dynamic, GuardError, Kind, TypeTag};

#[test]
fn scenario_text_as_whole_number() {
    let outcome = try_coerce::<i32>(Dynamic::new("Kotlin".to_string()));
    assert_failed_with(&outcome, Kind::Text, Kind::WholeNumber);

    match force_coerce::<i32>(Dynamic::new("Kotlin".to_string())) {
        Err(GuardError::TypeCoercion { source, target }) => {
            assert_eq!(source, TypeTag::of::<String>());
            assert_eq!(target, TypeTag::of::<i32>());
        }
        other => panic!("expected TypeCoercion, got {:?}", other),
    }
}

#[test]
fn success_returns_the_value_unchanged() {
    let outcome = try_coerce::<Vec<u8>>(Dynamic::new(vec![1u8, 2, 3]));
    assert_eq!(outcome.ok(), Some(vec![1, 2, 3]));
    assert_eq!(force_coerce::<bool>(Dynamic::new(true)), Ok(true));
}

#[test]
fn related_numeric_types_do_not_match() {
    assert_failed_with(
        &try_coerce::<f64>(Dynamic::new(1i32)),
        Kind::WholeNumber,
        Kind::FloatingPoint,
    );
    assert_failed_with(
        &try_coerce::<i32>(Dynamic::new(1.0f32)),
        Kind::FloatingPoint,
        Kind::WholeNumber,
    );
    // Same kind, different width.
    assert_failed_with(
        &try_coerce::<u64>(Dynamic::new(1u32)),
        Kind::WholeNumber,
        Kind::WholeNumber,
    );
}

#[test]
fn str_slice_and_string_are_distinct() {
    assert!(!try_coerce::<String>(Dynamic::new("literal")).is_success());
    assert!(try_coerce::<&'static str>(Dynamic::new("literal")).is_success());
}

#[test]
fn untagged_values_borrow_through() {
    let n: i64 = 99;
    let any: &dyn Any = &n;
    assert_eq!(try_coerce_ref::<i64>(any).ok(), Some(&99));
    assert_failed_with(&try_coerce_ref::<i32>(any), Kind::WholeNumber, Kind::WholeNumber);
}

#[test]
fn dynamic_reports_its_tag() {
    let value = Dynamic::new('x');
    assert!(value.is::<char>());
    assert_eq!(value.tag().kind(), Kind::Character);
    assert!(value.as_any().is::<char>());
}

#[test]
fn outcome_helpers() {
    let fail = try_coerce::<i32>(Dynamic::new("no"));
    assert_eq!(fail.clone().unwrap_or(-1), -1);
    assert!(fail.into_result().is_err());
}
