// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for checked coercion.
//!
//! Any value, any target: `try_coerce` must return an outcome, never panic,
//! and succeed exactly when the runtime type equals the target.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use warden::{force_coerce, try_coerce, Dynamic, TypeTag};

#[derive(Arbitrary, Debug, Clone)]
enum Value {
    Int(i32),
    Long(i64),
    Byte(u8),
    Float(f64),
    Bool(bool),
    Text(String),
    Ints(Vec<i32>),
    Opaque(u16),
}

/// A type the tag table doesn't model.
#[derive(Debug)]
struct Opaque(#[allow(dead_code)] u16);

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Target {
    Int,
    Long,
    Float,
    Text,
    Ints,
}

impl Value {
    fn into_dynamic(self) -> (Dynamic, TypeTag) {
        let value = match self {
            Value::Int(v) => Dynamic::new(v),
            Value::Long(v) => Dynamic::new(v),
            Value::Byte(v) => Dynamic::new(v),
            Value::Float(v) => Dynamic::new(v),
            Value::Bool(v) => Dynamic::new(v),
            Value::Text(v) => Dynamic::new(v),
            Value::Ints(v) => Dynamic::new(v),
            Value::Opaque(v) => Dynamic::new(Opaque(v)),
        };
        let tag = value.tag();
        (value, tag)
    }
}

fn check<T: 'static>(value: Dynamic, source: TypeTag) {
    let target = TypeTag::of::<T>();
    let outcome = try_coerce::<T>(value);
    match outcome.failure() {
        None => assert_eq!(source, target, "success across distinct types"),
        Some(failure) => {
            assert_ne!(source, target, "failure on matching types");
            assert_eq!(failure.source, source);
            assert_eq!(failure.target, target);
        }
    }
}

fuzz_target!(|input: (Value, Target)| {
    let (value, target) = input;
    let (dynamic, source) = value.clone().into_dynamic();

    match target {
        Target::Int => check::<i32>(dynamic, source),
        Target::Long => check::<i64>(dynamic, source),
        Target::Float => check::<f64>(dynamic, source),
        Target::Text => check::<String>(dynamic, source),
        Target::Ints => check::<Vec<i32>>(dynamic, source),
    }

    // The forcing variant agrees with the checked one.
    let (dynamic, source) = value.into_dynamic();
    assert_eq!(force_coerce::<i32>(dynamic).is_ok(), source.is::<i32>());
});
