// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optional slots: a value that may be absent, with no silent dereference.

use crate::contracts::check_fallback_total;
use crate::types::GuardError;

/// A possibly-absent value with a name for error reports.
///
/// Absence is always observable and never triggers a failure on the safe path.
/// The slot never substitutes a default by itself: reads take the fallback
/// from the caller and leave the slot untouched.
///
/// # Invariants
/// - Only `set` and `clear` change the contents.
/// - A present-but-empty value (`""`, `0`, `vec![]`) is present, not absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T> Slot<T> {
    /// An empty slot.
    pub fn absent(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// A populated slot.
    pub fn present(name: &'static str, value: T) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    pub fn from_option(name: &'static str, value: Option<T>) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Empty the slot, returning what it held.
    pub fn clear(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The contained value, or `fallback` when absent.
    pub fn read<'a>(&'a self, fallback: &'a T) -> &'a T {
        let result = self.value.as_ref().unwrap_or(fallback);
        check_fallback_total(self.value.as_ref(), fallback, result);
        result
    }

    /// Owned variant of [`Slot::read`].
    pub fn read_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        self.read(&fallback).clone()
    }

    /// Project the value through `f`, or return `fallback` when absent.
    ///
    /// This is the safe-call-then-fallback shape: `slot.map_or("List is null",
    /// |list| ...)` never touches a missing value.
    pub fn map_or<U>(&self, fallback: U, f: impl FnOnce(&T) -> U) -> U {
        match &self.value {
            Some(value) => f(value),
            None => fallback,
        }
    }

    /// Forced read. Fails with `AbsentValue` when the slot is empty.
    ///
    /// Kept to document the anti-pattern; prefer [`Slot::read`].
    pub fn force_read(&self) -> Result<&T, GuardError> {
        self.value
            .as_ref()
            .ok_or(GuardError::AbsentValue { name: self.name })
    }
}
