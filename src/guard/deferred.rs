// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deferred initialization: a value that is declared now and assigned later.
//!
//! The state machine has two states and one edge:
//!
//! ```text
//!   Unassigned ──assign──▶ Assigned ──assign (overwrite)──▶ Assigned
//! ```
//!
//! There is no way back to `Unassigned`. The "assigned" flag is the presence of
//! the value itself, so the flag and the value can never disagree.

use crate::types::GuardError;
use std::fmt;

/// A slot assigned after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred<T> {
    name: &'static str,
    value: Option<T>,
}

/// Outcome of [`Deferred::read_checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus<'a, T> {
    Ready(&'a T),
    NotInitialized { name: &'static str },
}

impl<'a, T> ReadStatus<'a, T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ReadStatus::Ready(_))
    }

    pub fn value(self) -> Option<&'a T> {
        match self {
            ReadStatus::Ready(value) => Some(value),
            ReadStatus::NotInitialized { .. } => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ReadStatus<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadStatus::Ready(value) => write!(f, "{}", value),
            ReadStatus::NotInitialized { name } => write!(f, "{} is not initialized", name),
        }
    }
}

impl<T> Deferred<T> {
    pub fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Store `value`. A second assignment overwrites; the flag stays set.
    pub fn assign(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    pub fn read_checked(&self) -> ReadStatus<'_, T> {
        match &self.value {
            Some(value) => ReadStatus::Ready(value),
            None => ReadStatus::NotInitialized { name: self.name },
        }
    }

    /// Read assuming assignment already happened.
    ///
    /// Fails with `UninitializedAccess` otherwise. Kept to document the
    /// anti-pattern; prefer [`Deferred::read_checked`].
    pub fn read_unchecked(&self) -> Result<&T, GuardError> {
        self.value
            .as_ref()
            .ok_or(GuardError::UninitializedAccess { name: self.name })
    }

    /// Derive a value from the assigned contents, or use `default` before
    /// assignment. This is the safe shape of a computed getter.
    pub fn derive_or<U>(&self, default: U, f: impl FnOnce(&T) -> U) -> U {
        self.value.as_ref().map_or(default, f)
    }
}
