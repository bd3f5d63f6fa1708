// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shadow-free iteration over sequences of optional elements.
//!
//! The outer names visible to a loop body live in a [`Scope`]. The current
//! element never enters that scope: it is handed to the body as a separate
//! [`Binding`] whose name is chosen to be distinct from every outer name. A body
//! that looks up `"something"` in the scope therefore always gets the outer
//! `something`, whatever the element happens to be called.
//!
//! # Guarantees
//! - Elements are visited in order, exactly once each, synchronously.
//! - Absent elements are delivered, not skipped, and never unwrapped.
//! - The traversal is lazy and restartable (`ScopedIter: Clone`).

use crate::contracts::check_binding_distinct;
use std::any::Any;
use std::rc::Rc;

/// Name given to the element binding when the caller doesn't pick one.
pub const DEFAULT_BINDING: &str = "it";

/// Outer-scope identifiers visible to a loop body.
#[derive(Default)]
pub struct Scope<'a> {
    entries: Vec<(&'a str, &'a dyn Any)>,
}

impl<'a> Scope<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Scope::declare`].
    pub fn with(mut self, name: &'a str, value: &'a dyn Any) -> Self {
        self.declare(name, value);
        self
    }

    /// Declare `name`. Redeclaring a name replaces its value.
    pub fn declare(&mut self, name: &'a str, value: &'a dyn Any) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Look up an outer identifier by name and type.
    ///
    /// Returns `None` if the name isn't declared or holds a different type.
    pub fn lookup<T: Any>(&self, name: &str) -> Option<&'a T> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|&(_, value)| value.downcast_ref::<T>())
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `base` if it's free, else the first free `base_1`, `base_2`, ...
    pub fn fresh_name(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}_{}", base, n);
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// The current element of a scoped traversal.
#[derive(Debug)]
pub struct Binding<'s, T> {
    index: usize,
    name: Rc<str>,
    element: Option<&'s T>,
    fallback: &'s T,
}

impl<T> Clone for Binding<'_, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            name: Rc::clone(&self.name),
            element: self.element,
            fallback: self.fallback,
        }
    }
}

impl<'s, T> Binding<'s, T> {
    /// Position in the sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The name the element is bound under. Never collides with the scope.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element as delivered, possibly absent.
    pub fn element(&self) -> Option<&'s T> {
        self.element
    }

    pub fn is_absent(&self) -> bool {
        self.element.is_none()
    }

    /// The element, or the traversal's fallback when absent.
    pub fn resolved(&self) -> &'s T {
        self.element.unwrap_or(self.fallback)
    }

    /// Project the element through `f`, or return `fallback` when absent.
    pub fn map_or<U>(&self, fallback: U, f: impl FnOnce(&'s T) -> U) -> U {
        self.element.map_or(fallback, f)
    }
}

/// Lazy traversal yielding one [`Binding`] per element.
///
/// Cloning an untouched iterator restarts the traversal from the top.
#[derive(Debug)]
pub struct ScopedIter<'s, T> {
    elements: std::iter::Enumerate<std::slice::Iter<'s, Option<T>>>,
    name: Rc<str>,
    fallback: &'s T,
}

impl<T> Clone for ScopedIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            name: Rc::clone(&self.name),
            fallback: self.fallback,
        }
    }
}

impl<'s, T> ScopedIter<'s, T> {
    /// Traverse `sequence`, binding elements under [`DEFAULT_BINDING`] or the
    /// first free variant of it.
    pub fn new(sequence: &'s [Option<T>], scope: &Scope<'_>, fallback: &'s T) -> Self {
        Self::named(sequence, scope, DEFAULT_BINDING, fallback)
    }

    /// Like [`ScopedIter::new`] with a caller-chosen base name.
    pub fn named(
        sequence: &'s [Option<T>],
        scope: &Scope<'_>,
        base: &str,
        fallback: &'s T,
    ) -> Self {
        let name: Rc<str> = scope.fresh_name(base).into();
        check_binding_distinct(&name, scope);
        Self {
            elements: sequence.iter().enumerate(),
            name,
            fallback,
        }
    }

    pub fn binding_name(&self) -> &str {
        &self.name
    }
}

impl<'s, T> Iterator for ScopedIter<'s, T> {
    type Item = Binding<'s, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, element) = self.elements.next()?;
        Some(Binding {
            index,
            name: Rc::clone(&self.name),
            element: element.as_ref(),
            fallback: self.fallback,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> ExactSizeIterator for ScopedIter<'_, T> {}

/// Visit every element of `sequence` in order with `body`.
///
/// `body` receives the element binding and the untouched outer scope. Absent
/// elements are delivered like any other; `Binding::resolved` substitutes
/// `fallback` for them.
pub fn for_each_safe<'s, T>(
    sequence: &'s [Option<T>],
    scope: &Scope<'_>,
    fallback: &'s T,
    mut body: impl FnMut(&Binding<'s, T>, &Scope<'_>),
) {
    for binding in ScopedIter::new(sequence, scope, fallback) {
        body(&binding, scope);
    }
}
