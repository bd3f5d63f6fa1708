// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the guard layer.
//!
//! Debug-mode assertions for properties the guards already enforce by
//! construction. They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** if a later change breaks a guarantee
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Guarantee                                       |
//! |----------------------------|-------------------------------------------------|
//! | `check_binding_distinct`   | loop binding never occludes an outer identifier |
//! | `check_outcome_exclusive`  | a coercion outcome has exactly one branch       |
//! | `check_fallback_total`     | a safe read produced the value or the fallback  |
//!
//! # Usage
//!
//! ```ignore
//! use warden::contracts::*;
//!
//! // In debug builds, this panics if the binding shadows an outer name
//! check_binding_distinct("it", &scope);
//! ```

use crate::guard::{CoercionOutcome, Scope};

// ============================================================================
// SCOPE CONTRACTS
// ============================================================================

/// Check that an element binding doesn't reuse an outer-scope name.
///
/// # Panics (debug builds only)
/// Panics if `name` is declared in `scope`. That is the occlusion case:
/// reading the outer name inside the body would find the element instead.
#[inline]
pub fn check_binding_distinct(name: &str, scope: &Scope<'_>) {
    debug_assert!(
        !scope.contains(name),
        "Contract violation: Binding.Distinct - '{}' occludes an outer identifier (scope: {:?})",
        name,
        scope.names().collect::<Vec<_>>()
    );
}

// ============================================================================
// COERCION CONTRACTS
// ============================================================================

/// Check that a coercion outcome populates exactly one branch, and that a
/// failure carries two different tags.
///
/// # Panics (debug builds only)
/// Panics if a failure reports identical source and target tags, which would
/// mean a matching value was rejected.
#[inline]
pub fn check_outcome_exclusive<T>(outcome: &CoercionOutcome<T>) {
    debug_assert!(
        outcome.is_success() != outcome.failure().is_some(),
        "Contract violation: CoercionOutcome.Exclusive - both or neither branch populated"
    );

    if let Some(failure) = outcome.failure() {
        debug_assert!(
            failure.source != failure.target,
            "Contract violation: CoercionOutcome.Exact - rejected a {} as {}",
            failure.source,
            failure.target
        );
    }
}

// ============================================================================
// SLOT CONTRACTS
// ============================================================================

/// Check that a fallback read handed back either the held value or the
/// fallback itself, by address. A read never copies or invents a value.
///
/// # Panics (debug builds only)
/// Panics if `result` is neither reference.
#[inline]
pub fn check_fallback_total<T>(held: Option<&T>, fallback: &T, result: &T) {
    match held {
        Some(value) => debug_assert!(
            std::ptr::eq(value, result),
            "Contract violation: Slot.Read - present slot read back something other than its value"
        ),
        None => debug_assert!(
            std::ptr::eq(fallback, result),
            "Contract violation: Slot.Read - absent slot read back something other than the fallback"
        ),
    }
}
