// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked coercion of type-erased values.
//!
//! Matching is exact: the runtime `TypeId` must equal the target's. No numeric
//! widening, no narrowing, no container conversion. An `i32` requested as `i64`
//! or `f64` is a failure, never a lossy success.

use crate::contracts::check_outcome_exclusive;
use crate::types::{GuardError, TypeTag};
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// A value whose static type has been erased, tagged at construction.
///
/// Carrying the tag means a failed coercion can always say what the value
/// actually was, even for types the tag table doesn't model.
pub struct Dynamic {
    value: Box<dyn Any>,
    tag: TypeTag,
}

impl Dynamic {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            tag: TypeTag::of::<T>(),
        }
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    pub fn is<T: Any>(&self) -> bool {
        self.tag.is::<T>()
    }

    pub fn as_any(&self) -> &dyn Any {
        &*self.value
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dynamic").field("tag", &self.tag).finish()
    }
}

/// Why a coercion didn't happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoercionFailure {
    pub source: TypeTag,
    pub target: TypeTag,
}

impl fmt::Display for CoercionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not {}", self.source, self.target)
    }
}

impl From<CoercionFailure> for GuardError {
    fn from(failure: CoercionFailure) -> Self {
        GuardError::TypeCoercion {
            source: failure.source,
            target: failure.target,
        }
    }
}

/// Result of [`try_coerce`]: exactly one branch is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum CoercionOutcome<T> {
    Success { value: T },
    Failure(CoercionFailure),
}

impl<T> CoercionOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CoercionOutcome::Success { .. })
    }

    pub fn ok(self) -> Option<T> {
        match self {
            CoercionOutcome::Success { value } => Some(value),
            CoercionOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&CoercionFailure> {
        match self {
            CoercionOutcome::Success { .. } => None,
            CoercionOutcome::Failure(failure) => Some(failure),
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        self.ok().unwrap_or(fallback)
    }

    pub fn into_result(self) -> Result<T, CoercionFailure> {
        match self {
            CoercionOutcome::Success { value } => Ok(value),
            CoercionOutcome::Failure(failure) => Err(failure),
        }
    }
}

/// Reinterpret `value` as `T` if and only if its runtime type is exactly `T`.
pub fn try_coerce<T: Any>(value: Dynamic) -> CoercionOutcome<T> {
    let source = value.tag;
    let outcome = match value.value.downcast::<T>() {
        Ok(boxed) => CoercionOutcome::Success { value: *boxed },
        Err(_) => CoercionOutcome::Failure(CoercionFailure {
            source,
            target: TypeTag::of::<T>(),
        }),
    };
    check_outcome_exclusive(&outcome);
    outcome
}

/// Borrowing variant of [`try_coerce`] for untagged values.
///
/// The source tag is recovered with [`TypeTag::of_any`], so unmodeled types show
/// up as `Kind::Unknown` rather than failing in some other way.
pub fn try_coerce_ref<T: Any>(value: &dyn Any) -> CoercionOutcome<&T> {
    let outcome = match value.downcast_ref::<T>() {
        Some(value) => CoercionOutcome::Success { value },
        None => CoercionOutcome::Failure(CoercionFailure {
            source: TypeTag::of_any(value),
            target: TypeTag::of::<T>(),
        }),
    };
    check_outcome_exclusive(&outcome);
    outcome
}

/// Unchecked cast. Fails with `TypeCoercion` on any mismatch.
///
/// Kept to document the anti-pattern; prefer [`try_coerce`].
pub fn force_coerce<T: Any>(value: Dynamic) -> Result<T, GuardError> {
    try_coerce(value).into_result().map_err(GuardError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;

    #[test]
    fn text_is_not_a_whole_number() {
        let outcome = try_coerce::<i32>(Dynamic::new("Kotlin".to_string()));
        let failure = outcome.failure().copied().expect("should fail");
        assert_eq!(failure.source.kind(), Kind::Text);
        assert_eq!(failure.target.kind(), Kind::WholeNumber);
    }

    #[test]
    fn matching_type_succeeds() {
        let outcome = try_coerce::<String>(Dynamic::new("Kotlin".to_string()));
        assert_eq!(
            outcome,
            CoercionOutcome::Success {
                value: "Kotlin".to_string()
            }
        );
    }

    #[test]
    fn no_numeric_widening() {
        assert!(!try_coerce::<i64>(Dynamic::new(5i32)).is_success());
        assert!(!try_coerce::<f64>(Dynamic::new(5i64)).is_success());
        assert!(!try_coerce::<i64>(Dynamic::new(5.0f64)).is_success());
        assert!(!try_coerce::<Vec<i64>>(Dynamic::new(vec![1i32])).is_success());
    }

    #[test]
    fn force_coerce_reports_type_coercion() {
        let err = force_coerce::<i32>(Dynamic::new("Kotlin".to_string())).unwrap_err();
        assert!(matches!(err, GuardError::TypeCoercion { .. }));
    }

    #[test]
    fn unknown_source_types_fail_cleanly() {
        #[derive(Debug)]
        struct Something;

        let outcome = try_coerce::<i32>(Dynamic::new(Something));
        let failure = outcome.failure().copied().expect("should fail");
        assert_eq!(failure.source.kind(), Kind::Unknown);

        let untagged: &dyn Any = &Something;
        let failure = *try_coerce_ref::<String>(untagged).failure().expect("should fail");
        assert_eq!(failure.source.name(), "<unknown>");
        assert_eq!(failure.target.kind(), Kind::Text);
    }
}
