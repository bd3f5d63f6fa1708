// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared by every guard: runtime type tags and the error enum.
//!
//! `TypeTag` is the runtime identity used by checked coercion. Two tags are equal
//! only when their `TypeId`s are equal. The `Kind` is a human label for display
//! and never participates in matching, so an `i32` is never mistaken for an
//! `i64` or an `f64` just because they share a label.

use serde::Serialize;
use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Display classification for a runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Text,
    WholeNumber,
    FloatingPoint,
    Boolean,
    Character,
    /// A `Vec` of one of the scalar kinds above.
    Sequence,
    /// Anything the tag table doesn't model.
    Unknown,
}

impl Kind {
    pub fn label(self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::WholeNumber => "whole number",
            Kind::FloatingPoint => "floating-point",
            Kind::Boolean => "boolean",
            Kind::Character => "character",
            Kind::Sequence => "list",
            Kind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runtime identity of a concrete type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeTag {
    #[serde(skip)]
    id: TypeId,
    name: &'static str,
    kind: Kind,
}

impl TypeTag {
    /// Tag for a statically known type.
    pub fn of<T: Any>() -> Self {
        let id = TypeId::of::<T>();
        Self {
            id,
            name: type_name::<T>(),
            kind: modeled(id).map_or(Kind::Unknown, |tag| tag.kind),
        }
    }

    /// Best-effort tag for an untagged `dyn Any`.
    ///
    /// A `dyn Any` only carries its `TypeId`, so the name can be recovered only
    /// for the types in the tag table. Everything else is reported as
    /// `Kind::Unknown` with the opaque name `"<unknown>"`, but still keeps the
    /// real `TypeId`, so equality stays exact.
    pub fn of_any(value: &dyn Any) -> Self {
        let id = value.type_id();
        modeled(id).unwrap_or(Self {
            id,
            name: "<unknown>",
            kind: Kind::Unknown,
        })
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, e.g. `alloc::string::String`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether this tag names the type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == Kind::Unknown {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.kind, self.name)
        }
    }
}

/// Tag for one of the modeled types, if `id` names one.
///
/// Every scalar row also models `Vec` of that scalar as `Kind::Sequence`.
fn modeled(id: TypeId) -> Option<TypeTag> {
    macro_rules! probe {
        ($($ty:ty => $kind:ident),* $(,)?) => {
            $(
                if id == TypeId::of::<$ty>() {
                    return Some(TypeTag {
                        id,
                        name: type_name::<$ty>(),
                        kind: Kind::$kind,
                    });
                }
                if id == TypeId::of::<Vec<$ty>>() {
                    return Some(TypeTag {
                        id,
                        name: type_name::<Vec<$ty>>(),
                        kind: Kind::Sequence,
                    });
                }
            )*
        };
    }

    probe![
        String => Text,
        &'static str => Text,
        i8 => WholeNumber,
        i16 => WholeNumber,
        i32 => WholeNumber,
        i64 => WholeNumber,
        i128 => WholeNumber,
        isize => WholeNumber,
        u8 => WholeNumber,
        u16 => WholeNumber,
        u32 => WholeNumber,
        u64 => WholeNumber,
        u128 => WholeNumber,
        usize => WholeNumber,
        f32 => FloatingPoint,
        f64 => FloatingPoint,
        bool => Boolean,
        char => Character,
    ];
    None
}

/// Failure raised by the forcing half of each guard.
///
/// The safe operations never produce one of these. They exist so the
/// anti-pattern stays observable and testable instead of aborting the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// A read hit a slot that holds no value.
    AbsentValue { name: &'static str },
    /// A deferred value was read before its first assignment.
    UninitializedAccess { name: &'static str },
    /// The runtime type didn't match the requested type.
    TypeCoercion { source: TypeTag, target: TypeTag },
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::AbsentValue { name } => {
                write!(f, "'{}' was forced but holds no value", name)
            }
            GuardError::UninitializedAccess { name } => {
                write!(f, "'{}' has not been initialized", name)
            }
            GuardError::TypeCoercion { source, target } => {
                write!(f, "{} cannot be cast to {}", source, target)
            }
        }
    }
}

impl std::error::Error for GuardError {}
