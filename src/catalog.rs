// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pattern catalog: each risky access pattern next to its guarded form.
//!
//! Every [`Pattern`] can be run two ways. [`Variant::Safe`] uses the total
//! operations and always completes. [`Variant::Avoided`] uses the forcing
//! operations and stops at the first failure, recording it in the [`Run`]
//! instead of aborting the process.

use crate::guard::{
    for_each_safe, force_coerce, try_coerce, Deferred, Dynamic, ReadStatus, Scope, Slot,
};
use crate::types::GuardError;
use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::str::FromStr;

/// Stand-in domain object for the property examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Something;

impl fmt::Display for Something {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Something")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    UninitializedProperty,
    ForceUnwrap,
    UnsafeCast,
    NullableCollection,
    CustomGetter,
    LambdaShadowing,
    NullableIteration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Safe,
    Avoided,
}

/// What a pattern printed, and where it failed if it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub lines: Vec<String>,
    pub failure: Option<GuardError>,
}

impl Run {
    pub fn completed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Serializable summary of one run.
#[derive(Debug, Clone, Serialize)]
pub struct PatternReport {
    pub pattern: Pattern,
    pub variant: Variant,
    pub title: &'static str,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl Pattern {
    /// Catalog order.
    pub const ALL: [Pattern; 7] = [
        Pattern::UninitializedProperty,
        Pattern::ForceUnwrap,
        Pattern::UnsafeCast,
        Pattern::NullableCollection,
        Pattern::CustomGetter,
        Pattern::LambdaShadowing,
        Pattern::NullableIteration,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::UninitializedProperty => "uninitialized-property",
            Pattern::ForceUnwrap => "force-unwrap",
            Pattern::UnsafeCast => "unsafe-cast",
            Pattern::NullableCollection => "nullable-collection",
            Pattern::CustomGetter => "custom-getter",
            Pattern::LambdaShadowing => "lambda-shadowing",
            Pattern::NullableIteration => "nullable-iteration",
        }
    }

    pub fn title(self, variant: Variant) -> &'static str {
        match (self, variant) {
            (Pattern::UninitializedProperty, Variant::Safe) => "Safely accessing deferred values",
            (Pattern::UninitializedProperty, Variant::Avoided) => {
                "Accessing deferred values before assignment"
            }
            (Pattern::ForceUnwrap, Variant::Safe) => "Safely handling optional values",
            (Pattern::ForceUnwrap, Variant::Avoided) => "Force unwrapping an absent value",
            (Pattern::UnsafeCast, Variant::Safe) => "Safe casting",
            (Pattern::UnsafeCast, Variant::Avoided) => "Unsafe cast",
            (Pattern::NullableCollection, Variant::Safe) => "Safely accessing an optional collection",
            (Pattern::NullableCollection, Variant::Avoided) => {
                "Accessing an optional collection without a check"
            }
            (Pattern::CustomGetter, Variant::Safe) => "Safely accessing a computed getter",
            (Pattern::CustomGetter, Variant::Avoided) => {
                "Computed getter over an unset field"
            }
            (Pattern::LambdaShadowing, Variant::Safe) => "Avoiding shadowed names in a loop body",
            (Pattern::LambdaShadowing, Variant::Avoided) => "Shadowing an outer name in a loop body",
            (Pattern::NullableIteration, Variant::Safe) => {
                "Safely iterating over optional elements"
            }
            (Pattern::NullableIteration, Variant::Avoided) => {
                "Iterating over optional elements without a check"
            }
        }
    }

    pub fn run(self, variant: Variant) -> Run {
        let mut lines = Vec::new();
        let failure = match variant {
            Variant::Safe => {
                self.safe(&mut lines);
                None
            }
            Variant::Avoided => self.avoided(&mut lines).err(),
        };
        Run { lines, failure }
    }

    pub fn report(self, variant: Variant) -> PatternReport {
        let Run { lines, failure } = self.run(variant);
        PatternReport {
            pattern: self,
            variant,
            title: self.title(variant),
            lines,
            failure: failure.map(|e| e.to_string()),
        }
    }

    fn safe(self, out: &mut Vec<String>) {
        match self {
            Pattern::UninitializedProperty => {
                let something: Deferred<Something> = Deferred::new("initializedSomething");
                let anything: Deferred<Box<dyn Any>> = Deferred::new("initializedAnything");

                out.push(match something.read_checked() {
                    ReadStatus::Ready(value) => value.to_string(),
                    status @ ReadStatus::NotInitialized { .. } => status.to_string(),
                });
                let missing = format!("{} is not initialized", anything.name());
                out.push(anything.derive_or(missing, |value| format!("{:?}", (**value).type_id())));
            }
            Pattern::ForceUnwrap => {
                let nullable: Slot<String> = Slot::absent("nullableString");
                out.push(nullable.map_or("String is null".to_string(), |s| s.len().to_string()));
            }
            Pattern::UnsafeCast => {
                let value = Dynamic::new("Kotlin".to_string());
                out.push(match try_coerce::<i32>(value).ok() {
                    Some(n) => n.to_string(),
                    None => "Casting failed, value is not an Int".to_string(),
                });
            }
            Pattern::NullableCollection => {
                let list: Slot<Vec<String>> = Slot::absent("nullableList");
                out.push(list.map_or("List is null".to_string(), |l| l.len().to_string()));
            }
            Pattern::CustomGetter => {
                let mut profile = Profile::default();
                out.push(profile.custom_name());
                profile.name.set("ada".to_string());
                out.push(profile.custom_name());
            }
            Pattern::LambdaShadowing => {
                let number = 5;
                let list = [Some(1), Some(2), Some(3)];
                // The outer value deliberately uses the default binding name.
                let scope = Scope::new().with("it", &number);
                for_each_safe(&list, &scope, &0, |item, _| {
                    out.push(item.resolved().to_string());
                });
            }
            Pattern::NullableIteration => {
                let list = [Some("one"), None, Some("three")];
                let fallback = "Element is null";
                let scope = Scope::new();
                for_each_safe(&list, &scope, &fallback, |item, _| {
                    out.push(item.map_or(fallback.to_string(), |s| s.len().to_string()));
                });
            }
        }
    }

    fn avoided(self, out: &mut Vec<String>) -> Result<(), GuardError> {
        match self {
            Pattern::UninitializedProperty => {
                let something: Deferred<Something> = Deferred::new("uninitializedSomething");
                out.push(something.read_unchecked()?.to_string());
            }
            Pattern::ForceUnwrap => {
                let nullable: Slot<String> = Slot::absent("nullableString");
                out.push(nullable.force_read()?.len().to_string());
            }
            Pattern::UnsafeCast => {
                let value = Dynamic::new("Kotlin".to_string());
                out.push(force_coerce::<i32>(value)?.to_string());
            }
            Pattern::NullableCollection => {
                let list: Slot<Vec<String>> = Slot::absent("nullableList");
                out.push(list.force_read()?.len().to_string());
            }
            Pattern::CustomGetter => {
                let profile = Profile::default();
                out.push(profile.custom_name_forced()?);
            }
            Pattern::LambdaShadowing => {
                // The body redeclares the element's name with the outer value,
                // so every lookup sees 5 instead of the element. No error is
                // raised; the output is silently wrong.
                let number = 5;
                let list = [1, 2, 3];
                for item in &list {
                    let mut body = Scope::new();
                    body.declare("it", item);
                    body.declare("it", &number);
                    let seen = body.lookup::<i32>("it").copied().unwrap_or_default();
                    out.push(seen.to_string());
                }
            }
            Pattern::NullableIteration => {
                let list = [Some("one"), None, Some("three")];
                for item in list {
                    let slot = Slot::from_option("it", item);
                    out.push(slot.force_read()?.len().to_string());
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Pattern::ALL.iter().map(|p| p.name()).collect();
                format!("unknown pattern '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// A record with a computed getter over a field that may never be set.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: Slot<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: Slot::absent("name"),
        }
    }
}

impl Profile {
    /// Upper-cased name, or `"Default"` while unset.
    pub fn custom_name(&self) -> String {
        self.name.map_or("Default".to_string(), |n| n.to_uppercase())
    }

    pub fn custom_name_forced(&self) -> Result<String, GuardError> {
        Ok(self.name.force_read()?.to_uppercase())
    }
}

/// Run every pattern in catalog order.
pub fn run_all(variant: Variant) -> Vec<PatternReport> {
    Pattern::ALL.into_iter().map(|p| p.report(variant)).collect()
}
