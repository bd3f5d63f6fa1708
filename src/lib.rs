//! Guards for optional, deferred, type-erased and shadowable values.
//!
//! Four access patterns fail badly when done directly: forcing an absent value,
//! reading a value before it was assigned, casting without checking the runtime
//! type, and letting a loop binding shadow an outer name. This crate wraps each
//! one in a small guard with a total "safe" operation, and keeps the forcing
//! operation next to it so the difference stays testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────────────────────────┐
//! │  types.rs   │────▶│                guard/                    │
//! │ (TypeTag,   │     │  slot.rs    deferred.rs   coerce.rs      │
//! │  GuardError)│     │  (Slot)     (Deferred)    (Dynamic)      │
//! └─────────────┘     │                            scope.rs      │
//!                     │                            (Scope)       │
//!                     └──────────────────────────────────────────┘
//!        │                           │
//!        ▼                           ▼
//! ┌──────────────┐           ┌──────────────┐
//! │ contracts.rs │           │  catalog.rs  │
//! │ (debug-only  │           │ (patterns,   │
//! │  invariants) │           │  safe/avoid) │
//! └──────────────┘           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use warden::{try_coerce, Deferred, Dynamic, ReadStatus, Slot};
//!
//! let name: Slot<String> = Slot::absent("name");
//! assert_eq!(name.read(&"anonymous".to_string()), "anonymous");
//!
//! let mut config: Deferred<u16> = Deferred::new("port");
//! assert!(matches!(config.read_checked(), ReadStatus::NotInitialized { .. }));
//! config.assign(8080);
//! assert_eq!(config.read_checked().value(), Some(&8080));
//!
//! let outcome = try_coerce::<i32>(Dynamic::new("Kotlin".to_string()));
//! assert!(!outcome.is_success());
//! ```

pub mod catalog;
pub mod contracts;
mod guard;
#[doc(hidden)]
pub mod testing;
mod types;

// Re-exports for public API
pub use catalog::{run_all, Pattern, PatternReport, Profile, Run, Something, Variant};
pub use guard::{
    for_each_safe, force_coerce, try_coerce, try_coerce_ref, Binding, CoercionFailure,
    CoercionOutcome, Deferred, Dynamic, ReadStatus, Scope, ScopedIter, Slot, DEFAULT_BINDING,
};
pub use types::{GuardError, Kind, TypeTag};
