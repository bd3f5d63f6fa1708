// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The guard layer: four independent primitives for risky access.
//!
//! Each guard comes in two halves:
//!
//! 1. **Safe operations** (`Slot::read`, `Deferred::read_checked`, `try_coerce`,
//!    `for_each_safe`) that are total. Absence, missing initialization and type
//!    mismatch come back as ordinary values: a fallback, a status, an outcome.
//!
//! 2. **Forcing operations** (`Slot::force_read`, `Deferred::read_unchecked`,
//!    `force_coerce`) that keep the anti-pattern around so it can be compared
//!    and tested. They return `Err(GuardError)` immediately on the bad path.
//!
//! | Guard       | Wraps                       | Safe read          | Forcing read       |
//! |-------------|-----------------------------|--------------------|--------------------|
//! | `Slot`      | a possibly-absent value     | `read`, `map_or`   | `force_read`       |
//! | `Deferred`  | a value assigned later      | `read_checked`     | `read_unchecked`   |
//! | `Dynamic`   | a value of erased type      | `try_coerce`       | `force_coerce`     |
//! | `Scope`     | outer names during a loop   | `for_each_safe`    | n/a                |
//!
//! None of the guards depend on each other. None of them lock: sharing one
//! across threads means synchronizing `set`/`clear`/`assign` yourself.

mod coerce;
mod deferred;
mod scope;
mod slot;

pub use coerce::{
    force_coerce, try_coerce, try_coerce_ref, CoercionFailure, CoercionOutcome, Dynamic,
};
pub use deferred::{Deferred, ReadStatus};
pub use scope::{for_each_safe, Binding, Scope, ScopedIter, DEFAULT_BINDING};
pub use slot::Slot;
