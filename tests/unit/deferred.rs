//! Deferred initialization: status reads, unchecked reads, overwrite policy.

use super::common::assigned;
use warden::{Deferred, GuardError, ReadStatus};

#[test]
fn scenario_assign_then_read() {
    let mut record: Deferred<&str> = Deferred::new("record");
    assert!(matches!(
        record.read_checked(),
        ReadStatus::NotInitialized { name: "record" }
    ));

    record.assign("value");
    assert_eq!(record.read_checked(), ReadStatus::Ready(&"value"));
}

#[test]
fn read_unchecked_error_names_the_record() {
    let record: Deferred<u64> = Deferred::new("uninitializedSomething");
    let err = record.read_unchecked().unwrap_err();
    assert_eq!(
        err,
        GuardError::UninitializedAccess {
            name: "uninitializedSomething"
        }
    );
    assert!(err.to_string().contains("uninitializedSomething"));
}

#[test]
fn reassignment_overwrites_without_reset() {
    let record = assigned("r", [1, 2, 3]);
    assert!(record.is_assigned());
    assert_eq!(record.read_unchecked(), Ok(&3));
}

#[test]
fn status_value_and_display() {
    let record = assigned("r", ["ready"]);
    let status = record.read_checked();
    assert!(status.is_ready());
    assert_eq!(status.to_string(), "ready");
    assert_eq!(status.value(), Some(&"ready"));

    let empty: Deferred<&str> = Deferred::new("empty");
    assert_eq!(empty.read_checked().value(), None);
}
