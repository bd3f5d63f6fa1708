//! End-to-end runs of the pattern catalog, safe and avoided.

use warden::{run_all, GuardError, Kind, Pattern, Variant};

fn lines(pattern: Pattern, variant: Variant) -> Vec<String> {
    pattern.run(variant).lines
}

#[test]
fn safe_outputs_match_expected_messages() {
    assert_eq!(
        lines(Pattern::UninitializedProperty, Variant::Safe),
        vec![
            "initializedSomething is not initialized".to_string(),
            "initializedAnything is not initialized".to_string()
        ]
    );
    assert_eq!(lines(Pattern::ForceUnwrap, Variant::Safe), vec!["String is null"]);
    assert_eq!(
        lines(Pattern::UnsafeCast, Variant::Safe),
        vec!["Casting failed, value is not an Int"]
    );
    assert_eq!(lines(Pattern::NullableCollection, Variant::Safe), vec!["List is null"]);
    assert_eq!(lines(Pattern::CustomGetter, Variant::Safe), vec!["Default", "ADA"]);
    assert_eq!(lines(Pattern::LambdaShadowing, Variant::Safe), vec!["1", "2", "3"]);
    assert_eq!(
        lines(Pattern::NullableIteration, Variant::Safe),
        vec!["3", "Element is null", "5"]
    );
}

#[test]
fn avoided_runs_fail_with_the_matching_error() {
    let run = Pattern::UninitializedProperty.run(Variant::Avoided);
    assert_eq!(
        run.failure,
        Some(GuardError::UninitializedAccess {
            name: "uninitializedSomething"
        })
    );

    let run = Pattern::ForceUnwrap.run(Variant::Avoided);
    assert_eq!(
        run.failure,
        Some(GuardError::AbsentValue {
            name: "nullableString"
        })
    );

    match Pattern::UnsafeCast.run(Variant::Avoided).failure {
        Some(GuardError::TypeCoercion { source, target }) => {
            assert_eq!(source.kind(), Kind::Text);
            assert_eq!(target.kind(), Kind::WholeNumber);
        }
        other => panic!("expected TypeCoercion, got {:?}", other),
    }

    let run = Pattern::CustomGetter.run(Variant::Avoided);
    assert_eq!(run.failure, Some(GuardError::AbsentValue { name: "name" }));
}

#[test]
fn avoided_iteration_stops_at_first_absent_element() {
    let run = Pattern::NullableIteration.run(Variant::Avoided);
    assert_eq!(run.lines, vec!["3"]);
    assert_eq!(run.failure, Some(GuardError::AbsentValue { name: "it" }));
}

#[test]
fn avoided_shadowing_is_silently_wrong() {
    let run = Pattern::LambdaShadowing.run(Variant::Avoided);
    assert!(run.completed());
    assert_eq!(run.lines, vec!["5", "5", "5"]);
    assert_ne!(run.lines, lines(Pattern::LambdaShadowing, Variant::Safe));
}

#[test]
fn run_all_keeps_catalog_order() {
    let reports = run_all(Variant::Safe);
    let order: Vec<Pattern> = reports.iter().map(|r| r.pattern).collect();
    assert_eq!(order, Pattern::ALL.to_vec());
    assert!(reports.iter().all(|r| r.failure.is_none()));

    let avoided = run_all(Variant::Avoided);
    let failed = avoided.iter().filter(|r| r.failure.is_some()).count();
    // Everything except the shadowing example fails loudly.
    assert_eq!(failed, Pattern::ALL.len() - 1);
}

#[test]
fn report_serializes_to_json() {
    let report = Pattern::UnsafeCast.report(Variant::Avoided);
    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(json["pattern"], "unsafe-cast");
    assert_eq!(json["variant"], "avoided");
    assert!(json["failure"].as_str().is_some());

    let safe = serde_json::to_value(Pattern::ForceUnwrap.report(Variant::Safe)).expect("serialize");
    assert!(safe.get("failure").is_none());
    assert_eq!(safe["lines"][0], "String is null");
}
