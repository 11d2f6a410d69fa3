//! Tests for the structural validation rules.
mod common;
use common::*;
use flowdraft::prelude::*;
use flowdraft::validation::{DESCRIPTION_REQUIRED, NO_START_STEP, STEP_DISCONNECTED};

fn has(issues: &[String], expected: &str) -> bool {
    issues.iter().any(|i| i == expected)
}

#[test]
fn test_valid_chain_has_no_diagnostics() {
    let (steps, transitions) = create_chain();
    let diagnostics = validate(&steps, &transitions);
    assert!(diagnostics.is_valid());
    assert_eq!(diagnostics.issue_count(), 0);
    assert_eq!(diagnostics.to_string(), "Schema Valid");
}

#[test]
fn test_empty_document_is_valid() {
    assert!(validate(&[], &[]).is_valid());
}

#[test]
fn test_duplicate_ids_are_reported_globally() {
    let steps = vec![step("a").as_start(), step("a")];
    let transitions = vec![transition("t1", "a", "a")];

    let diagnostics = validate(&steps, &transitions);
    let global = diagnostics.global();
    assert_eq!(global.len(), 1);
    assert_eq!(global[0], "Duplicate Node IDs found: a");
}

#[test]
fn test_duplicate_ids_list_every_repeat() {
    let steps = vec![step("a").as_start(), step("b"), step("a"), step("b"), step("a")];
    let diagnostics = validate(&steps, &[]);
    assert!(has(diagnostics.global(), "Duplicate Node IDs found: a, b, a"));
}

#[test]
fn test_missing_start_step() {
    let (mut steps, transitions) = create_chain();
    steps[0].is_start = false;

    let diagnostics = validate(&steps, &transitions);
    assert!(has(diagnostics.global(), NO_START_STEP));
    assert_eq!(diagnostics.issue_count(), 1);
}

#[test]
fn test_blank_description_is_required() {
    let (mut steps, transitions) = create_chain();
    steps[1].description = String::new();
    steps[2].description = " \t\n".to_string();

    let diagnostics = validate(&steps, &transitions);
    assert!(has(diagnostics.for_step("b"), DESCRIPTION_REQUIRED));
    assert!(has(diagnostics.for_step("c"), DESCRIPTION_REQUIRED));
    assert!(diagnostics.for_step("a").is_empty());
}

#[test]
fn test_disconnected_step_among_many() {
    let (mut steps, transitions) = create_chain();
    steps.push(step("lonely"));

    let diagnostics = validate(&steps, &transitions);
    assert!(has(diagnostics.for_step("lonely"), STEP_DISCONNECTED));
    assert_eq!(diagnostics.issue_count(), 1);
}

#[test]
fn test_single_step_is_never_disconnected() {
    let diagnostics = validate(&[step("solo").as_start()], &[]);
    assert!(diagnostics.is_valid());
}

#[test]
fn test_rules_do_not_short_circuit() {
    let steps = vec![step("a"), step("a"), step("b").with_description("")];
    let diagnostics = validate(&steps, &[]);

    assert_eq!(diagnostics.global().len(), 2);
    assert!(has(diagnostics.global(), NO_START_STEP));
    // Per-step issues keep rule order
    assert_eq!(
        diagnostics.for_step("b"),
        &[DESCRIPTION_REQUIRED.to_string(), STEP_DISCONNECTED.to_string()]
    );
    // global + a + b
    assert_eq!(diagnostics.issue_count(), 3);
}

#[test]
fn test_dangling_transition_endpoints_are_flagged() {
    let (steps, mut transitions) = create_chain();
    transitions.push(transition("t3", "c", "ghost"));
    transitions.push(transition("t4", "phantom", "a"));

    let diagnostics = validate(&steps, &transitions);
    assert!(has(
        diagnostics.for_transition("t3"),
        "Transition target 'ghost' does not exist"
    ));
    assert!(has(
        diagnostics.for_transition("t4"),
        "Transition source 'phantom' does not exist"
    ));
    assert!(diagnostics.for_transition("t1").is_empty());
}

#[test]
fn test_step_named_global_does_not_collide_with_global_scope() {
    let steps = vec![step("global").as_start().with_description(""), step("x")];
    let transitions = vec![transition("t", "global", "x")];

    let diagnostics = validate(&steps, &transitions);
    assert!(diagnostics.global().is_empty());
    assert!(has(diagnostics.for_step("global"), DESCRIPTION_REQUIRED));
}

#[test]
fn test_display_lists_issues_by_scope() {
    let steps = vec![step("a"), step("b")];
    let rendered = validate(&steps, &[]).to_string();

    assert!(rendered.starts_with("3 Issues found"));
    assert!(rendered.contains("[global] No starting node designated."));
    assert!(rendered.contains("[step 'a'] Node is disconnected"));
}
