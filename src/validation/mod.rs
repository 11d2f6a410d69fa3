//! Structural checks over a flow graph.
//!
//! Validation is a pure function of the steps and transitions. Each rule runs
//! on its own; none of them stops another from reporting.

use crate::model::{Step, Transition};
use ahash::AHashSet;
use itertools::Itertools;

mod diagnostics;

pub use diagnostics::{Diagnostics, Scope};

pub const NO_START_STEP: &str = "No starting node designated.";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const STEP_DISCONNECTED: &str = "Node is disconnected";

/// Runs every rule and collects the findings.
pub fn validate(steps: &[Step], transitions: &[Transition]) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    check_duplicate_ids(steps, &mut diagnostics);
    check_start_step(steps, &mut diagnostics);
    check_descriptions(steps, &mut diagnostics);
    check_connectivity(steps, transitions, &mut diagnostics);
    check_endpoints(steps, transitions, &mut diagnostics);
    diagnostics
}

/// Every occurrence of an id after its first one is reported.
fn check_duplicate_ids(steps: &[Step], diagnostics: &mut Diagnostics) {
    let mut seen = AHashSet::new();
    let repeated: Vec<&str> = steps
        .iter()
        .map(|s| s.id.as_str())
        .filter(|id| !seen.insert(*id))
        .collect();

    if !repeated.is_empty() {
        diagnostics.push(
            Scope::Global,
            format!("Duplicate Node IDs found: {}", repeated.iter().join(", ")),
        );
    }
}

fn check_start_step(steps: &[Step], diagnostics: &mut Diagnostics) {
    if !steps.is_empty() && !steps.iter().any(|s| s.is_start) {
        diagnostics.push(Scope::Global, NO_START_STEP);
    }
}

fn check_descriptions(steps: &[Step], diagnostics: &mut Diagnostics) {
    for step in steps.iter().filter(|s| s.description.trim().is_empty()) {
        diagnostics.push(Scope::Step(step.id.clone()), DESCRIPTION_REQUIRED);
    }
}

/// A lone step is never "disconnected"; there is nothing to connect it to.
fn check_connectivity(steps: &[Step], transitions: &[Transition], diagnostics: &mut Diagnostics) {
    if steps.len() <= 1 {
        return;
    }
    let touched: AHashSet<&str> = transitions
        .iter()
        .flat_map(|t| [t.source.as_str(), t.target.as_str()])
        .collect();

    for step in steps.iter().filter(|s| !touched.contains(s.id.as_str())) {
        diagnostics.push(Scope::Step(step.id.clone()), STEP_DISCONNECTED);
    }
}

/// Flags transitions whose endpoints name no existing step.
fn check_endpoints(steps: &[Step], transitions: &[Transition], diagnostics: &mut Diagnostics) {
    let known: AHashSet<&str> = steps.iter().map(|s| s.id.as_str()).collect();

    for transition in transitions {
        let scope = || Scope::Transition(transition.id.clone());
        if !known.contains(transition.source.as_str()) {
            diagnostics.push(
                scope(),
                format!("Transition source '{}' does not exist", transition.source),
            );
        }
        if !known.contains(transition.target.as_str()) {
            diagnostics.push(
                scope(),
                format!("Transition target '{}' does not exist", transition.target),
            );
        }
    }
}
