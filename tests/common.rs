//! Common test utilities for building flow documents.
use flowdraft::prelude::*;

/// An empty document with predictable ids (`node_1`, `e-a-b-1`, ...).
#[allow(dead_code)]
pub fn new_document() -> FlowDocument {
    FlowDocument::builder()
        .with_id_generator(Box::new(SequentialIds::default()))
        .seeded(false)
        .build()
}

/// A step with a usable description, labelled after its id.
#[allow(dead_code)]
pub fn step(id: &str) -> Step {
    Step::new(id, StepType::Llm)
        .with_label(id.to_uppercase())
        .with_description(format!("Does {}", id))
}

#[allow(dead_code)]
pub fn transition(id: &str, source: &str, target: &str) -> Transition {
    Transition::new(id, source, target, format!("{} to {}", source, target))
}

/// Logic: `a -> b -> c`, with `a` as the start step.
#[allow(dead_code)]
pub fn create_chain() -> (Vec<Step>, Vec<Transition>) {
    (
        vec![step("a").as_start(), step("b"), step("c")],
        vec![transition("t1", "a", "b"), transition("t2", "b", "c")],
    )
}

/// A document holding `create_chain`.
#[allow(dead_code)]
pub fn chain_document() -> FlowDocument {
    let mut doc = new_document();
    let (steps, transitions) = create_chain();
    doc.replace_all(steps, transitions);
    doc
}

/// Looks up a computed position, failing the test if it is missing.
#[allow(dead_code)]
pub fn position_of(positions: &ahash::AHashMap<String, Position>, id: &str) -> Position {
    *positions
        .get(id)
        .unwrap_or_else(|| panic!("no position computed for '{}'", id))
}

/// Sorted `(source, target, label)` triples, for multiset comparison.
#[allow(dead_code)]
pub fn transition_triples(transitions: &[Transition]) -> Vec<(String, String, String)> {
    let mut triples: Vec<_> = transitions
        .iter()
        .map(|t| (t.source.clone(), t.target.clone(), t.label.clone()))
        .collect();
    triples.sort();
    triples
}

/// A support-bot flow in the exported schema.
#[allow(dead_code)]
pub const SUPPORT_FLOW_JSON: &str = r#"{
  "nodes": [
    {
      "id": "greet",
      "label": "Greeting",
      "node_type": "llm",
      "description": "Say hello",
      "prompt": "Hi! What do you need?",
      "edges": [
        { "to_node_id": "classify", "condition": "user replied" }
      ]
    },
    {
      "id": "classify",
      "label": "Classify",
      "node_type": "condition",
      "description": "Route by intent",
      "prompt": "",
      "edges": [
        { "to_node_id": "docs", "condition": "question" },
        { "to_node_id": "handoff", "condition": "complaint" }
      ]
    },
    {
      "id": "docs",
      "label": "Docs Lookup",
      "node_type": "knowledge",
      "description": "Search the knowledge base",
      "prompt": "",
      "edges": [
        { "to_node_id": "handoff" }
      ]
    },
    {
      "id": "handoff",
      "label": "Handoff",
      "node_type": "output",
      "description": "Hand over to a human",
      "prompt": "Connecting you now.",
      "edges": []
    }
  ],
  "metadata": {
    "start_node_id": "greet",
    "total_nodes": 4,
    "total_edges": 4,
    "is_valid": true
  }
}"#;
