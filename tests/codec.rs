//! Tests for the JSON schema codec.
mod common;
use common::*;
use flowdraft::codec::{export_file_name, import_position};
use flowdraft::prelude::*;
use serde_json::{Value, json};

fn decode_str(text: &str) -> std::result::Result<flowdraft::codec::DecodedFlow, DecodeError> {
    decode(text, &LabelConfig::default(), &mut SequentialIds::default())
}

#[test]
fn test_encode_nests_outgoing_edges() {
    let (steps, transitions) = create_chain();
    let export = encode(&steps, &transitions, &validate(&steps, &transitions));

    assert_eq!(export.nodes.len(), 3);
    let a = &export.nodes[0];
    assert_eq!(a.id, "a");
    assert_eq!(a.label, "A");
    assert_eq!(a.node_type, StepType::Llm);
    assert_eq!(a.edges.len(), 1);
    assert_eq!(a.edges[0].to_node_id, "b");
    assert_eq!(a.edges[0].condition, "a to b");
    assert!(export.nodes[2].edges.is_empty());

    assert_eq!(export.metadata.start_node_id.as_deref(), Some("a"));
    assert_eq!(export.metadata.total_nodes, 3);
    assert_eq!(export.metadata.total_edges, 2);
    assert!(export.metadata.is_valid);
}

#[test]
fn test_encode_wire_shape() {
    let steps = vec![step("solo").with_prompt("hello")];
    let export = encode(&steps, &[], &validate(&steps, &[]));
    let value: Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "nodes": [{
                "id": "solo",
                "label": "SOLO",
                "node_type": "llm",
                "description": "Does solo",
                "prompt": "hello",
                "edges": []
            }],
            "metadata": {
                "start_node_id": null,
                "total_nodes": 1,
                "total_edges": 0,
                "is_valid": false
            }
        })
    );
}

#[test]
fn test_pretty_export_uses_two_space_indent() {
    let (steps, transitions) = create_chain();
    let text = encode(&steps, &transitions, &Diagnostics::new())
        .to_json_pretty()
        .unwrap();
    assert!(text.starts_with("{\n  \"nodes\": ["));
}

#[test]
fn test_decode_rejects_malformed_input() {
    assert!(matches!(decode_str("{not json"), Err(DecodeError::Json(_))));
    assert!(matches!(decode_str("{}"), Err(DecodeError::MissingNodes)));
    assert!(matches!(decode_str("[]"), Err(DecodeError::NotAnObject)));
    assert!(matches!(
        decode_str(r#"{"nodes": 3}"#),
        Err(DecodeError::NodesNotArray)
    ));
    assert!(matches!(
        decode_str(r#"{"nodes": [{"label": "no id"}]}"#),
        Err(DecodeError::MissingNodeId { index: 0 })
    ));
}

#[test]
fn test_decode_empty_node_list() {
    let decoded = decode_str(r#"{"nodes": []}"#).unwrap();
    assert!(decoded.steps.is_empty());
    assert!(decoded.transitions.is_empty());
}

#[test]
fn test_decode_full_document() {
    let decoded = decode_str(SUPPORT_FLOW_JSON).unwrap();

    assert_eq!(decoded.steps.len(), 4);
    let classify = &decoded.steps[1];
    assert_eq!(classify.id, "classify");
    assert_eq!(classify.label, "Classify");
    assert_eq!(classify.step_type, StepType::Condition);
    assert_eq!(classify.description, "Route by intent");

    let starts: Vec<_> = decoded.steps.iter().filter(|s| s.is_start).collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].id, "greet");

    assert_eq!(decoded.transitions.len(), 4);
    let docs_edge = decoded
        .transitions
        .iter()
        .find(|t| t.source == "docs")
        .unwrap();
    assert_eq!(docs_edge.target, "handoff");
    assert_eq!(docs_edge.label, "Transition");
}

#[test]
fn test_decode_accepts_legacy_aliases() {
    let text = r#"{"nodes": [
        {"id": "a", "name": "Alpha", "nodeType": "source"},
        {"id": "b", "label": null, "name": "Beta", "node_type": "", "nodeType": "filter"},
        {"id": "c"},
        {"id": "d", "label": "", "name": "Delta"}
    ]}"#;
    let decoded = decode_str(text).unwrap();

    assert_eq!(decoded.steps[0].label, "Alpha");
    assert_eq!(decoded.steps[0].step_type, StepType::Source);
    assert_eq!(decoded.steps[1].label, "Beta");
    assert_eq!(decoded.steps[1].step_type, StepType::Filter);
    assert_eq!(decoded.steps[2].label, "c");
    assert_eq!(decoded.steps[2].step_type, StepType::Llm);
    assert_eq!(decoded.steps[2].description, "");
    assert_eq!(decoded.steps[2].prompt, "");
    // A present label is kept even when empty
    assert_eq!(decoded.steps[3].label, "");
}

#[test]
fn test_decode_keeps_empty_condition() {
    let decoded = decode_str(
        r#"{"nodes": [{"id": "a", "edges": [
            {"to_node_id": "a", "condition": ""},
            {"to_node_id": "a", "condition": null},
            {"to_node_id": "a"}
        ]}]}"#,
    )
    .unwrap();
    let labels: Vec<&str> = decoded.transitions.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["", "Transition", "Transition"]);
}

#[test]
fn test_decode_unknown_type_falls_back_to_llm() {
    let decoded = decode_str(r#"{"nodes": [{"id": "a", "node_type": "teleport"}]}"#).unwrap();
    assert_eq!(decoded.steps[0].step_type, StepType::Llm);
}

#[test]
fn test_decode_first_entry_is_start_without_metadata() {
    let decoded = decode_str(r#"{"nodes": [{"id": "x"}, {"id": "y"}]}"#).unwrap();
    assert!(decoded.steps[0].is_start);
    assert!(!decoded.steps[1].is_start);

    let decoded = decode_str(
        r#"{"nodes": [{"id": "x"}, {"id": "y"}], "metadata": {"start_node_id": ""}}"#,
    )
    .unwrap();
    assert!(decoded.steps[0].is_start);
}

#[test]
fn test_decode_explicit_start_may_match_nothing() {
    let decoded = decode_str(
        r#"{"nodes": [{"id": "x"}, {"id": "y"}], "metadata": {"start_node_id": "zzz"}}"#,
    )
    .unwrap();
    assert!(decoded.steps.iter().all(|s| !s.is_start));
}

#[test]
fn test_decode_assigns_positions_by_index() {
    let nodes: Vec<Value> = (0..7).map(|i| json!({ "id": format!("s{}", i) })).collect();
    let decoded = decode_str(&json!({ "nodes": nodes }).to_string()).unwrap();

    assert_eq!(decoded.steps[0].position, Position::new(100.0, 100.0));
    assert_eq!(decoded.steps[1].position, Position::new(350.0, 100.0));
    assert_eq!(decoded.steps[4].position, Position::new(300.0, 300.0));
    for (i, step) in decoded.steps.iter().enumerate() {
        assert_eq!(step.position, import_position(i));
    }
}

#[test]
fn test_decode_keeps_dangling_targets() {
    let decoded =
        decode_str(r#"{"nodes": [{"id": "a", "edges": [{"to_node_id": "nowhere", "condition": "go"}]}]}"#)
            .unwrap();
    assert_eq!(decoded.transitions.len(), 1);
    assert_eq!(decoded.transitions[0].target, "nowhere");
    assert_eq!(decoded.transitions[0].label, "go");
}

#[test]
fn test_decode_generates_unique_transition_ids() {
    let decoded = decode_str(
        r#"{"nodes": [
            {"id": "a", "edges": [{"to_node_id": "b"}, {"to_node_id": "b"}]},
            {"id": "b", "edges": null}
        ]}"#,
    )
    .unwrap();
    assert_eq!(decoded.transitions.len(), 2);
    assert_ne!(decoded.transitions[0].id, decoded.transitions[1].id);
}

#[test]
fn test_decode_rejects_malformed_edges() {
    assert!(matches!(
        decode_str(r#"{"nodes": [{"id": "a", "edges": "b"}]}"#),
        Err(DecodeError::EdgesNotArray { node_id }) if node_id == "a"
    ));
    assert!(matches!(
        decode_str(r#"{"nodes": [{"id": "a", "edges": [{"condition": "x"}]}]}"#),
        Err(DecodeError::MissingEdgeTarget { index: 0, .. })
    ));
}

#[test]
fn test_decode_uses_configured_import_label() {
    let labels = LabelConfig {
        import_label: "next".to_string(),
        ..LabelConfig::default()
    };
    let decoded = decode(
        r#"{"nodes": [{"id": "a", "edges": [{"to_node_id": "a"}]}]}"#,
        &labels,
        &mut SequentialIds::default(),
    )
    .unwrap();
    assert_eq!(decoded.transitions[0].label, "next");
}

#[test]
fn test_export_file_name() {
    assert_eq!(export_file_name(1718000000000), "flow-1718000000000.json");
}
