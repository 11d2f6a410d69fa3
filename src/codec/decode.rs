use crate::config::LabelConfig;
use crate::error::DecodeError;
use crate::model::{Position, Step, StepType, Transition};
use crate::store::IdGenerator;
use ahash::AHashSet;
use serde_json::{Map, Value};
use tracing::warn;

/// Accepted keys per canonical field, in lookup order. A label key holding
/// any string wins, even `""`; a type key must hold a non-empty name.
const LABEL_KEYS: &[&str] = &["label", "name", "id"];
const STEP_TYPE_KEYS: &[&str] = &["node_type", "nodeType"];

/// Canonical content produced by a successful decode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedFlow {
    pub steps: Vec<Step>,
    pub transitions: Vec<Transition>,
}

/// Parses an external flow document.
///
/// Transition targets are not checked against the declared steps; a dangling
/// `to_node_id` becomes a transition with an unresolved target.
pub fn decode(
    text: &str,
    labels: &LabelConfig,
    ids: &mut dyn IdGenerator,
) -> Result<DecodedFlow, DecodeError> {
    let root: Value = serde_json::from_str(text)?;
    let root = root.as_object().ok_or(DecodeError::NotAnObject)?;
    let entries = root
        .get("nodes")
        .ok_or(DecodeError::MissingNodes)?
        .as_array()
        .ok_or(DecodeError::NodesNotArray)?;

    let start_id = explicit_start_id(root);

    let mut steps = Vec::with_capacity(entries.len());
    let mut transitions = Vec::new();
    let mut transition_ids = AHashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let node = entry.as_object();
        let id = node
            .and_then(|n| n.get("id"))
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingNodeId { index })?;
        let node = node.ok_or(DecodeError::MissingNodeId { index })?;

        steps.push(decode_step(node, id, index, start_id));

        for (edge_index, edge) in edge_entries(node, id)?.iter().enumerate() {
            let target = edge
                .get("to_node_id")
                .and_then(Value::as_str)
                .ok_or_else(|| DecodeError::MissingEdgeTarget {
                    node_id: id.to_string(),
                    index: edge_index,
                })?;
            let label = edge
                .get("condition")
                .and_then(Value::as_str)
                .unwrap_or(labels.import_label.as_str());

            let transition_id = loop {
                let candidate = ids.transition_id(id, target);
                if transition_ids.insert(candidate.clone()) {
                    break candidate;
                }
            };
            transitions.push(Transition::new(transition_id, id, target, label));
        }
    }

    Ok(DecodedFlow { steps, transitions })
}

/// Deterministic placement given to the entry at `index` before any layout.
pub fn import_position(index: usize) -> Position {
    Position::new(
        100.0 + ((index * 250) % 800) as f64,
        100.0 + (index / 3) as f64 * 200.0,
    )
}

/// `metadata.start_node_id`, when it names a step.
///
/// Without it, the first entry is the start step.
fn explicit_start_id(root: &Map<String, Value>) -> Option<&str> {
    root.get("metadata")
        .and_then(Value::as_object)
        .and_then(|metadata| non_empty_str(metadata, "start_node_id"))
}

fn decode_step(node: &Map<String, Value>, id: &str, index: usize, start_id: Option<&str>) -> Step {
    let label = LABEL_KEYS
        .iter()
        .find_map(|key| node.get(*key).and_then(Value::as_str))
        .unwrap_or(id);
    let step_type = first_text(node, STEP_TYPE_KEYS)
        .map(|name| {
            name.parse().unwrap_or_else(|err| {
                warn!(step = id, %err, "falling back to llm step type");
                StepType::Llm
            })
        })
        .unwrap_or_default();
    let is_start = match start_id {
        Some(start) => start == id,
        None => index == 0,
    };

    let mut step = Step::new(id, step_type)
        .with_label(label)
        .with_description(str_or_empty(node, "description"))
        .with_prompt(str_or_empty(node, "prompt"))
        .at(import_position(index));
    step.is_start = is_start;
    step
}

/// The nested `edges` list of a node; absent or null means no edges.
fn edge_entries<'a>(
    node: &'a Map<String, Value>,
    node_id: &str,
) -> Result<Vec<&'a Map<String, Value>>, DecodeError> {
    let edges = match node.get("edges") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(edges)) => edges,
        Some(_) => {
            return Err(DecodeError::EdgesNotArray {
                node_id: node_id.to_string(),
            });
        }
    };

    edges
        .iter()
        .enumerate()
        .map(|(index, edge)| {
            edge.as_object().ok_or_else(|| DecodeError::MissingEdgeTarget {
                node_id: node_id.to_string(),
                index,
            })
        })
        .collect()
}

fn first_text<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| non_empty_str(object, key))
}

fn non_empty_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn str_or_empty<'a>(object: &'a Map<String, Value>, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or("")
}
