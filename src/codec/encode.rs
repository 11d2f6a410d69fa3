use super::wire::{ExportEdge, ExportMetadata, ExportNode, FlowExport};
use crate::model::{Step, Transition};
use crate::validation::Diagnostics;

/// Renders a document into the wire schema.
///
/// Each step carries its outgoing transitions; `is_valid` mirrors the given
/// diagnostics.
pub fn encode(steps: &[Step], transitions: &[Transition], diagnostics: &Diagnostics) -> FlowExport {
    let nodes = steps
        .iter()
        .map(|step| ExportNode {
            id: step.id.clone(),
            label: step.label.clone(),
            node_type: step.step_type,
            description: step.description.clone(),
            prompt: step.prompt.clone(),
            edges: transitions
                .iter()
                .filter(|t| t.source == step.id)
                .map(|t| ExportEdge {
                    to_node_id: t.target.clone(),
                    condition: t.label.clone(),
                })
                .collect(),
        })
        .collect();

    FlowExport {
        nodes,
        metadata: ExportMetadata {
            start_node_id: steps.iter().find(|s| s.is_start).map(|s| s.id.clone()),
            total_nodes: steps.len(),
            total_edges: transitions.len(),
            is_valid: diagnostics.is_valid(),
        },
    }
}

/// File name used when downloading an export, e.g. `flow-1718000000000.json`.
pub fn export_file_name(unix_millis: u128) -> String {
    format!("flow-{}.json", unix_millis)
}
