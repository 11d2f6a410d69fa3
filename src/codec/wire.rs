use crate::error::ExportError;
use crate::model::StepType;
use serde::{Deserialize, Serialize};

/// Top-level exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowExport {
    pub nodes: Vec<ExportNode>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    pub label: String,
    pub node_type: StepType,
    pub description: String,
    pub prompt: String,
    pub edges: Vec<ExportEdge>,
}

/// An outgoing transition, nested under its source node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub to_node_id: String,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub start_node_id: Option<String>,
    pub total_nodes: usize,
    pub total_edges: usize,
    pub is_valid: bool,
}

impl FlowExport {
    /// Two-space indented JSON, as shown in the preview panel.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }
}
