use thiserror::Error;

/// Errors that can occur while decoding an external flow document.
///
/// A failed decode never touches the current document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Failed to parse flow JSON: {0}")]
    Json(String),

    #[error("Flow document must be a JSON object")]
    NotAnObject,

    #[error("Flow document has no 'nodes' field")]
    MissingNodes,

    #[error("Flow document field 'nodes' must be an array")]
    NodesNotArray,

    #[error("Node at index {index} has no string 'id'")]
    MissingNodeId { index: usize },

    #[error("Field 'edges' of node '{node_id}' must be an array")]
    EdgesNotArray { node_id: String },

    #[error("Edge {index} of node '{node_id}' has no string 'to_node_id'")]
    MissingEdgeTarget { node_id: String, index: usize },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err.to_string())
    }
}

/// Errors that can occur when rendering an encoded document to text.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize flow document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur while loading an `EditorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A step type name outside the fixed enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown step type '{0}'")]
pub struct UnknownStepType(pub String);
