use crate::error::UnknownStepType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 2D canvas coordinate, top-left corner of the step box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The kind of work a step performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    #[default]
    Llm,
    Source,
    Knowledge,
    Condition,
    Input,
    Output,
    Filter,
}

impl StepType {
    pub const ALL: [StepType; 7] = [
        StepType::Llm,
        StepType::Source,
        StepType::Knowledge,
        StepType::Condition,
        StepType::Input,
        StepType::Output,
        StepType::Filter,
    ];

    /// The wire name of this type (`node_type` in exported JSON).
    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::Llm => "llm",
            StepType::Source => "source",
            StepType::Knowledge => "knowledge",
            StepType::Condition => "condition",
            StepType::Input => "input",
            StepType::Output => "output",
            StepType::Filter => "filter",
        }
    }

    /// Description given to freshly added steps of this type.
    pub fn default_description(&self) -> &'static str {
        match self {
            StepType::Llm => "Processes information using a language model.",
            StepType::Source => "Collects data from a specified source.",
            StepType::Knowledge => "Retrieves information from knowledge base.",
            StepType::Condition => "Evaluates logic to branch the flow.",
            _ => "Perform specialized operations.",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepType {
    type Err = UnknownStepType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownStepType(s.to_string()))
    }
}

/// A node of the authored flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub position: Position,
    pub label: String,
    pub description: String,
    pub prompt: String,
    pub step_type: StepType,
    pub is_start: bool,
}

impl Step {
    pub fn new(id: impl Into<String>, step_type: StepType) -> Self {
        Self {
            id: id.into(),
            position: Position::default(),
            label: String::new(),
            description: String::new(),
            prompt: String::new(),
            step_type,
            is_start: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn as_start(mut self) -> Self {
        self.is_start = true;
        self
    }

    /// Merges every field set in `patch` into this step.
    pub fn apply(&mut self, patch: StepPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(prompt) = patch.prompt {
            self.prompt = prompt;
        }
        if let Some(step_type) = patch.step_type {
            self.step_type = step_type;
        }
    }
}

/// A partial update for the editable fields of a `Step`.
///
/// Start-ness is not patchable; use `FlowDocument::set_start_step`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepPatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub step_type: Option<StepType>,
}

impl StepPatch {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn step_type(mut self, step_type: StepType) -> Self {
        self.step_type = Some(step_type);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.description.is_none()
            && self.prompt.is_none()
            && self.step_type.is_none()
    }
}
