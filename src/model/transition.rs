use serde::{Deserialize, Serialize};

/// A directed edge between two steps, labelled with its condition text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
}

impl Transition {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    /// Whether `step_id` is either endpoint of this transition.
    pub fn touches(&self, step_id: &str) -> bool {
        self.source == step_id || self.target == step_id
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Swaps source and target in place.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }
}
