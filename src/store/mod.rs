//! The flow document and its mutation API.
//!
//! A `FlowDocument` is the single source of truth for steps, transitions,
//! selection and diagnostics. Callers read through accessors and change
//! things only through the methods below; every method that touches steps or
//! transitions recomputes the diagnostics before returning.

use crate::codec::{self, FlowExport};
use crate::config::EditorConfig;
use crate::error::DecodeError;
use crate::layout;
use crate::model::{Position, Step, StepPatch, StepType, Transition};
use crate::validation::{self, Diagnostics};
use tracing::{debug, info};

mod ids;
mod selection;

pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use selection::Selection;

pub const SEED_STEP_ID: &str = "start-node";

/// Builds a `FlowDocument`.
pub struct FlowDocumentBuilder {
    config: EditorConfig,
    ids: Box<dyn IdGenerator>,
    seeded: Option<bool>,
}

impl FlowDocumentBuilder {
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            ids: Box::new(RandomIds::new()),
            seeded: None,
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Overrides `EditorConfig::seed_start_step`.
    pub fn seeded(mut self, seeded: bool) -> Self {
        self.seeded = Some(seeded);
        self
    }

    pub fn build(self) -> FlowDocument {
        let seeded = self.seeded.unwrap_or(self.config.seed_start_step);
        let steps = if seeded { vec![seed_step()] } else { Vec::new() };
        let mut document = FlowDocument {
            steps,
            transitions: Vec::new(),
            selection: Selection::Nothing,
            diagnostics: Diagnostics::new(),
            config: self.config,
            ids: self.ids,
            layout_scheduled: false,
        };
        document.revalidate();
        document
    }
}

impl Default for FlowDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The step every fresh editor session starts with.
fn seed_step() -> Step {
    Step::new(SEED_STEP_ID, StepType::Llm)
        .with_label("Start Node")
        .with_description("Initial entry point of the flow.")
        .with_prompt("Welcome! How can I help you today?")
        .at(Position::new(250.0, 150.0))
        .as_start()
}

pub struct FlowDocument {
    steps: Vec<Step>,
    transitions: Vec<Transition>,
    selection: Selection,
    diagnostics: Diagnostics,
    config: EditorConfig,
    ids: Box<dyn IdGenerator>,
    layout_scheduled: bool,
}

impl FlowDocument {
    pub fn builder() -> FlowDocumentBuilder {
        FlowDocumentBuilder::new()
    }

    /// A document with default config, random ids and the seeded start step.
    pub fn new() -> Self {
        FlowDocumentBuilder::new().build()
    }

    // --- Read state ---

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn transition(&self, id: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.id == id)
    }

    pub fn start_step(&self) -> Option<&Step> {
        self.steps.iter().find(|s| s.is_start)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_step(&self) -> Option<&Step> {
        self.selection.step_id().and_then(|id| self.step(id))
    }

    pub fn selected_transition(&self) -> Option<&Transition> {
        self.selection.transition_id().and_then(|id| self.transition(id))
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_valid()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Whether a layout is waiting for the next `tick`.
    pub fn layout_scheduled(&self) -> bool {
        self.layout_scheduled
    }

    // --- Steps ---

    /// Adds a step of `step_type` at `position` and returns its new id.
    pub fn add_step(&mut self, position: Position, step_type: StepType) -> String {
        let id = self.fresh_step_id();
        let label = format!(
            "{} Step {}",
            step_type.as_str().to_uppercase(),
            self.steps.len() + 1
        );
        let step = Step::new(id.clone(), step_type)
            .with_label(label)
            .with_description(step_type.default_description())
            .at(position);

        debug!(step = %id, %step_type, "added step");
        self.steps.push(step);
        self.revalidate();
        id
    }

    /// Merges `patch` into the step with `id`. Unknown ids are ignored.
    pub fn update_step(&mut self, id: &str, patch: StepPatch) {
        if patch.is_empty() {
            debug!(step = id, "empty patch ignored");
            return;
        }
        let Some(step) = self.steps.iter_mut().find(|s| s.id == id) else {
            debug!(step = id, "update ignored, no such step");
            return;
        };
        step.apply(patch);
        debug!(step = id, "updated step");
        self.revalidate();
    }

    /// Moves a step, as a manual drag does. Unknown ids are ignored.
    pub fn move_step(&mut self, id: &str, position: Position) {
        match self.steps.iter_mut().find(|s| s.id == id) {
            Some(step) => step.position = position,
            None => debug!(step = id, "move ignored, no such step"),
        }
    }

    /// Removes the step and every transition touching it.
    pub fn delete_step(&mut self, id: &str) {
        if self.step(id).is_none() {
            debug!(step = id, "delete ignored, no such step");
            return;
        }
        let transitions_before = self.transitions.len();
        self.steps.retain(|s| s.id != id);
        self.transitions.retain(|t| !t.touches(id));
        if self.selection.step_id() == Some(id) {
            self.selection = Selection::Nothing;
        }

        debug!(
            step = id,
            transitions_removed = transitions_before - self.transitions.len(),
            "deleted step"
        );
        self.revalidate();
    }

    /// Makes `id` the only start step.
    ///
    /// Every transition into the new start step is reversed so that it leaves
    /// the start step instead, and a layout is scheduled for the next `tick`.
    /// Unknown ids are ignored.
    pub fn set_start_step(&mut self, id: &str) {
        if self.step(id).is_none() {
            debug!(step = id, "start assignment ignored, no such step");
            return;
        }
        for step in &mut self.steps {
            step.is_start = step.id == id;
        }

        let mut reversed = 0;
        for transition in self.transitions.iter_mut().filter(|t| t.target == id) {
            transition.reverse();
            reversed += 1;
        }

        debug!(step = id, reversed, "assigned start step");
        self.layout_scheduled = true;
        self.revalidate();
    }

    // --- Transitions ---

    /// Connects `source` to `target` and returns the new transition's id.
    ///
    /// Parallel transitions and self-loops are allowed.
    pub fn add_transition(&mut self, source: &str, target: &str) -> String {
        let id = self.fresh_transition_id(source, target);
        let transition = Transition::new(
            id.clone(),
            source,
            target,
            self.config.labels.connect_label.clone(),
        );

        debug!(transition = %id, source, target, "added transition");
        self.transitions.push(transition);
        self.revalidate();
        id
    }

    pub fn update_transition_label(&mut self, id: &str, label: impl Into<String>) {
        let Some(transition) = self.transitions.iter_mut().find(|t| t.id == id) else {
            debug!(transition = id, "label update ignored, no such transition");
            return;
        };
        transition.label = label.into();
        self.revalidate();
    }

    pub fn delete_transition(&mut self, id: &str) {
        if self.transition(id).is_none() {
            debug!(transition = id, "delete ignored, no such transition");
            return;
        }
        self.transitions.retain(|t| t.id != id);
        if self.selection.transition_id() == Some(id) {
            self.selection = Selection::Nothing;
        }
        debug!(transition = id, "deleted transition");
        self.revalidate();
    }

    // --- Selection ---

    /// Selects a step, or clears the selection with `None`.
    pub fn select_step(&mut self, id: Option<&str>) {
        self.selection = id.map_or(Selection::Nothing, |id| Selection::Step(id.to_string()));
    }

    /// Selects a transition, or clears the selection with `None`.
    pub fn select_transition(&mut self, id: Option<&str>) {
        self.selection = id.map_or(Selection::Nothing, |id| {
            Selection::Transition(id.to_string())
        });
    }

    // --- Bulk operations ---

    /// Overwrites all steps and transitions. Nothing is checked.
    pub fn replace_all(&mut self, steps: Vec<Step>, transitions: Vec<Transition>) {
        self.steps = steps;
        self.transitions = transitions;
        self.revalidate();
    }

    /// Recomputes the diagnostics and reports whether the document is valid.
    pub fn validate(&mut self) -> bool {
        self.revalidate();
        self.is_valid()
    }

    /// Repositions every step with the layered layout, immediately.
    pub fn auto_layout(&mut self) {
        layout::apply_layout(&mut self.steps, &self.transitions, &self.config.layout);
        self.layout_scheduled = false;
        info!(steps = self.steps.len(), "applied auto layout");
    }

    /// Runs work scheduled by earlier mutations. Returns `true` if a layout ran.
    pub fn tick(&mut self) -> bool {
        if !self.layout_scheduled {
            return false;
        }
        self.auto_layout();
        true
    }

    // --- Import / export ---

    /// Replaces the content with a decoded JSON document and lays it out.
    ///
    /// On error the document is left exactly as it was.
    pub fn load_json(&mut self, text: &str) -> Result<(), DecodeError> {
        let decoded = codec::decode(text, &self.config.labels, self.ids.as_mut())?;
        info!(
            steps = decoded.steps.len(),
            transitions = decoded.transitions.len(),
            "imported flow document"
        );
        self.replace_all(decoded.steps, decoded.transitions);
        self.auto_layout();
        Ok(())
    }

    /// The document in wire form.
    pub fn export(&self) -> FlowExport {
        codec::encode(&self.steps, &self.transitions, &self.diagnostics)
    }

    fn revalidate(&mut self) {
        self.diagnostics = validation::validate(&self.steps, &self.transitions);
    }

    fn fresh_step_id(&mut self) -> String {
        loop {
            let id = self.ids.step_id();
            if self.step(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_transition_id(&mut self, source: &str, target: &str) -> String {
        loop {
            let id = self.ids.transition_id(source, target);
            if self.transition(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for FlowDocument {
    fn default() -> Self {
        Self::new()
    }
}
