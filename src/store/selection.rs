/// What the user currently has selected. Steps and transitions are never
/// selected at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Nothing,
    Step(String),
    Transition(String),
}

impl Selection {
    pub fn step_id(&self) -> Option<&str> {
        match self {
            Selection::Step(id) => Some(id),
            _ => None,
        }
    }

    pub fn transition_id(&self) -> Option<&str> {
        match self {
            Selection::Transition(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Nothing)
    }
}
