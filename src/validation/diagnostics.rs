use std::collections::BTreeMap;
use std::fmt;

/// Where a diagnostic applies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// Document-wide issues.
    Global,
    Step(String),
    Transition(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Step(id) => write!(f, "step '{}'", id),
            Scope::Transition(id) => write!(f, "transition '{}'", id),
        }
    }
}

/// The structural issues found in a document, keyed by scope.
///
/// A document is valid iff this mapping is empty. It is always rebuilt from
/// scratch, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    issues: BTreeMap<Scope, Vec<String>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scope: Scope, issue: impl Into<String>) {
        self.issues.entry(scope).or_default().push(issue.into());
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn get(&self, scope: &Scope) -> &[String] {
        self.issues.get(scope).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn global(&self) -> &[String] {
        self.get(&Scope::Global)
    }

    pub fn for_step(&self, step_id: &str) -> &[String] {
        self.get(&Scope::Step(step_id.to_string()))
    }

    pub fn for_transition(&self, transition_id: &str) -> &[String] {
        self.get(&Scope::Transition(transition_id.to_string()))
    }

    /// Number of scopes with issues, counting all global issues as one.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Scope, &[String])> {
        self.issues.iter().map(|(scope, list)| (scope, list.as_slice()))
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "Schema Valid");
        }
        writeln!(f, "{} Issues found", self.issue_count())?;
        for (scope, list) in &self.issues {
            for issue in list {
                writeln!(f, "  [{}] {}", scope, issue)?;
            }
        }
        Ok(())
    }
}
