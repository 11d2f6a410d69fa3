use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_SUFFIX_LEN: usize = 9;

/// Source of fresh step and transition identifiers.
///
/// Generators do not need to guarantee uniqueness on their own: the document
/// keeps asking until it gets an id that is not in use.
pub trait IdGenerator: Send {
    fn step_id(&mut self) -> String;
    fn transition_id(&mut self, source: &str, target: &str) -> String;
}

/// Random ids of the form `node_k3j9x0q2m`.
pub struct RandomIds {
    rng: StdRng,
    counter: u64,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            counter: 0,
        }
    }

    /// A reproducible generator, mostly useful in tests and tools.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            counter: 0,
        }
    }

    fn suffix(&mut self) -> String {
        (0..RANDOM_SUFFIX_LEN)
            .map(|_| BASE36[self.rng.random_range(0..BASE36.len())] as char)
            .collect()
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn step_id(&mut self) -> String {
        format!("node_{}", self.suffix())
    }

    fn transition_id(&mut self, source: &str, target: &str) -> String {
        self.counter += 1;
        format!("e-{}-{}-{}", source, target, self.counter)
    }
}

/// Counting ids: `node_1`, `node_2`, ... and `e-a-b-1`, `e-b-c-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    steps: u64,
    transitions: u64,
}

impl IdGenerator for SequentialIds {
    fn step_id(&mut self) -> String {
        self.steps += 1;
        format!("node_{}", self.steps)
    }

    fn transition_id(&mut self, source: &str, target: &str) -> String {
        self.transitions += 1;
        format!("e-{}-{}-{}", source, target, self.transitions)
    }
}
