//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types of the flowdraft crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowdraft::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//!
//! let mut doc = FlowDocument::new();
//! doc.load_json(&json)?;
//!
//! for (scope, issues) in doc.diagnostics().iter() {
//!     println!("{}: {:?}", scope, issues);
//! }
//! # Ok(())
//! # }
//! ```

// Document and its mutation API
pub use crate::store::{FlowDocument, IdGenerator, RandomIds, Selection, SequentialIds};

// Graph model
pub use crate::model::{Position, Step, StepPatch, StepType, Transition};

// Validation, layout and codec
pub use crate::codec::{FlowExport, decode, encode};
pub use crate::layout::{LayoutConfig, apply_layout, compute_layout};
pub use crate::validation::{Diagnostics, Scope, validate};

// Configuration
pub use crate::config::{EditorConfig, LabelConfig};

// Error types
pub use crate::error::{ConfigError, DecodeError, ExportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
