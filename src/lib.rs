//! # flowdraft - Flow Graph State & Validation Engine
//!
//! **flowdraft** is the engine behind a visual editor for directed flow graphs
//! (conversational or process flows). It owns the graph document, checks it for
//! structural problems, lays it out in ranks and maps it to and from a JSON
//! schema. Rendering, forms and file handling live elsewhere and talk to the
//! engine only through the `FlowDocument` API.
//!
//! ## Core Workflow
//!
//! 1.  **Create a document**: `FlowDocument::new()` or `FlowDocument::builder()` with an
//!     `EditorConfig` and an `IdGenerator` of your choice.
//! 2.  **Edit**: add, update and delete steps and transitions. Diagnostics are recomputed
//!     after every change to the graph.
//! 3.  **Organize**: `auto_layout` places every step on a top-to-bottom layered grid.
//! 4.  **Save and load**: `export` renders the wire schema, `load_json` replaces the content
//!     with an imported document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowdraft::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut doc = FlowDocument::builder()
//!         .with_id_generator(Box::new(SequentialIds::default()))
//!         .seeded(false)
//!         .build();
//!
//!     let greet = doc.add_step(Position::new(0.0, 0.0), StepType::Llm);
//!     let lookup = doc.add_step(Position::new(0.0, 200.0), StepType::Knowledge);
//!     doc.add_transition(&greet, &lookup);
//!     doc.set_start_step(&greet);
//!     doc.tick();
//!
//!     if !doc.is_valid() {
//!         println!("{}", doc.diagnostics());
//!     }
//!
//!     println!("{}", doc.export().to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod prelude;
pub mod store;
pub mod validation;
