//! Mapping between the in-memory document and the external JSON schema.
//!
//! `encode` is the save path and always succeeds. `decode` is the load path:
//! it normalizes loosely shaped input into canonical steps and transitions,
//! or fails without producing anything.

mod decode;
mod encode;
mod wire;

pub use decode::{DecodedFlow, decode, import_position};
pub use encode::{encode, export_file_name};
pub use wire::{ExportEdge, ExportMetadata, ExportNode, FlowExport};
