//! Function-calling surface for a host LLM runtime.
//!
//! A host publishes [`definitions`] to the model, then forwards each tool
//! call the model makes to [`NoteTools::call`]. Results are plain strings
//! meant to be read by the model: `SUCCESS:`/`ERROR:` messages or JSON.

mod definitions;
mod dispatch;
pub mod names;
mod output;

pub use definitions::{ToolDefinition, definitions};
pub use dispatch::NoteTools;
pub use output::ToolOutput;
