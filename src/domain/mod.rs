//! Core types: Title, Note

mod note;
mod title;

pub use note::Note;
pub use title::{ParseTitleError, Title, sanitize};
