//! Command handlers for the CLI.

mod completions;
mod notes;
mod tools;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::store::{Backend, NoteStore, open_store};

// Re-export public items
pub use completions::handle_completions;
pub use notes::{handle_get, handle_list, handle_remove, handle_save, handle_titles};
pub use tools::{handle_call, handle_tools};

// ===========================================
// Shared Utilities
// ===========================================

/// Where the notes live, resolved from CLI arguments and config.
#[derive(Debug, Clone)]
pub struct StoreLocation {
    pub dir: PathBuf,
    pub backend: Backend,
}

impl StoreLocation {
    pub fn new(dir: PathBuf, backend: Backend) -> Self {
        Self { dir, backend }
    }

    /// Opens the configured store.
    pub(crate) fn open(&self) -> Result<Box<dyn NoteStore + Send>> {
        open_store(self.backend, &self.dir).with_context(|| {
            format!(
                "failed to open {} note store at {}",
                self.backend,
                self.dir.display()
            )
        })
    }
}

/// Closes a store, attaching context to any failure.
pub(crate) fn close_store(store: Box<dyn NoteStore + Send>) -> Result<()> {
    store.close().context("failed to close note store")
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
