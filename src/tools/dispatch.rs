//! Tool call dispatch over a note store.

use super::names;
use super::{ToolDefinition, ToolOutput, definitions};
use crate::domain::{ParseTitleError, sanitize};
use crate::store::{NoteStore, SaveOutcome, StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct SaveArgs {
    title: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct TitleArgs {
    title: String,
}

#[derive(Debug, Serialize)]
struct NoteView<'a> {
    title: &'a str,
    content: &'a str,
}

/// Note tools bound to a store.
///
/// The store sits behind a mutex, so one `NoteTools` can be shared between
/// threads and concurrent calls are applied one at a time.
pub struct NoteTools<S> {
    store: Mutex<S>,
}

impl<S: NoteStore> NoteTools<S> {
    /// Binds the tools to an opened store.
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Returns the definitions to publish to the model.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        definitions()
    }

    /// Runs the tool `name` with JSON `arguments`.
    ///
    /// Never fails: unknown tools, malformed arguments and store errors all
    /// come back as `ERROR:` outputs for the model to relay.
    pub fn call(&self, name: &str, arguments: Value) -> ToolOutput {
        debug!(tool = name, "tool call");

        let output = match name {
            names::SAVE_NOTE => parse_args::<SaveArgs>(name, arguments)
                .map(|args| self.save_note(&args.title, &args.content)),
            names::GET_NOTE => {
                parse_args::<TitleArgs>(name, arguments).map(|args| self.get_note(&args.title))
            }
            names::LIST_NOTE_TITLES => Ok(self.list_note_titles()),
            names::LIST_NOTES => Ok(self.list_notes()),
            names::DELETE_NOTE => parse_args::<TitleArgs>(name, arguments)
                .map(|args| self.delete_note(&args.title)),
            _ => Err(ToolOutput::error(format!(
                "Unknown tool '{}'. Available tools: {}.",
                name,
                names::ALL.join(", ")
            ))),
        }
        .unwrap_or_else(|error| error);

        if output.is_error {
            warn!(tool = name, result = %output, "tool call failed");
        }
        output
    }

    /// Saves a note, creating or overwriting it.
    pub fn save_note(&self, title: &str, content: &str) -> ToolOutput {
        match self.with_store(|store| store.save(title, content)) {
            Ok(SaveOutcome::Created) => {
                ToolOutput::success(format!("Note '{}' saved.", sanitize(title)))
            }
            Ok(SaveOutcome::Updated) => ToolOutput::success(format!(
                "Note '{}' saved (updated existing note).",
                sanitize(title)
            )),
            Err(e) => failure("save", title, e),
        }
    }

    /// Returns a note as a JSON object with `title` and `content`.
    pub fn get_note(&self, title: &str) -> ToolOutput {
        match self.with_store(|store| store.get(title)) {
            Ok(note) => to_json(&NoteView {
                title: note.title(),
                content: note.content(),
            }),
            Err(e) => failure("get", title, e),
        }
    }

    /// Returns every title as a JSON array.
    pub fn list_note_titles(&self) -> ToolOutput {
        match self.with_store(|store| store.list_titles()) {
            Ok(titles) => to_json(&titles),
            Err(e) => ToolOutput::error(format!("Could not list note titles. {}", e)),
        }
    }

    /// Returns every note as a JSON array of `title`/`content` objects.
    pub fn list_notes(&self) -> ToolOutput {
        match self.with_store(|store| store.list_all()) {
            Ok(notes) => {
                let views: Vec<_> = notes
                    .iter()
                    .map(|note| NoteView {
                        title: note.title(),
                        content: note.content(),
                    })
                    .collect();
                to_json(&views)
            }
            Err(e) => ToolOutput::error(format!("Could not list notes. {}", e)),
        }
    }

    /// Deletes a note.
    pub fn delete_note(&self, title: &str) -> ToolOutput {
        match self.with_store(|store| store.delete(title)) {
            Ok(()) => ToolOutput::success(format!("Note '{}' deleted.", sanitize(title))),
            Err(e) => failure("delete", title, e),
        }
    }

    /// Flushes and closes the underlying store.
    pub fn close(self) -> StoreResult<()> {
        let store = self.store.into_inner().map_err(|_| StoreError::Poisoned)?;
        S::close(Box::new(store))
    }

    fn with_store<T>(&self, f: impl FnOnce(&mut S) -> StoreResult<T>) -> StoreResult<T> {
        let mut store = self.store.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut store)
    }
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolOutput> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolOutput::error(format!("Invalid arguments for {}: {}", tool, e)))
}

fn to_json<T: Serialize>(value: &T) -> ToolOutput {
    match serde_json::to_string(value) {
        Ok(json) => ToolOutput::data(json),
        Err(e) => ToolOutput::error(format!("Could not encode result. {}", e)),
    }
}

fn failure(action: &str, title: &str, error: StoreError) -> ToolOutput {
    match &error {
        StoreError::InvalidTitle(ParseTitleError::Empty) => {
            if action == "save" {
                ToolOutput::error(
                    "Title cannot be an empty string. Generate a title that describes the \
                     contents of the note first, and use `list_note_titles` to see existing \
                     titles so you do not overwrite a note by accident.",
                )
            } else {
                ToolOutput::error(
                    "Title cannot be an empty string. Use `list_note_titles` to see existing titles.",
                )
            }
        }
        StoreError::NotFound { .. } => {
            ToolOutput::error(format!("Note '{}' does not exist.", sanitize(title)))
        }
        _ => ToolOutput::error(format!("Could not {} note. {}", action, error)),
    }
}
