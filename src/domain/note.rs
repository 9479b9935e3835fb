//! Note struct: a titled text blob with store-managed timestamps.

use crate::domain::Title;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored note.
///
/// The title is the caller's handle for the note; content is free-form text
/// (Markdown or plain) and may be empty. Timestamps are maintained by the
/// store: `created` is fixed on first save, `modified` moves on every save.
///
/// Documents without timestamps deserialize with the Unix epoch for both,
/// so plain `{"title", "content"}` files remain readable.
///
/// # Examples
///
/// ```
/// use jotbox::domain::{Note, Title};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::new(&Title::new("Groceries").unwrap(), "milk, eggs", now, now);
/// assert_eq!(note.title(), "Groceries");
/// assert_eq!(note.content(), "milk, eggs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    content: String,
    #[serde(default)]
    created: DateTime<Utc>,
    #[serde(default)]
    modified: DateTime<Utc>,
}

impl Note {
    /// Creates a note from a validated title.
    pub fn new(
        title: &Title,
        content: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.as_str().to_string(),
            content: content.into(),
            created,
            modified,
        }
    }

    /// Returns a copy of this note carrying new content.
    ///
    /// The title takes the caller's latest spelling; `created` is preserved.
    pub fn overwritten(
        &self,
        title: &Title,
        content: impl Into<String>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self::new(title, content, self.created, modified)
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was first saved.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last saved.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Consumes the note, returning `(title, content)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}
