//! Note title type and its storage key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// A validated note title.
///
/// Titles are the only identifier a caller has for a note, so they are
/// normalized before use:
///
/// - `#` characters become spaces (callers often pass Markdown headers)
/// - Surrounding whitespace is trimmed
///
/// Two titles are equal when their storage keys are equal. The key is the
/// normalized title lowercased with spaces replaced by underscores, so
/// `Groceries`, `groceries` and `# Groceries` all address the same note.
///
/// # Examples
///
/// ```
/// use jotbox::domain::Title;
///
/// let title = Title::new("# Weekly Plan ").unwrap();
/// assert_eq!(title.as_str(), "Weekly Plan");
/// assert_eq!(title.key(), "weekly_plan");
///
/// assert_eq!(title, Title::new("weekly plan").unwrap());
/// ```
#[derive(Clone)]
pub struct Title {
    display: String,
    key: String,
}

/// Error returned when a title cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTitleError {
    #[error("title cannot be empty")]
    Empty,

    #[error("title cannot contain control characters (found {found:?})")]
    ControlCharacter { found: char },
}

impl Title {
    /// Creates a title from caller input.
    ///
    /// # Errors
    ///
    /// Returns `ParseTitleError::Empty` if nothing is left after normalization,
    /// and `ParseTitleError::ControlCharacter` for newlines, tabs and other
    /// control characters.
    pub fn new(s: &str) -> Result<Self, ParseTitleError> {
        let display = sanitize(s);

        if display.is_empty() {
            return Err(ParseTitleError::Empty);
        }

        if let Some(found) = display.chars().find(|c| c.is_control()) {
            return Err(ParseTitleError::ControlCharacter { found });
        }

        let key = display.to_lowercase().replace(' ', "_");
        Ok(Self { display, key })
    }

    /// Returns the normalized title as shown to callers.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Returns the storage key used to address the note.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Replaces Markdown header markers with spaces and trims the result.
pub fn sanitize(title: &str) -> String {
    title.replace('#', " ").trim().to_string()
}

impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Title {}

impl Hash for Title {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title(\"{}\")", self.display)
    }
}

impl FromStr for Title {
    type Err = ParseTitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Title {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.display)
    }
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
