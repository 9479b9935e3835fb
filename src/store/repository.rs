//! NoteStore trait and result types.

use crate::domain::{Note, ParseTitleError};
use crate::infra::FsError;
use std::fmt;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during note store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The caller supplied an unusable title.
    #[error("invalid title: {0}")]
    InvalidTitle(#[from] ParseTitleError),

    /// No note exists under the requested title.
    #[error("note '{title}' does not exist")]
    NotFound { title: String },

    /// A note file could not be read or written.
    #[error("file storage error: {0}")]
    Fs(#[from] FsError),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Stored data could not be interpreted.
    #[error("corrupt stored note: {0}")]
    Corrupt(String),

    /// A previous holder of the store panicked mid-operation.
    #[error("note store lock poisoned")]
    Poisoned,
}

/// Broad category of a store error, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or malformed title.
    InvalidInput,
    /// Title absent from the store.
    NotFound,
    /// Persistence medium unreadable or unwritable.
    StorageFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::StorageFailure => write!(f, "storage failure"),
        }
    }
}

impl StoreError {
    /// Creates a not-found error for a title.
    pub fn not_found(title: impl Into<String>) -> Self {
        StoreError::NotFound {
            title: title.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidTitle(_) => ErrorKind::InvalidInput,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Fs(_)
            | StoreError::Database(_)
            | StoreError::Corrupt(_)
            | StoreError::Poisoned => ErrorKind::StorageFailure,
        }
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// SaveOutcome
// ===========================================

/// What a save did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No note existed under the title; one was created.
    Created,
    /// An existing note's content was replaced.
    Updated,
}

// ===========================================
// NoteStore Trait
// ===========================================

/// Durable storage of title-keyed notes.
///
/// Titles are normalized with [`Title`](crate::domain::Title) before use, so
/// every method accepts raw caller input. Mutations persist before returning.
/// Listing order is the order in which notes were first saved.
pub trait NoteStore {
    /// Inserts a note or replaces the content of an existing one.
    ///
    /// Overwriting is the defined behavior for an existing title, never an
    /// error. Content may be empty.
    fn save(&mut self, title: &str, content: &str) -> StoreResult<SaveOutcome>;

    /// Retrieves a note.
    ///
    /// Fails with `StoreError::NotFound` if there is no note under `title`.
    fn get(&self, title: &str) -> StoreResult<Note>;

    /// Returns every title in the store.
    fn list_titles(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .list_all()?
            .into_iter()
            .map(|note| note.into_parts().0)
            .collect())
    }

    /// Returns every note in the store.
    fn list_all(&self) -> StoreResult<Vec<Note>>;

    /// Removes a note.
    ///
    /// Fails with `StoreError::NotFound` if there is no note under `title`;
    /// deleting twice is an error the second time.
    fn delete(&mut self, title: &str) -> StoreResult<()>;

    /// Makes any buffered state durable.
    fn flush(&mut self) -> StoreResult<()> {
        Ok(())
    }

    /// Flushes and releases the underlying storage.
    fn close(mut self: Box<Self>) -> StoreResult<()> {
        self.flush()
    }
}

impl<S: NoteStore + ?Sized> NoteStore for Box<S> {
    fn save(&mut self, title: &str, content: &str) -> StoreResult<SaveOutcome> {
        (**self).save(title, content)
    }

    fn get(&self, title: &str) -> StoreResult<Note> {
        (**self).get(title)
    }

    fn list_titles(&self) -> StoreResult<Vec<String>> {
        (**self).list_titles()
    }

    fn list_all(&self) -> StoreResult<Vec<Note>> {
        (**self).list_all()
    }

    fn delete(&mut self, title: &str) -> StoreResult<()> {
        (**self).delete(title)
    }

    fn flush(&mut self) -> StoreResult<()> {
        (**self).flush()
    }

    fn close(self: Box<Self>) -> StoreResult<()> {
        S::close(*self)
    }
}
