//! Note store trait and its file and SQLite backends

mod file;
mod repository;
mod schema;
mod sqlite;


use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub use file::FileStore;
pub use repository::{ErrorKind, NoteStore, SaveOutcome, StoreError, StoreResult};
pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use sqlite::SqliteStore;

/// Name of the database file the SQLite backend keeps in the notes directory.
pub const SQLITE_FILE_NAME: &str = "notes.db";

/// Storage medium behind a note store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON document per note
    #[default]
    Files,
    /// A single SQLite database file
    Sqlite,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Files => write!(f, "files"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Opens the store for `backend` rooted at the notes directory `dir`.
pub fn open_store(backend: Backend, dir: &Path) -> StoreResult<Box<dyn NoteStore + Send>> {
    match backend {
        Backend::Files => Ok(Box::new(FileStore::open(dir)?)),
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(&dir.join(SQLITE_FILE_NAME))?)),
    }
}
