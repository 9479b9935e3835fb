//! SQLite-backed note store implementation.

mod connection;
mod repo_impl;

#[cfg(test)]
mod tests;

use rusqlite::Connection;

/// SQLite-backed note store.
///
/// Holds the database connection; every operation runs as a single
/// statement or transaction that is committed before it returns.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
