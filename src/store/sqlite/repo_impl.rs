//! NoteStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Note, Title};
use crate::store::{NoteStore, SaveOutcome, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;

type NoteRow = (String, String, String, String);

impl NoteStore for SqliteStore {
    fn save(&mut self, title: &str, content: &str) -> StoreResult<SaveOutcome> {
        let title = Title::new(title)?;
        let now = Utc::now().to_rfc3339();

        let tx = self.conn.transaction()?;
        let existed = tx
            .query_row(
                "SELECT 1 FROM notes WHERE key = ?",
                [title.key()],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        // Upsert keeps seq, so an overwrite does not move the note in listings
        tx.execute(
            "INSERT INTO notes (key, title, content, created, modified)
             VALUES (?1, ?2, ?3, ?4, ?4)
             ON CONFLICT(key) DO UPDATE SET
                title = excluded.title,
                content = excluded.content,
                modified = excluded.modified",
            params![title.key(), title.as_str(), content, now],
        )?;
        tx.commit()?;

        let outcome = if existed {
            SaveOutcome::Updated
        } else {
            SaveOutcome::Created
        };
        debug!(title = %title, ?outcome, "saved note");
        Ok(outcome)
    }

    fn get(&self, title: &str) -> StoreResult<Note> {
        let title = Title::new(title)?;

        let row = self
            .conn
            .query_row(
                "SELECT title, content, created, modified FROM notes WHERE key = ?",
                [title.key()],
                read_note_row,
            )
            .optional()?;

        match row {
            Some(row) => note_from_row(row),
            None => Err(StoreError::not_found(title.as_str())),
        }
    }

    fn list_titles(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT title FROM notes ORDER BY seq")?;
        let titles = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(titles)
    }

    fn list_all(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, content, created, modified FROM notes ORDER BY seq")?;
        let rows = stmt
            .query_map([], read_note_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(note_from_row).collect()
    }

    fn delete(&mut self, title: &str) -> StoreResult<()> {
        let title = Title::new(title)?;

        let removed = self
            .conn
            .execute("DELETE FROM notes WHERE key = ?", [title.key()])?;
        if removed == 0 {
            return Err(StoreError::not_found(title.as_str()));
        }

        debug!(title = %title, "deleted note");
        Ok(())
    }

    fn close(self: Box<Self>) -> StoreResult<()> {
        let store = *self;
        store
            .conn
            .close()
            .map_err(|(_conn, e)| StoreError::Database(e))
    }
}

fn read_note_row(row: &Row<'_>) -> rusqlite::Result<NoteRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn note_from_row((title, content, created, modified): NoteRow) -> StoreResult<Note> {
    let title = Title::new(&title)
        .map_err(|e| StoreError::Corrupt(format!("invalid stored title '{}': {}", title, e)))?;
    Ok(Note::new(
        &title,
        content,
        parse_timestamp(&created, "created")?,
        parse_timestamp(&modified, "modified")?,
    ))
}

fn parse_timestamp(value: &str, field: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("invalid {} timestamp '{}': {}", field, value, e)))
}
