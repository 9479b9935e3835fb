//! One-document-per-note store on the local file system.

use crate::domain::{Note, Title};
use crate::infra::{
    FsError, ensure_dir, note_filename, read_note_file, remove_note_file, scan_note_files,
    write_note_file,
};
use crate::store::{NoteStore, SaveOutcome, StoreError, StoreResult};
use chrono::Utc;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Note store keeping each note as a JSON document in a directory.
///
/// The file name is derived from the title's key (see
/// [`note_filename`](crate::infra::note_filename)); each document holds the
/// title, content and timestamps. Writes are atomic and synced, so every
/// saved note is durable once `save` returns.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        info!(dir = %dir.display(), "opened file note store");
        Ok(Self { dir })
    }

    /// Returns the notes directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the document for a title.
    pub fn path_for(&self, title: &Title) -> PathBuf {
        self.dir.join(note_filename(title))
    }
}

impl NoteStore for FileStore {
    fn save(&mut self, title: &str, content: &str) -> StoreResult<SaveOutcome> {
        let title = Title::new(title)?;
        let path = self.path_for(&title);
        let now = Utc::now();

        let (note, outcome) = match read_note_file(&path) {
            Ok(existing) => (
                existing.overwritten(&title, content, now),
                SaveOutcome::Updated,
            ),
            Err(e) if e.is_not_found() => {
                (Note::new(&title, content, now, now), SaveOutcome::Created)
            }
            Err(e) if e.is_unreadable_document() => {
                warn!(path = %path.display(), error = %e, "replacing unreadable note document");
                (Note::new(&title, content, now, now), SaveOutcome::Updated)
            }
            Err(e) => return Err(e.into()),
        };

        write_note_file(&path, &note)?;
        debug!(title = %title, ?outcome, "saved note");
        Ok(outcome)
    }

    fn get(&self, title: &str) -> StoreResult<Note> {
        let title = Title::new(title)?;
        match read_note_file(&self.path_for(&title)) {
            Ok(note) => Ok(note),
            Err(FsError::NotFound { .. }) => Err(StoreError::not_found(title.as_str())),
            Err(e) => Err(e.into()),
        }
    }

    fn list_all(&self) -> StoreResult<Vec<Note>> {
        let mut notes = Vec::new();
        for path in scan_note_files(&self.dir)? {
            let note = read_note_file(&path)?;
            if holds_own_title(&path, &note) {
                notes.push(note);
            } else {
                warn!(
                    path = %path.display(),
                    title = note.title(),
                    "skipping note document not named after its title"
                );
            }
        }

        // Timestamps have sub-second precision, so this is save order in practice
        notes.sort_by(|a, b| {
            a.created()
                .cmp(&b.created())
                .then_with(|| a.title().cmp(b.title()))
        });
        Ok(notes)
    }

    fn delete(&mut self, title: &str) -> StoreResult<()> {
        let title = Title::new(title)?;
        match remove_note_file(&self.path_for(&title)) {
            Ok(()) => {
                debug!(title = %title, "deleted note");
                Ok(())
            }
            Err(FsError::NotFound { .. }) => Err(StoreError::not_found(title.as_str())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Returns true if `path` is where `get` and `delete` look for the note.
///
/// Only such documents are listed, so every listed title can be fetched and
/// a stray copy never shows a title twice.
fn holds_own_title(path: &Path, note: &Note) -> bool {
    Title::new(note.title())
        .map(|title| path.file_name() == Some(OsStr::new(&note_filename(&title))))
        .unwrap_or(false)
}
