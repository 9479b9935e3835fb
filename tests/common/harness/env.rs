//! Isolated test environment with temp directory.

use super::JotboxCommand;
use jotbox::store::{FileStore, NoteStore, SQLITE_FILE_NAME};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// `JOTBOX_CONFIG` points into the same temp dir, so a user's own
/// `jotbox/config.toml` never leaks into a test run on any platform.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
    /// Directory holding the isolated config file
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            config_home,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the path where the SQLite backend keeps its database.
    pub fn db_path(&self) -> PathBuf {
        self.notes_dir.join(SQLITE_FILE_NAME)
    }

    /// Returns the config file path handed to the binary.
    pub fn config_path(&self) -> PathBuf {
        self.config_home.join("config.toml")
    }

    /// Writes the isolated config file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Saves a note directly through the file store.
    pub fn add_note(&self, title: &str, content: &str) {
        let mut store = FileStore::open(&self.notes_dir).expect("Failed to open store");
        store.save(title, content).expect("Failed to save test note");
    }

    /// Opens the file store for direct inspection.
    pub fn store(&self) -> FileStore {
        FileStore::open(&self.notes_dir).expect("Failed to open store")
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> JotboxCommand {
        self.cmd_without_dir().dir(&self.notes_dir)
    }

    /// Creates a command that relies on config or environment for the notes directory.
    pub fn cmd_without_dir(&self) -> JotboxCommand {
        JotboxCommand::new().env("JOTBOX_CONFIG", &self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
