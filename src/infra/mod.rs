//! File I/O and note file naming

mod filename;
mod fs;

pub use filename::{MAX_STEM_BYTES, NOTE_EXTENSION, encode_key, note_filename};
pub use fs::{
    FsError, ensure_dir, read_note_file, remove_note_file, scan_note_files, write_note_file,
};
