//! Tool names as constants for dispatch matching.

pub const SAVE_NOTE: &str = "save_note";
pub const GET_NOTE: &str = "get_note";
pub const LIST_NOTE_TITLES: &str = "list_note_titles";
pub const LIST_NOTES: &str = "list_notes";
pub const DELETE_NOTE: &str = "delete_note";

/// Every tool name, in the order definitions are published.
pub const ALL: [&str; 5] = [SAVE_NOTE, GET_NOTE, LIST_NOTE_TITLES, LIST_NOTES, DELETE_NOTE];
