//! File names for stored notes.

use crate::domain::Title;
use sha2::{Digest, Sha256};

/// Extension of note documents written by the file store.
pub const NOTE_EXTENSION: &str = "json";

/// Longest file stem `encode_key` produces, in bytes.
///
/// Leaves room for the extension under the common 255-byte file name limit.
pub const MAX_STEM_BYTES: usize = 200;

/// Hex digits of the key hash appended to shortened stems.
const HASH_HEX_LEN: usize = 16;

/// Marks a shortened stem; always escaped in regular stems.
const HASH_SEPARATOR: char = '~';

/// Encodes a title key as a file stem.
///
/// Keys are already lowercase with spaces turned into underscores, so most
/// characters are written as they are. Only characters that would change
/// the path or hide the file are escaped as `%XX` per UTF-8 byte:
///
/// - `/`, `\` and control characters
/// - `%` and `~`, so escapes and shortened stems stay unambiguous
/// - a leading `.`
///
/// A stem longer than [`MAX_STEM_BYTES`] is cut at a character boundary and
/// suffixed with `~` and a hash of the whole key. The full title lives in
/// the document, so nothing is lost.
///
/// # Examples
///
/// ```
/// use jotbox::infra::encode_key;
///
/// assert_eq!(encode_key("weekly_plan"), "weekly_plan");
/// assert_eq!(encode_key("hello,_world!"), "hello,_world!");
/// assert_eq!(encode_key("a/b"), "a%2Fb");
/// ```
pub fn encode_key(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for (i, c) in key.chars().enumerate() {
        if needs_escape(c, i == 0) {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                stem.push_str(&format!("%{:02X}", byte));
            }
        } else {
            stem.push(c);
        }
    }

    if stem.len() > MAX_STEM_BYTES {
        shorten(&stem, key)
    } else {
        stem
    }
}

fn needs_escape(c: char, first: bool) -> bool {
    matches!(c, '/' | '\\' | '%' | HASH_SEPARATOR) || c.is_control() || (first && c == '.')
}

fn shorten(stem: &str, key: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(key.as_bytes()));

    let mut cut = MAX_STEM_BYTES - HASH_HEX_LEN - HASH_SEPARATOR.len_utf8();
    while !stem.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}{}{}", &stem[..cut], HASH_SEPARATOR, &digest[..HASH_HEX_LEN])
}

/// Generates the file name holding a note.
///
/// Format: `{encoded-key}.json`
///
/// # Examples
///
/// ```
/// use jotbox::domain::Title;
/// use jotbox::infra::note_filename;
///
/// let title = Title::new("Groceries").unwrap();
/// assert_eq!(note_filename(&title), "groceries.json");
/// ```
pub fn note_filename(title: &Title) -> String {
    format!("{}.{}", encode_key(title.key()), NOTE_EXTENSION)
}
