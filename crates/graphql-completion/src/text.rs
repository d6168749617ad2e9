//! Offset and word-run helpers shared by context analysis and suggestion
//! application.
//!
//! Cursor offsets arrive as UTF-16 code units, matching text-area selection
//! semantics in the embedding editor, and are converted to byte offsets
//! before any slicing.

/// Word characters as the editor heuristics understand them.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Converts a UTF-16 code-unit offset to a byte offset into `text`.
///
/// Offsets past the end of the text, or landing inside a surrogate pair,
/// clamp to the next character boundary.
pub(crate) fn utf16_to_byte_offset(text: &str, offset: usize) -> usize {
    let mut units = 0usize;
    for (byte_idx, ch) in text.char_indices() {
        if units >= offset {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// Length of `text` in UTF-16 code units.
pub(crate) fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Byte index where the trailing word run ending at `end` begins.
///
/// Returns `end` itself when the character before it is not a word
/// character (an empty run).
pub(crate) fn word_start(text: &str, end: usize) -> usize {
    let mut start = end;
    for (idx, ch) in text[..end].char_indices().rev() {
        if is_word_char(ch) {
            start = idx;
        } else {
            break;
        }
    }
    start
}
