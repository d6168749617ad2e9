//! Applying an accepted suggestion to the document text.

use crate::text::{utf16_len, utf16_to_byte_offset, word_start};
use crate::types::SuggestionItem;

/// Result of applying a suggestion: the edited document and the new cursor
/// offset (UTF-16 code units), placed directly after the inserted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSuggestion {
    pub text: String,
    pub cursor: usize,
}

/// Replaces the in-progress word with the suggestion's insert text.
///
/// The in-progress word is the trailing word run directly before the
/// cursor; when the cursor does not touch a word (e.g. right after `{`),
/// the insert text is inserted as-is.
#[must_use]
pub fn apply_suggestion(
    text: &str,
    offset: usize,
    suggestion: &SuggestionItem,
) -> AppliedSuggestion {
    let cursor = utf16_to_byte_offset(text, offset);
    let start = word_start(text, cursor);

    let mut edited = String::with_capacity(text.len() + suggestion.insert_text.len());
    edited.push_str(&text[..start]);
    edited.push_str(&suggestion.insert_text);
    edited.push_str(&text[cursor..]);

    let cursor = utf16_len(&text[..start]) + utf16_len(&suggestion.insert_text);
    AppliedSuggestion {
        text: edited,
        cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SuggestionKind;

    fn field(label: &str, insert: &str) -> SuggestionItem {
        SuggestionItem::new(label, SuggestionKind::Field).with_insert_text(insert)
    }

    #[test]
    fn test_replaces_trailing_word() {
        let applied = apply_suggestion("query { coun", 12, &field("countries", "countries {"));
        assert_eq!(applied.text, "query { countries {");
        assert_eq!(applied.cursor, 19);
    }

    #[test]
    fn test_inserts_after_brace_without_word() {
        let applied = apply_suggestion("query { ", 8, &field("name", "name"));
        assert_eq!(applied.text, "query { name");
        assert_eq!(applied.cursor, 12);
    }

    #[test]
    fn test_preserves_text_after_cursor() {
        let applied = apply_suggestion("query { coun }", 12, &field("country", "country("));
        assert_eq!(applied.text, "query { country( }");
        assert_eq!(applied.cursor, 16);
    }

    #[test]
    fn test_mid_word_cursor_keeps_word_tail() {
        // Only the run before the cursor is replaced.
        let applied = apply_suggestion("query { country }", 11, &field("code", "code"));
        assert_eq!(applied.text, "query { codentry }");
        assert_eq!(applied.cursor, 12);
    }
}
