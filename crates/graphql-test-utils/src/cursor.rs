//! Cursor position extraction for completion tests.
//!
//! Completion APIs take the document text plus a UTF-16 cursor offset.
//! Writing offsets by hand makes tests unreadable, so test sources mark the
//! cursor with a `*` character and this module strips the marker and
//! returns the offset.

/// Extract the cursor offset from source marked with `*`.
///
/// The returned offset counts UTF-16 code units, matching what the
/// completion entry points expect from text-area selections.
///
/// # Example
///
/// ```
/// use graphql_test_utils::extract_cursor;
///
/// let (source, offset) = extract_cursor("query { coun* }");
/// assert_eq!(source, "query { coun }");
/// assert_eq!(offset, 12);
/// ```
///
/// # Panics
///
/// Panics if the input contains no `*` marker or multiple `*` markers.
pub fn extract_cursor(input: &str) -> (String, usize) {
    let marker_count = input.chars().filter(|&c| c == '*').count();

    assert!(
        marker_count != 0,
        "extract_cursor: input must contain exactly one '*' marker, found none"
    );
    assert!(
        marker_count <= 1,
        "extract_cursor: input must contain exactly one '*' marker, found {marker_count}"
    );

    let mut units = 0usize;
    let mut found = None;
    let mut clean = String::with_capacity(input.len() - 1);
    for ch in input.chars() {
        if ch == '*' {
            found = Some(units);
        } else {
            clean.push(ch);
            units += ch.len_utf16();
        }
    }

    (clean, found.unwrap_or(units))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_cursor_mid_word() {
        let (source, offset) = extract_cursor("query { user*Name }");
        assert_eq!(source, "query { userName }");
        assert_eq!(offset, 12);
    }

    #[test]
    fn test_extract_cursor_multiline() {
        let (source, offset) = extract_cursor("query {\n  coun*\n}");
        assert_eq!(source, "query {\n  coun\n}");
        assert_eq!(offset, 14);
    }

    #[test]
    fn test_extract_cursor_end_of_input() {
        let (source, offset) = extract_cursor("query { cou*");
        assert_eq!(source, "query { cou");
        assert_eq!(offset, 11);
    }

    #[test]
    fn test_extract_cursor_counts_utf16_units() {
        let (source, offset) = extract_cursor("# 🚀\nquery {*");
        assert_eq!(source, "# 🚀\nquery {");
        assert_eq!(offset, 12);
    }

    #[test]
    #[should_panic(expected = "found none")]
    fn test_extract_cursor_no_marker() {
        extract_cursor("query { user }");
    }

    #[test]
    #[should_panic(expected = "found 2")]
    fn test_extract_cursor_multiple_markers() {
        extract_cursor("query { *user* }");
    }
}
