//! Cursor context analysis over raw, possibly unfinished query text.
//!
//! This is deliberately a heuristic scanner, not a parser: the text under
//! the cursor is mid-edit and rarely parses. The scanner tracks `{`/`}`
//! pairs before the cursor to recover the field path of the enclosing
//! selection sets and treats argument parentheses as opaque. It never
//! fails; unrecoverable text degrades to [`CursorContext::Unresolved`].

use crate::text::{is_word_char, utf16_to_byte_offset, word_start};

/// Which root operation type the document under edit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// What the cursor position means for completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorContext<'a> {
    /// No enclosing braces: an operation keyword is being typed.
    /// `partial` is the trimmed text of the current line.
    Root { partial: &'a str },
    /// Inside an unclosed argument list; field suggestions are suppressed.
    ArgumentList,
    /// Inside one or more selection sets.
    Selection {
        operation: OperationKind,
        /// Field names selected at each enclosing depth, outermost first.
        path: Vec<&'a str>,
        /// The trailing word run being typed at the cursor.
        partial: &'a str,
    },
    /// The enclosing selection path could not be recovered from the text.
    Unresolved,
}

impl<'a> CursorContext<'a> {
    /// Analyzes `text` up to the UTF-16 `offset` and classifies the cursor
    /// position. Pure function of its inputs; linear in the text before the
    /// cursor.
    #[must_use]
    pub fn at(text: &'a str, offset: usize) -> Self {
        let cursor = utf16_to_byte_offset(text, offset);
        let before = &text[..cursor];

        if in_argument_list(before) {
            return Self::ArgumentList;
        }

        // One stack entry per unclosed `{`. Each entry is the trailing
        // `name(args)?` token of the text between the previous brace and
        // this one; a `}` pops the entry of the brace it closes, so closed
        // sibling selections drop out of the path.
        let parts: Vec<&'a str> = before.split('{').collect();
        let mut stack: Vec<Option<&'a str>> = Vec::new();
        for (i, part) in parts.iter().copied().enumerate() {
            for _ in part.matches('}') {
                stack.pop();
            }
            if i + 1 < parts.len() {
                stack.push(trailing_token(part));
            }
        }

        if stack.is_empty() {
            let line = before.rsplit('\n').next().unwrap_or(before);
            return Self::Root {
                partial: line.trim(),
            };
        }

        // The bottom entry belongs to the operation block itself; only the
        // entries above it are field hops.
        let mut path = Vec::with_capacity(stack.len() - 1);
        for hop in stack.into_iter().skip(1) {
            match hop {
                Some(name) => path.push(name),
                None => return Self::Unresolved,
            }
        }

        let partial = &before[word_start(before, before.len())..];
        Self::Selection {
            operation: operation_kind(before),
            path,
            partial,
        }
    }
}

/// True when the cursor sits inside an unclosed argument list.
fn in_argument_list(before: &str) -> bool {
    let mut depth = 0usize;
    for ch in before.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    depth > 0
}

/// The operation keyword rule: `query` wins over `mutation` wins over
/// `subscription`; a document naming none of them defaults to a query.
fn operation_kind(before: &str) -> OperationKind {
    if contains_token(before, "query") {
        OperationKind::Query
    } else if contains_token(before, "mutation") {
        OperationKind::Mutation
    } else if contains_token(before, "subscription") {
        OperationKind::Subscription
    } else {
        OperationKind::Query
    }
}

/// Whole-token search: `token` must not touch a word character on either side.
fn contains_token(haystack: &str, token: &str) -> bool {
    haystack.match_indices(token).any(|(start, _)| {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[start + token.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

/// Extracts the trailing `name(args)?` token of a brace-delimited segment.
///
/// Only the text after the segment's last `}` can name the field that
/// opened the following brace; an argument list directly before that brace
/// is skipped so argument text is never mistaken for a field name.
fn trailing_token(part: &str) -> Option<&str> {
    let tail = match part.rfind('}') {
        Some(i) => &part[i + 1..],
        None => part,
    };
    let mut tail = tail.trim_end();

    if tail.ends_with(')') {
        let mut depth = 0usize;
        let mut open = None;
        for (idx, ch) in tail.char_indices().rev() {
            match ch {
                ')' => depth += 1,
                '(' => {
                    depth -= 1;
                    if depth == 0 {
                        open = Some(idx);
                        break;
                    }
                }
                _ => {}
            }
        }
        tail = tail[..open?].trim_end();
    }

    let token = &tail[word_start(tail, tail.len())..];
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
