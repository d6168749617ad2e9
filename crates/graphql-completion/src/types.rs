//! POD types for completion results.
//!
//! Plain structs with public fields; they are the interface between the
//! resolver and whatever editor surface renders the dropdown. Items are
//! recomputed on every resolution call and never persisted.

/// What a suggestion completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// An operation keyword at the document root.
    Keyword,
    /// A field of the current scope type.
    Field,
}

/// One ranked completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// Text shown in the dropdown and matched against.
    pub label: String,
    pub kind: SuggestionKind,
    /// Text inserted on acceptance; may extend the label, e.g. with `(` for
    /// fields taking arguments or ` {` for selectable fields.
    pub insert_text: String,
    /// Rendered type signature, when the suggestion has one.
    pub detail: Option<String>,
    /// Schema description, when the suggestion has one.
    pub documentation: Option<String>,
}

impl SuggestionItem {
    /// Creates a suggestion whose insert text equals its label.
    pub fn new(label: impl Into<String>, kind: SuggestionKind) -> Self {
        let label = label.into();
        Self {
            insert_text: label.clone(),
            label,
            kind,
            detail: None,
            documentation: None,
        }
    }

    #[must_use]
    pub fn with_insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = text.into();
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_item_builder() {
        let item = SuggestionItem::new("capital", SuggestionKind::Field)
            .with_detail("String")
            .with_documentation("The capital city");

        assert_eq!(item.label, "capital");
        assert_eq!(item.insert_text, "capital");
        assert_eq!(item.detail, Some("String".to_string()));
        assert_eq!(item.documentation, Some("The capital city".to_string()));
    }

    #[test]
    fn test_insert_text_defaults_to_label() {
        let item = SuggestionItem::new("query", SuggestionKind::Keyword);
        assert_eq!(item.insert_text, "query");
    }
}
