//! WebAssembly bindings for the GraphQL workbench completion core.
//!
//! This crate exposes the schema model and the completion resolver to the
//! browser UI: the editor hands over the introspection JSON once, then asks
//! for suggestions on every keystroke.
//!
//! # Example
//!
//! ```javascript
//! import init, { Workbench } from '@graphql-workbench/wasm';
//!
//! async function main() {
//!     await init();
//!
//!     const workbench = new Workbench();
//!     workbench.loadIntrospection(introspectionJson);
//!
//!     const suggestions = workbench.complete('query {\n  coun', 14);
//!     console.log(suggestions[0].label);      // "countries"
//!     console.log(suggestions[0].insertText); // "countries {"
//! }
//! ```

// For WASM bindings, #[must_use] doesn't make sense since JS controls return value usage
#![allow(clippy::must_use_candidate)]
// These are public WASM bindings, not library APIs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

use graphql_completion::{apply_suggestion, resolve, SuggestionItem, SuggestionKind};
use graphql_schema::Schema;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module with panic hooks for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A completion suggestion as handed to JavaScript.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Suggestion {
    label: String,
    insert_text: String,
    detail: Option<String>,
    documentation: Option<String>,
}

impl From<SuggestionItem> for Suggestion {
    fn from(item: SuggestionItem) -> Self {
        Self {
            label: item.label,
            insert_text: item.insert_text,
            detail: item.detail,
            documentation: item.documentation,
        }
    }
}

/// Edit produced by accepting a suggestion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct AppliedEdit {
    new_text: String,
    new_cursor_offset: usize,
}

/// The workbench host object: holds the active endpoint's schema and
/// answers completion queries from the editor.
#[wasm_bindgen]
pub struct Workbench {
    schema: Option<Schema>,
}

#[wasm_bindgen]
impl Workbench {
    /// Create a workbench with no schema loaded. Completion is a no-op
    /// until [`Workbench::load_introspection`] succeeds.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Workbench {
        Workbench { schema: None }
    }

    /// Install a schema from introspection response JSON.
    ///
    /// Accepts either the full `{"data": {"__schema": ...}}` envelope or
    /// the bare `__schema` object. On failure the previously loaded schema
    /// stays in place.
    #[wasm_bindgen(js_name = loadIntrospection)]
    pub fn load_introspection(&mut self, json: &str) -> Result<(), JsValue> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("invalid introspection JSON: {e}")))?;
        let schema_value = value.pointer("/data/__schema").unwrap_or(&value);
        let schema =
            Schema::build(schema_value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.schema = Some(schema);
        Ok(())
    }

    /// Check if a schema has been loaded.
    #[wasm_bindgen(js_name = hasSchema, getter)]
    pub fn has_schema(&self) -> bool {
        self.schema.is_some()
    }

    /// Ranked suggestions for the token at `offset` (UTF-16 code units,
    /// matching text-area selection offsets).
    #[wasm_bindgen]
    pub fn complete(&self, text: &str, offset: usize) -> Result<JsValue, JsValue> {
        let items: Vec<Suggestion> = resolve(text, offset, self.schema.as_ref())
            .into_iter()
            .map(Suggestion::from)
            .collect();
        serde_wasm_bindgen::to_value(&items).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Apply an accepted suggestion's insert text, replacing the
    /// in-progress word before the cursor. Returns
    /// `{ newText, newCursorOffset }`.
    #[wasm_bindgen(js_name = applySuggestion)]
    pub fn apply(&self, text: &str, offset: usize, insert_text: &str) -> Result<JsValue, JsValue> {
        let item =
            SuggestionItem::new(insert_text, SuggestionKind::Field).with_insert_text(insert_text);
        let applied = apply_suggestion(text, offset, &item);
        serde_wasm_bindgen::to_value(&AppliedEdit {
            new_text: applied.text,
            new_cursor_offset: applied.cursor,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// User-defined type names in declaration order, for the schema
    /// browser's "all types" list.
    #[wasm_bindgen(js_name = typeNames, getter)]
    pub fn type_names(&self) -> Vec<String> {
        self.schema
            .as_ref()
            .map(|schema| {
                schema
                    .user_defined_types()
                    .map(|t| t.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drop the active schema, e.g. when the endpoint changes.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.schema = None;
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_test_utils::{country_introspection, response_envelope};

    #[test]
    fn test_workbench_starts_without_schema() {
        let workbench = Workbench::new();
        assert!(!workbench.has_schema());
        assert!(workbench.type_names().is_empty());
    }

    #[test]
    fn test_load_introspection_envelope() {
        let mut workbench = Workbench::new();
        workbench
            .load_introspection(&response_envelope(country_introspection()).to_string())
            .unwrap();
        assert!(workbench.has_schema());
        assert_eq!(
            workbench.type_names(),
            vec!["Country", "Continent", "SearchResult"]
        );
    }

    #[test]
    fn test_load_introspection_bare_schema_object() {
        let mut workbench = Workbench::new();
        workbench
            .load_introspection(&country_introspection().to_string())
            .unwrap();
        assert!(workbench.has_schema());
    }

    #[test]
    fn test_reset_drops_schema() {
        let mut workbench = Workbench::new();
        workbench
            .load_introspection(&country_introspection().to_string())
            .unwrap();
        workbench.reset();
        assert!(!workbench.has_schema());
    }
}
