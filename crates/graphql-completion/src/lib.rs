//! Completion engine for GraphQL query text under edit.
//!
//! Given the full document text, a cursor offset, and a
//! [`graphql_schema::Schema`], this crate provides:
//! - Cursor position classification ([`CursorContext`]): operation keyword
//!   at the document root, field selection at any nesting depth, argument
//!   list
//! - Ranked [`SuggestionItem`]s for that position via [`resolve`]
//! - The corresponding text edit via [`apply_suggestion`]
//!
//! Everything here is a pure function of `(text, offset, schema)`. There is
//! no session state and no error path; contexts that cannot be completed
//! yield an empty suggestion list.
//!
//! # Examples
//!
//! ```
//! use graphql_completion::resolve;
//! use graphql_schema::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::build(&json!({
//!     "queryType": { "name": "Query" },
//!     "types": [
//!         {
//!             "kind": "OBJECT",
//!             "name": "Query",
//!             "fields": [
//!                 { "name": "hero", "args": [], "type": { "kind": "SCALAR", "name": "String" } }
//!             ]
//!         }
//!     ]
//! }))?;
//!
//! let suggestions = resolve("query {\n  he", 12, Some(&schema));
//! assert_eq!(suggestions[0].label, "hero");
//! # Ok::<(), graphql_schema::SchemaError>(())
//! ```

mod apply;
mod context;
mod resolve;
mod text;
mod types;

pub use apply::{apply_suggestion, AppliedSuggestion};
pub use context::{CursorContext, OperationKind};
pub use resolve::resolve;
pub use types::{SuggestionItem, SuggestionKind};
