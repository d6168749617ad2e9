//! GraphQL schema model built from introspection responses.
//!
//! This crate turns the raw JSON of a standard introspection query into a
//! normalized, immutable [`Schema`] providing:
//! - The root operation type names
//! - An O(1) lookup from type name to definition
//! - Wrapped type references that render back to canonical GraphQL
//!   signatures
//!
//! # Examples
//!
//! ```
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
//!                 { "name": "hello", "args": [], "type": { "kind": "SCALAR", "name": "String" } }
//!             ]
//!         }
//!     ]
//! }))?;
//!
//! let query = schema.lookup("Query").unwrap();
//! assert_eq!(query.field("hello").unwrap().ty.render(), "String");
//! # Ok::<(), graphql_schema::SchemaError>(())
//! ```

mod error;
mod introspection;
mod query;
mod schema;

pub use error::{Result, SchemaError};
pub use introspection::*;
pub use query::INTROSPECTION_QUERY;
pub use schema::{
    is_built_in_scalar, Argument, EnumValue, Field, NamedType, Schema, TypeRef, BUILT_IN_SCALARS,
};
